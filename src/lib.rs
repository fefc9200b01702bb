#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod engine;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod menu;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{AiPlayer, Player};
#[cfg(feature = "std")]
pub use player::CliPlayer;
#[cfg(feature = "std")]
pub use menu::{choose_mode, Mode};
#[cfg(feature = "std")]
pub use session::Session;
#[cfg(feature = "std")]
pub use ui::{render_board, write_board};
