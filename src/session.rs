#![cfg(feature = "std")]

//! Game driver: alternates two players over one `GameEngine`, re-prompting on
//! empty pits, granting extra turns and rendering after every move.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;

use crate::engine::{
    BoardError, GameEngine, GameStatus, Outcome, Side, THINKING_STEPS, THINKING_STEP_MS,
};
use crate::player::Player;
use crate::ui::write_board;

pub struct Session {
    engine: GameEngine,
    players: [Box<dyn Player>; 2],
    output: Box<dyn Write + Send>,
    thinking_steps: u32,
    thinking_step: Duration,
}

impl Session {
    /// Session printing to stdout with the default thinking pause.
    pub fn new(engine: GameEngine, player_one: Box<dyn Player>, player_two: Box<dyn Player>) -> Self {
        Self {
            engine,
            players: [player_one, player_two],
            output: Box::new(io::stdout()),
            thinking_steps: THINKING_STEPS,
            thinking_step: Duration::from_millis(THINKING_STEP_MS),
        }
    }

    pub fn with_output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Print `steps` dots, `step` apart, before each computer move.
    pub fn with_thinking_pause(mut self, steps: u32, step: Duration) -> Self {
        self.thinking_steps = steps;
        self.thinking_step = step;
        self
    }

    pub fn without_pause(self) -> Self {
        self.with_thinking_pause(0, Duration::ZERO)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn think(&mut self, side: Side) -> io::Result<()> {
        if self.thinking_steps == 0 {
            return Ok(());
        }
        write!(self.output, "\n[{}] - Moving.", side.label())?;
        self.output.flush()?;
        for _ in 0..self.thinking_steps {
            thread::sleep(self.thinking_step);
            write!(self.output, ".")?;
            self.output.flush()?;
        }
        writeln!(self.output, "\n")
    }

    /// Play until one side runs out of beads and return the result.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Outcome> {
        write_board(&mut self.output, self.engine.board())?;
        // An extra turn is played straight away, without a second pause.
        let mut replaying = false;
        loop {
            if let GameStatus::Finished(outcome) = self.engine.status() {
                log::info!(
                    "game over after {} moves: {} (stores {} - {})",
                    self.engine.turn_count(),
                    outcome,
                    self.engine.board().store(Side::One),
                    self.engine.board().store(Side::Two)
                );
                writeln!(self.output, "{}", outcome)?;
                self.output.flush()?;
                return Ok(outcome);
            }

            let side = self.engine.turn();
            if self.players[side.index()].is_computer() && !replaying {
                self.think(side)?;
            }
            let pit = self.players[side.index()].select_pit(rng, self.engine.board(), side)?;
            match self.engine.play(pit) {
                Ok(result) => {
                    log::info!("{} played pit {}: {:?}", side, pit, result);
                    replaying = result.extra_turn();
                    self.players[side.index()].handle_move_result(side, pit, result);
                    write_board(&mut self.output, self.engine.board())?;
                }
                Err(BoardError::NoBeadsToMove) => {
                    log::debug!("{} chose empty pit {}", side, pit);
                    writeln!(self.output, "Please move a bucket with beads in it.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
