#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use mancala::{
    choose_mode, init_logging, AiPlayer, CliPlayer, Difficulty, GameConfig, GameEngine, Mode,
    Player, Session, DEFAULT_PITS_PER_PLAYER, DEFAULT_STARTING_BEADS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io;

#[derive(Parser)]
#[command(author, version, about = "Play mancala in the terminal.", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_STARTING_BEADS, help = "Beads in each pit at the start")]
    beads: u32,
    #[arg(long, default_value_t = DEFAULT_PITS_PER_PLAYER, help = "Pits on each side of the board")]
    pits: usize,
    #[arg(long, help = "Skip the pause before computer moves")]
    no_pause: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Easy,
    Medium,
    Hard,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two humans take turns at the same terminal.
    TwoPlayer,
    /// Play against the computer.
    Single {
        #[arg(long, value_enum, default_value_t = Level::Easy)]
        difficulty: Level,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.beads, cli.pits);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid board: {}", e))?;

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    println!("\nMANCALA\n\n");
    let mode = match cli.command {
        Some(Commands::TwoPlayer) => Mode::TwoPlayer,
        Some(Commands::Single { difficulty }) => Mode::Single(difficulty.into()),
        None => choose_mode(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let opponent: Box<dyn Player> = match mode {
        Mode::TwoPlayer => Box::new(CliPlayer::new()),
        Mode::Single(difficulty) => {
            log::info!("computer plays on {} difficulty", difficulty);
            Box::new(AiPlayer::new(difficulty))
        }
    };

    let engine = GameEngine::new(config.build()?);
    let mut session = Session::new(engine, Box::new(CliPlayer::new()), opponent);
    if cli.no_pause {
        session = session.without_pause();
    }
    session.run(&mut rng)?;
    Ok(())
}
