#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use mancala::{AiPlayer, BoardState, Difficulty, GameConfig, GameEngine, Session, Side};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Computer-vs-computer game; prints a JSON summary of the result.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    mancala::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let engine = GameEngine::new(GameConfig::default().build()?);
    let mut session = Session::new(
        engine,
        Box::new(AiPlayer::new(Difficulty::Easy)),
        Box::new(AiPlayer::new(Difficulty::Easy)),
    )
    .with_output(std::io::sink())
    .without_pause();
    let outcome = session.run(&mut rng)?;

    let board = session.engine().board();
    let winner = match outcome.code() {
        0 => None,
        n => Some(format!("player{}", n)),
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "stores": {
            "player1": board.store(Side::One),
            "player2": board.store(Side::Two),
        },
        "moves": session.engine().turn_count(),
        "board": BoardState::from(board),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
