use anyhow::bail;
use collapse_engine::replay;

#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArg {
    /// Seed the game was started from
    seed: u64,
    /// Recorded move log, one symbol per move
    moves: String,
    /// Claimed final score
    score: u64,
}

pub fn run(arg: &ValidateArg) -> anyhow::Result<()> {
    let ValidateArg { seed, moves, score } = arg;

    let replayed = replay(*seed, moves).score();
    if replayed != *score {
        bail!("claimed score {score} does not replay: the move log yields {replayed}");
    }

    println!("OK: {score} points replay from seed {seed}");
    Ok(())
}
