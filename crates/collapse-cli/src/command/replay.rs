use collapse_engine::{identify_pentomino, replay};

#[derive(Debug, Clone, clap::Args)]
pub struct ReplayArg {
    /// Seed the game was started from
    seed: u64,
    /// Recorded move log, one symbol per move
    moves: String,
}

pub fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg { seed, moves } = arg;

    let grid = replay(*seed, moves);

    println!("Seed:  {seed}");
    println!("Moves: {} accepted of {} supplied", grid.moves().len(), moves.chars().count());
    println!("Score: {}", grid.score());
    println!();

    // Row 0 is the bottom of a column; print top row first.
    for row in (0..grid.height()).rev() {
        let line: Vec<String> = (0..grid.width())
            .map(|col| {
                grid.tile(col, row).map_or_else(
                    || ".".to_string(),
                    |tile| {
                        if tile.is_terminal() {
                            tile.shape()
                                .and_then(identify_pentomino)
                                .map_or_else(|| "#".to_string(), |letter| letter.to_string())
                        } else {
                            tile.value().to_string()
                        }
                    },
                )
            })
            .collect();
        println!("  {}", line.join(" "));
    }
    println!();

    if grid.is_game_over() {
        println!("The game is over; no legal moves remain.");
    } else {
        println!("The game is still in progress.");
    }

    let shapes = grid.shapes();
    if shapes.is_empty() {
        println!("No shapes were completed.");
    } else {
        println!("Completed shapes ({}):", shapes.len());
        for (index, shape) in shapes.iter().enumerate() {
            match identify_pentomino(shape) {
                Some(letter) => println!("\n#{} - {letter}-pentomino", index + 1),
                None => println!("\n#{} - {} cells", index + 1, shape.len()),
            }
            for line in shape.ascii_art().lines() {
                println!("    {line}");
            }
        }
    }

    Ok(())
}
