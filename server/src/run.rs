use std::io::{self, BufRead, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use common::maze::Maze;

use crate::{
    config::Config,
    error::ServerError,
    protocol::{ErrorResponse, MazeRequest},
};

/// Serves maze requests from stdin until it closes, one JSON object per line
/// in and one per line out.
pub fn run(config: &Config) -> Result<(), ServerError> {
    print_banner(config);

    let stdin = io::stdin();
    let stdout = io::stdout();

    let served = match config.seed {
        Some(seed) => serve(
            stdin.lock(),
            stdout.lock(),
            config,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => serve(stdin.lock(), stdout.lock(), config, &mut rand::rng())?,
    };

    info!(served, "Input closed. Server shutting down.");
    Ok(())
}

fn print_banner(config: &Config) {
    info!("  Game version:  {}", env!("CARGO_PKG_VERSION"));
    info!("  Max attempts:  {}", config.max_attempts);
    match config.seed {
        Some(seed) => info!("  Seed:          {}", seed),
        None => info!("  Seed:          random"),
    }
}

/// Answers every non-blank line of `input` with exactly one line of
/// `output`. A bad request gets an error line and does not stop the loop.
/// Returns how many mazes were served.
pub fn serve<R, I, O>(
    input: I,
    mut output: O,
    config: &Config,
    rng: &mut R,
) -> Result<usize, ServerError>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut served = 0;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match handle_request(&line, config, rng) {
            Ok(maze) => {
                served += 1;
                serde_json::to_string(&maze)?
            }
            Err(err) => {
                warn!("Rejected request {:?}: {}.", line, err);
                let error = ErrorResponse {
                    error: err.to_string(),
                };
                serde_json::to_string(&error)?
            }
        };

        writeln!(output, "{}", response)?;
        output.flush()?;
    }

    Ok(served)
}

pub fn handle_request<R: Rng + ?Sized>(
    line: &str,
    config: &Config,
    rng: &mut R,
) -> Result<Maze, ServerError> {
    let request: MazeRequest = serde_json::from_str(line)?;
    let size = request.size();
    let maze = Maze::generate_with(size, rng, config.max_attempts)?;

    info!(
        size,
        obstacles = maze.obstacles.len(),
        "Served {}x{} maze.",
        size,
        size
    );
    debug!("\n{}", maze.log());

    Ok(maze)
}
