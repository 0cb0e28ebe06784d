use std::{
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use word_search_generator::{logging, words, DiagonalBounds, Puzzle, PuzzleConfig, Session};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list file, one word per line. Starts an interactive session when omitted
    words: Option<PathBuf>,

    /// Seed for the random number generator, to regenerate a puzzle
    #[clap(long)]
    seed: Option<u64>,

    /// Write the puzzle to this file
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Write the solution to this file
    #[clap(long)]
    solution_output: Option<PathBuf>,

    /// Also print the solution
    #[clap(short, long)]
    show_solution: bool,

    /// Use the legacy diagonal bounds, which never place a diagonal word in the
    /// bottom-right-most position
    #[clap(long)]
    legacy_diagonal: bool,

    /// Fail if any word could not be placed
    #[clap(long)]
    strict: bool,

    /// Start an interactive session even when a word list is given
    #[clap(short, long)]
    interactive: bool,

    /// Log placement details
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let diagonal_bounds = if args.legacy_diagonal {
        DiagonalBounds::Legacy
    } else {
        DiagonalBounds::Corrected
    };

    match &args.words {
        Some(path) if !args.interactive => generate_once(&args, path, diagonal_bounds, rng),
        _ => {
            let stdin = io::stdin();
            let stdout = BufWriter::new(io::stdout());

            Session::new(stdin.lock(), stdout, rng)
                .with_diagonal_bounds(diagonal_bounds)
                .run()
                .context("interactive session failed")
        }
    }
}

fn generate_once(
    args: &Args,
    path: &Path,
    diagonal_bounds: DiagonalBounds,
    mut rng: StdRng,
) -> Result<()> {
    let raw = words::read_word_list(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let config = PuzzleConfig {
        words: &raw,
        diagonal_bounds,
    };
    let mut puzzle = Puzzle::generate(&config, &mut rng);

    if args.strict {
        puzzle = puzzle.into_complete()?;
    } else if !puzzle.is_complete() {
        eprintln!("Could not fit these words: {}", puzzle.unplaced().join(", "));
    }

    println!("{}", puzzle.display());

    if args.show_solution {
        println!("{}", puzzle.solution());
    }

    if let Some(output) = &args.output {
        puzzle
            .display()
            .write_to_file(output)
            .with_context(|| format!("failed to write puzzle to {}", output.display()))?;
    }

    if let Some(output) = &args.solution_output {
        puzzle
            .solution()
            .write_to_file(output)
            .with_context(|| format!("failed to write solution to {}", output.display()))?;
    }

    Ok(())
}
