use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tile_jump::{render, search_board, Board, SearchPolicy};

#[derive(Parser, Debug)]
#[command(name = "tile-jump", version, about = "Solve the seven-cell tile-jump puzzle with A*")]
struct Args {
    /// Initial board, seven cells of W, B and _ (or 1, 2, 0)
    #[arg(value_name = "BOARD", default_value = "BBB_WWW")]
    board: String,

    /// Search a random arrangement instead of BOARD
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle
    #[arg(long, value_name = "N", requires = "shuffle")]
    seed: Option<u64>,

    /// Stop after this many expansions
    #[arg(long = "max-expansions", value_name = "N")]
    max_expansions: Option<u64>,

    /// Print the trace without terminal colors
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();

    let board = if args.shuffle {
        match args.seed {
            Some(seed) => Board::shuffled(&mut StdRng::seed_from_u64(seed)),
            None => Board::shuffled(&mut thread_rng()),
        }
    } else {
        args.board
            .parse::<Board>()
            .with_context(|| format!("invalid board {:?}", args.board))?
    };

    let mut policy = SearchPolicy::default();
    if let Some(max) = args.max_expansions {
        policy = policy.with_max_expansions(max);
    }

    info!(%board, shuffled = args.shuffle, "searching");
    let result = search_board(&board, &policy);

    let mut out = io::stdout().lock();
    render::write_result(&mut out, &result, !args.no_color).context("failed to write trace")?;
    Ok(())
}
