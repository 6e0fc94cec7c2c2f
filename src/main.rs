//! Reversi AI Engine CLI
//!
//! Reads a board snapshot (8 rows of `B`, `W` and `.`) and prints the move
//! the engine would play as `row col`, or `pass`.
//!
//! ```text
//! $ reversi --color black --depth 4 < board.txt
//! 2 4
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use reversi::{AIEngine, Board, EngineConfig, Evaluator, Stone, Strategy};

const DEFAULT_CONFIG_FILE: &str = "reversi.toml";

/// Pick a Reversi move for a board snapshot.
#[derive(Debug, Parser)]
#[command(name = "reversi", version, about)]
struct Args {
    /// Side to move: black or white
    #[arg(long, value_parser = parse_color)]
    color: Stone,

    /// Board snapshot file; `-` or omitted reads stdin
    #[arg(long)]
    board: Option<PathBuf>,

    /// TOML config file; flags below override it. Without it,
    /// `reversi.toml` in the working directory is used if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Leaf evaluator: material or positional
    #[arg(long)]
    evaluator: Option<Evaluator>,

    /// Search candidates in generation order instead of by capture count
    #[arg(long)]
    no_ordering: bool,

    /// Play the biggest immediate capture instead of searching
    #[arg(long)]
    greedy: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_color(s: &str) -> Result<Stone, String> {
    match s.to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Stone::Black),
        "white" | "w" => Ok(Stone::White),
        other => Err(format!("unknown color '{other}' (expected black or white)")),
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("loading config {DEFAULT_CONFIG_FILE}"))?,
    };

    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(evaluator) = args.evaluator {
        config.evaluator = evaluator;
    }
    if args.no_ordering {
        config.move_ordering = false;
    }
    if args.greedy {
        config.strategy = Strategy::Greedy;
    }
    Ok(config)
}

fn read_board(path: Option<&PathBuf>) -> Result<Board> {
    let text = match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("reading board {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading board from stdin")?;
            buf
        }
    };
    text.parse::<Board>().context("parsing board snapshot")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;
    info!(?config, "configuration loaded");

    let board = read_board(args.board.as_ref())?;
    let mut engine = AIEngine::with_config(config)?;
    let result = engine.get_move_with_stats(&board, args.color)?;

    info!(
        search_type = ?result.search_type,
        score = result.score,
        nodes = result.nodes,
        time_ms = result.time_ms,
        "search complete"
    );

    match result.best_move {
        Some(pos) => println!("{} {}", pos.row, pos.col),
        None => println!("pass"),
    }
    Ok(())
}
