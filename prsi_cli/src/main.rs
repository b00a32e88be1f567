use std::path::PathBuf;

use clap::Parser;
use prsi::Game;
use prsi_ai::Difficulty;
use prsi_cli::{select_difficulty, Config, Recorder, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// "easy" or "hard". Asked for interactively if not given
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// RNG seed for shuffling the pack
    #[arg(long)]
    seed: Option<u64>,

    /// Record the game's turns as a JSON file at this path
    #[arg(short, long)]
    record_to: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let recorder = if let Some(path) = args.record_to {
        Some(Recorder::new(path, seed)?)
    } else {
        None
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => select_difficulty(&mut input, &mut output)?,
    };
    info!(?difficulty);

    let config = Config {
        difficulty,
        recorder,
    };
    let mut session = Session::new(Game::shuffled(&mut rng), config, input, output);
    session.run()?;
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
