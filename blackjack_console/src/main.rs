use blackjack_console::{ConsoleDecider, GameConfig, Session};
use clap::Parser;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Single deck blackjack at the console for up to seven players")]
struct Args {
    /// Number of players to seat, asked for when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=7))]
    seats: Option<u8>,

    /// Seed for the deck, makes a session reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Wealth every player starts with
    #[arg(long)]
    starting_wealth: Option<u32>,

    /// JSON file with session settings, command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary of the session when it ends
    #[arg(long)]
    summary_json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the prompts, RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let file_config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let config = file_config.override_with(GameConfig {
        seats: args.seats.map(usize::from),
        starting_wealth: args.starting_wealth,
        seed: args.seed,
        shuffle_each_round: None,
    });
    info!(?config, "configuration loaded");

    let session = Session::new(config.into(), config.seats);
    let stdin = io::stdin();
    let mut console = ConsoleDecider::new(stdin.lock(), io::stdout());
    let summary = session.run(&mut console)?;

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
