use clap::Parser;
use fragsearch::config::{parse_limit, parse_threshold, DEFAULT_LIMIT, DEFAULT_THRESHOLD};
use fragsearch::store::DEFAULT_DB_FILE;
use fragsearch::{FragSearchError, JsonFileStore, SearchEngine, SearchOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: fragsearch <query> [-f db.json] [--threshold 0.5] [--limit 10]";

#[derive(Parser)]
#[command(name = "fragsearch")]
#[command(about = "Search fragments by key, text and tags", long_about = None)]
struct Cli {
    /// Search query
    query: Option<String>,

    /// Record store (JSON array); created with sample data if missing
    #[arg(short = 'f', long = "file", env = "FRAGSEARCH_DB", default_value = DEFAULT_DB_FILE)]
    file: PathBuf,

    /// Minimum score, clamped to [0, 1]
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = threshold_arg,
        default_value_t = DEFAULT_THRESHOLD
    )]
    threshold: f64,

    /// Maximum results, at least 1
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = limit_arg,
        default_value_t = DEFAULT_LIMIT
    )]
    limit: usize,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,
}

fn threshold_arg(value: &str) -> Result<f64, String> {
    Ok(parse_threshold(value))
}

fn limit_arg(value: &str) -> Result<usize, String> {
    Ok(parse_limit(value))
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fragsearch=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

fn run(cli: Cli) -> fragsearch::Result<()> {
    let query = cli.query.ok_or(FragSearchError::QueryMissing)?;
    let options = SearchOptions::new(cli.threshold, cli.limit);

    let store = JsonFileStore::new(cli.file);
    let engine = SearchEngine::open(&store)?;

    let response = engine.search(&query, &options);

    if cli.json {
        println!("{}", response.render_json()?);
    } else {
        print!("{}", response.render_text());
    }

    Ok(())
}

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ FragSearchError::QueryMissing) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
