//! CLI entry point for the company sentiment service.
//!
//! Loads the precomputed per-company aspect ratings once and either serves the
//! lookup API or answers a single lookup from the command line.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use company_sentiment::analyzers::overview::overview;
use company_sentiment::api::handlers::lookup_company;
use company_sentiment::error::NOT_FOUND_DETAIL;
use company_sentiment::output::write_json;
use company_sentiment::ratings::RatingsStore;
use company_sentiment::server::serve;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "company_sentiment")]
#[command(about = "Serves per-company sentiment ratings and summaries", long_about = None)]
struct Cli {
    /// CSV file (optionally .gz) with company, aspect and rating_1_to_5 columns
    #[arg(
        long,
        global = true,
        env = "RATINGS_CSV",
        default_value = "company_aspect_ratings_equal_weight.csv"
    )]
    data: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve GET /company/{company_name} over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
        bind: String,
    },
    /// Print the summary for one company as JSON
    Show {
        /// Company name; surrounding whitespace is ignored
        #[arg(value_name = "COMPANY")]
        company: String,
    },
    /// List every company with its overall rating
    ListCompanies,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();
    debug!(data = %cli.data, "Loading ratings dataset");

    // A dataset that cannot be loaded is fatal; nothing is served without it.
    let store = RatingsStore::load(&cli.data)?;

    match cli.command {
        Commands::Serve { bind } => {
            serve(Arc::new(store), &bind).await?;
        }
        Commands::Show { company } => match lookup_company(&store, &company) {
            Ok(response) => write_json(std::io::stdout().lock(), &response)?,
            Err(e) => {
                debug!(error = %e, "Lookup failed");
                bail!(NOT_FOUND_DETAIL);
            }
        },
        Commands::ListCompanies => {
            let rows = overview(&store);

            for row in &rows {
                info!(
                    company = %row.company,
                    aspects = row.aspect_count,
                    overall_rating = ?row.overall_rating,
                    "Company"
                );
            }

            let unrated = rows.iter().filter(|r| r.overall_rating.is_none()).count();

            info!(total = rows.len(), unrated, "Company list summary");
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard flushes the file writer on drop and must be held for the
/// life of the process.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/company_sentiment.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("company_sentiment.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}
