//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive shell for exploring trip data by city, month and
//! day, a one-shot report command, and a listing of configured datasets.

use anyhow::{Context, Result};
use bikeshare_explorer::{
    config::Catalog,
    filter::{filter, parse_month, parse_weekday},
    loader::load_city,
    output::{write_json, write_raw_rows, write_rule, write_summary},
    pager::{PAGE_SIZE, raw_page},
    reports::summarize,
    shell::{Shell, TerminalInput},
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding the per-city CSV files
    #[arg(long, global = true, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: String,

    /// JSON file mapping city names to CSV file names
    #[arg(long, global = true, env = "BIKESHARE_CITIES")]
    cities: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompts (the default)
    Explore,
    /// Print the statistics for one selection without prompting
    Report {
        /// City to analyze, e.g. "chicago"
        #[arg(short, long)]
        city: String,

        /// Month name, or "All"
        #[arg(short, long, default_value = "All")]
        month: String,

        /// Day of week, or "All"
        #[arg(short, long, default_value = "All")]
        day: String,

        /// Print the statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also print this many pages of raw rows
        #[arg(long, default_value_t = 0)]
        raw: usize,
    },
    /// List configured cities and their data files
    Cities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    let catalog = match &cli.cities {
        Some(path) => Catalog::load(&cli.data_dir, path)?,
        None => Catalog::new(&cli.data_dir),
    };

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let input = TerminalInput::new()?;
            let mut shell = Shell::new(&catalog, input, std::io::stdout());
            shell.run()?;
        }
        Commands::Report {
            city,
            month,
            day,
            json,
            raw,
        } => {
            let mut out = std::io::stdout().lock();
            report(&mut out, &catalog, &city, &month, &day, json, raw)?;
        }
        Commands::Cities => {
            list_cities(&mut std::io::stdout().lock(), &catalog)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// Stderr defaults to `warn` so log lines stay out of the way of the prompts.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            LevelFilter::WARN,
        ));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking_file)
        .with_filter(log_filter(
            std::env::var("RUST_LOG_JSON").ok().as_deref(),
            LevelFilter::DEBUG,
        ));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

/// Filter from `directives`, falling back to `default` when none are given.
fn log_filter(directives: Option<&str>, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// One non-interactive pass: load, filter, summarize, print.
#[tracing::instrument(skip(out, catalog))]
fn report<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    city: &str,
    month: &str,
    day: &str,
    json: bool,
    raw: usize,
) -> Result<()> {
    let city = city.trim().to_lowercase();
    let month = parse_month(month, catalog)?;
    let weekday = parse_weekday(day, catalog)?;

    let dataset =
        load_city(catalog, &city).with_context(|| format!("failed to load data for '{city}'"))?;
    let view = filter(&dataset, month, weekday);
    let summary = summarize(&city, month, weekday, &view);

    if json {
        write_json(out, &summary)?;
    } else {
        write_summary(out, &summary)?;
    }

    for n in 0..raw {
        write_raw_rows(out, &raw_page(&view, n.saturating_mul(PAGE_SIZE)))?;
        write_rule(out)?;
    }

    info!(city = %city, trips = summary.trips, "Report printed");
    Ok(())
}

/// One line per configured city: key, data file, and whether the file exists.
fn list_cities<W: Write>(out: &mut W, catalog: &Catalog) -> Result<()> {
    for (city, _) in catalog.cities() {
        let Some(path) = catalog.city_path(city) else {
            continue;
        };
        let status = if path.exists() { "ok" } else { "missing" };
        writeln!(out, "{city:<16} {:<40} {status}", path.display())?;
    }
    Ok(())
}
