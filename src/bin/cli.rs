//! Bikeboard CLI
//!
//! Command-line interface for the trip statistics views:
//! - Render the duration or hour-of-day view in the terminal
//! - Export view rows as JSON or CSV
//! - Generate a default config file

use anyhow::Context;
use bikeboard::api::{load_view, Fetch, StatsClient};
use bikeboard::config::{generate_default_config, Config};
use bikeboard::logging::init_logging;
use bikeboard::render::render_view_text;
use bikeboard::view::{ChartView, ChartViewModel, HourRange, TripDuration, ViewState};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::sync::Mutex;

#[derive(Parser)]
#[command(name = "bikeboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Trip statistics in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Stats API base URL (overrides config and BIKEBOARD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trip counts by duration hour
    Duration,

    /// Trip counts by hour of day
    HourRange,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();

        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let mut config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    config.logging.level = if cli.verbose { "debug" } else { "warn" }.to_string();
    init_logging(&config.logging);

    let client = StatsClient::from_config(&config.api).context("Invalid stats API URL")?;

    let loaded = match cli.command {
        Commands::Duration => show::<TripDuration>(&client, cli.format).await?,
        Commands::HourRange => show::<HourRange>(&client, cli.format).await?,
        Commands::Config { .. } => true,
    };

    if !loaded {
        std::process::exit(1);
    }
    Ok(())
}

/// Load one view and print it. Returns `false` if the view failed.
async fn show<V: Fetch>(client: &StatsClient, format: OutputFormat) -> anyhow::Result<bool> {
    eprintln!("{}", V::LOADING_MESSAGE);

    let model = Mutex::new(ChartViewModel::<V>::new());
    load_view(&model, client).await;
    let model = model.into_inner();

    let rows = match model.state() {
        ViewState::Loaded(rows) => rows,
        ViewState::Failed(message) => {
            eprintln!("Error: {}", message);
            return Ok(false);
        }
        ViewState::Loading => {
            eprintln!("Error: {}", V::ERROR_MESSAGE);
            return Ok(false);
        }
    };

    match format {
        OutputFormat::Table => println!("{}", render_view_text::<V>(model.state()).trim_end()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => print_csv::<V>(rows)?,
    }

    Ok(true)
}

fn print_csv<V: ChartView>(rows: &[V::Row]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
