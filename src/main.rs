//! Global Pulse command line.
//!
//! With country arguments, runs one search per country and exits. Without,
//! reads countries from stdin, one per line, until EOF.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use global_pulse::adapters::{GeminiProvider, MockAIProvider, NewsDesk};
use global_pulse::application::FetchStoryHandler;
use global_pulse::config::AppConfig;

#[derive(Parser)]
#[command(name = "global-pulse")]
#[command(about = "Global Pulse - the AI-curated top story for any country", long_about = None)]
struct Cli {
    /// Countries to search; omit to read them from stdin
    countries: Vec<String>,

    /// Use the offline mock backend instead of Gemini
    #[arg(long)]
    mock: bool,

    /// Disable colours and screen clearing
    #[arg(long)]
    no_color: bool,

    /// Print each finished story as JSON instead of the page
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if cli.no_color || cli.json {
        config.display.color = false;
    }

    // Logs go to stderr so the page on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.display.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let handler = if cli.mock {
        config.validate_offline()?;
        tracing::warn!("Using the offline mock backend");
        let provider = Arc::new(MockAIProvider::new());
        FetchStoryHandler::new(provider.clone(), provider)
    } else {
        config.validate()?;
        let provider = Arc::new(GeminiProvider::new(config.ai.gemini_config()?)?);
        FetchStoryHandler::new(provider.clone(), provider)
    };

    let mut desk = NewsDesk::new(handler, config.display.clone());

    if cli.countries.is_empty() {
        run_interactive(&mut desk, cli.json).await
    } else {
        for country in &cli.countries {
            search(&mut desk, country, cli.json).await?;
        }
        Ok(())
    }
}

async fn run_interactive(desk: &mut NewsDesk, json: bool) -> Result<()> {
    let mut stdout = io::stdout();
    if !json {
        write!(stdout, "{}", desk.render())?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "\n› ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        search(desk, &line, json).await?;
    }
    writeln!(stdout)?;
    Ok(())
}

async fn search(desk: &mut NewsDesk, country: &str, json: bool) -> Result<()> {
    if json {
        if !desk.submit(country, &mut io::sink()).await? {
            return Ok(());
        }
        let mut stdout = io::stdout();
        if let Some(result) = desk.state().result() {
            writeln!(stdout, "{}", serde_json::to_string_pretty(result)?)?;
        } else if let Some(error) = desk.state().error() {
            tracing::error!(country, error, "Search failed");
        }
    } else {
        desk.submit(country, &mut io::stdout()).await?;
    }
    Ok(())
}
