//! Trip Planner - Feelings-First Itinerary Builder
//!
//! CLI entry point for batch planning, CSV export, and the interactive
//! REPL.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripcatalog::Catalog;
use tripplanner::api::{PlannerApi, create_client};
use tripplanner::cli::{Cli, Command, OutputFormat, generate_after_help};
use tripplanner::config::{CatalogSource, Config};
use tripplanner::export::{self, SpreadsheetExport};
use tripplanner::repl;
use tripplanner::replies::ReplyLoader;
use tripplanner::session::PlanSession;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    let log_file = fs::File::create(log_dir.join("tripplanner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Build command with dynamic after_help that shows the log location
    let cmd = Cli::command().after_help(generate_after_help());

    // Parse CLI arguments using the modified command
    let cli = Cli::from_arg_matches(&cmd.get_matches())?;

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Trip planner loaded config: base_url={}", config.api.base_url);

    let client = create_client(&config.api).context("Failed to create backend client")?;

    // Dispatch command
    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Plan {
            feel,
            answer,
            offline,
            format,
        }) => {
            debug!(?feel, ?answer, offline, ?format, "main: matched Plan command");
            let catalog = load_catalog(&config, &client).await?;
            cmd_plan(catalog, client, &feel, &answer, offline, format).await
        }
        Some(Command::Export { feel, answer }) => {
            debug!(?feel, ?answer, "main: matched Export command");
            let catalog = load_catalog(&config, &client).await?;
            cmd_export(catalog, client, &feel, &answer)
        }
        Some(Command::Health) => {
            debug!("main: matched Health command");
            cmd_health(&config, client.as_ref()).await
        }
        None => {
            debug!("main: no command specified, launching REPL");
            let catalog = load_catalog(&config, &client).await?;
            repl::run_interactive(catalog, client).await
        }
    }
}

/// Resolve the catalog from the configured source
async fn load_catalog(config: &Config, client: &Arc<dyn PlannerApi>) -> Result<Catalog> {
    debug!(source = ?config.catalog.source, "load_catalog: called");
    match config.catalog.source {
        CatalogSource::Embedded => {
            debug!("load_catalog: using embedded tables");
            Catalog::embedded().context("Failed to load embedded catalog")
        }
        CatalogSource::Remote => {
            debug!("load_catalog: fetching tables from backend");
            client
                .fetch_catalog()
                .await
                .context("Failed to fetch catalog from backend")
        }
    }
}

/// Drive a session from flags: tag feelings, record answers, skip the rest
fn batch_session(catalog: Catalog, client: Arc<dyn PlannerApi>, feel: &[String], answers: &[String]) -> Result<PlanSession> {
    debug!(feelings = feel.len(), answers = answers.len(), "batch_session: called");
    let mut session = PlanSession::new(catalog, client, ReplyLoader::embedded_only());

    for id in feel {
        if session.toggle_feeling(id).is_none() {
            debug!(%id, "batch_session: unknown feeling");
            eprintln!("Warning: unknown feeling '{}'", id);
        }
    }
    if session.feelings().is_empty() {
        return Err(eyre::eyre!("At least one valid --feel is required"));
    }

    for pair in answers {
        match pair.split_once('=') {
            Some((key, value)) => {
                if !session.record_answer(key.trim(), value.trim()) {
                    debug!(%pair, "batch_session: rejected answer");
                    eprintln!("Warning: ignoring answer '{}': unknown question or empty value", pair);
                }
            }
            None => {
                debug!(%pair, "batch_session: malformed answer");
                eprintln!("Warning: ignoring answer '{}': expected KEY=VALUE", pair);
            }
        }
    }

    // Whatever was not answered from flags is skipped
    while session.skip_current_question() {}

    Ok(session)
}

/// Generate a plan in one shot and print it
async fn cmd_plan(
    catalog: Catalog,
    client: Arc<dyn PlannerApi>,
    feel: &[String],
    answers: &[String],
    offline: bool,
    format: OutputFormat,
) -> Result<()> {
    debug!(offline, ?format, "cmd_plan: called");
    let mut session = batch_session(catalog, client, feel, answers)?;

    if offline {
        debug!("cmd_plan: offline, building draft only");
        session.generate_draft();
    } else {
        session.generate().await;
    }

    match format {
        OutputFormat::Json => {
            debug!("cmd_plan: format is Json");
            let envelope = serde_json::json!({
                "itinerary": session.itinerary(),
                "enrichment": session.enrichment(),
                "export": session.itinerary().map(|plan| SpreadsheetExport::new(&plan.days)),
                "error": session.last_error(),
            });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Text => {
            debug!("cmd_plan: format is Text");
            if let Some(err) = session.last_error() {
                eprintln!("Warning: {}", err);
            }
            print_itinerary_text(&session);
        }
    }

    Ok(())
}

/// Generate a draft plan and print it as spreadsheet CSV rows
fn cmd_export(catalog: Catalog, client: Arc<dyn PlannerApi>, feel: &[String], answers: &[String]) -> Result<()> {
    debug!("cmd_export: called");
    let mut session = batch_session(catalog, client, feel, answers)?;

    // Rows come from the local schedule; no backend call needed
    session.generate_draft();
    let Some(itinerary) = session.itinerary() else {
        return Err(eyre::eyre!("No itinerary was generated"));
    };

    let rows = export::flatten(&itinerary.days);
    print!("{}", export::to_csv(&rows)?);
    Ok(())
}

/// Probe the backend liveness endpoint
async fn cmd_health(config: &Config, client: &dyn PlannerApi) -> Result<()> {
    debug!("cmd_health: called");
    match client.health().await {
        Ok(()) => {
            debug!("cmd_health: backend is healthy");
            println!("Backend is healthy ({})", config.api.base_url);
        }
        Err(err) => {
            debug!("cmd_health: backend is unreachable: {err}");
            println!("Backend is unreachable ({}): {}", config.api.base_url, err);
        }
    }
    Ok(())
}

/// Print the generated itinerary as colored text
fn print_itinerary_text(session: &PlanSession) {
    let Some(itinerary) = session.itinerary() else {
        println!("No itinerary was generated.");
        return;
    };

    println!();
    println!("{}", itinerary.destination.bright_cyan().bold());
    println!("{}", itinerary.overview);
    if !itinerary.highlight.is_empty() {
        println!("{} {}", "Highlight:".bright_yellow(), itinerary.highlight);
    }
    if !itinerary.chips.is_empty() {
        println!("{}", itinerary.chips.join("  |  ").dimmed());
    }

    for day in &itinerary.days {
        println!();
        println!("{} {}", day.label.bright_green().bold(), day.focus);
        for activity in &day.activities {
            println!("  {:9} {}", activity.time_block.label().yellow(), activity.title.bold());
            println!("            {}", activity.detail);
            println!("            {}", activity.notes.dimmed());
            println!("            {}", activity.map_link.dimmed());
        }
    }

    let enrichment = session.enrichment();
    if itinerary.is_enriched() {
        if !enrichment.weather_forecast.is_empty() {
            println!();
            println!("{} {}", "Weather:".bright_cyan(), enrichment.weather_forecast);
        }
        if !enrichment.packing_list.is_empty() {
            println!("{} {}", "Packing:".bright_cyan(), enrichment.packing_list);
        }
        if !enrichment.food_culture_info.is_empty() {
            println!("{} {}", "Food + culture:".bright_cyan(), enrichment.food_culture_info);
        }
        if !enrichment.useful_links.is_empty() {
            println!("{}", "Useful links:".bright_cyan());
            for link in &enrichment.useful_links {
                println!("  {} {}", link.title, link.url.dimmed());
            }
        }
        if let Some(warning) = &enrichment.warning {
            println!("{} {}", "Warning:".yellow(), warning);
        }
    }
    println!();
}
