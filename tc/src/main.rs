use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use tripcatalog::Catalog;
use tripcatalog::cli::{Cli, Command, OutputFormat};
use tripcatalog::config::Config;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("tripcatalog starting");

    let catalog = match &config.data_dir {
        Some(dir) => Catalog::from_dir(dir).context("Failed to load catalog tables")?,
        None => Catalog::embedded().context("Failed to load embedded catalog")?,
    };

    match cli.command {
        Command::Feelings => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&catalog.feelings)?);
            } else {
                for feeling in &catalog.feelings {
                    println!(
                        "{}  {} {}",
                        feeling.id.cyan(),
                        feeling.label.bold(),
                        feeling.description.dimmed()
                    );
                }
            }
        }
        Command::Questions => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&catalog.questions)?);
            } else {
                for question in &catalog.questions {
                    let gate = match &question.depends_on {
                        Some(rule) => format!(" (needs {}: {})", rule.field, rule.value),
                        None => String::new(),
                    };
                    println!(
                        "{} {} {} [{}]{}",
                        question.icon,
                        question.id.cyan(),
                        question.question,
                        question.kind,
                        gate.dimmed()
                    );
                }
            }
        }
        Command::Blueprints => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&catalog.blueprints)?);
            } else {
                for blueprint in &catalog.blueprints {
                    println!(
                        "{}  {} [{}/{}] {}",
                        blueprint.id.cyan(),
                        blueprint.destination.bold(),
                        blueprint.climate,
                        blueprint.budget,
                        blueprint.feelings.join(", ").dimmed()
                    );
                }
            }
        }
        Command::Activities { feeling } => match feeling {
            Some(id) => {
                let pool = catalog.activities_for(&id);
                if pool.is_empty() {
                    println!("No activities for feeling: {}", id.yellow());
                } else if cli.format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(pool)?);
                } else {
                    for activity in pool {
                        println!("{}  {}", activity.title.bold(), activity.detail.dimmed());
                    }
                }
            }
            None => {
                if cli.format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&catalog.activities)?);
                } else {
                    // Walk feelings in table order so output is stable
                    for feeling in &catalog.feelings {
                        println!("{}", feeling.id.cyan());
                        for activity in catalog.activities_for(&feeling.id) {
                            println!("  {}  {}", activity.title.bold(), activity.detail.dimmed());
                        }
                    }
                }
            }
        },
        Command::Validate => {
            catalog.validate().context("Catalog validation failed")?;
            println!(
                "{} Catalog valid: {} feelings, {} questions, {} blueprints, {} pools",
                "✓".green(),
                catalog.feelings.len(),
                catalog.questions.len(),
                catalog.blueprints.len(),
                catalog.activities.len()
            );
        }
        Command::Dump => {
            let dump = serde_json::json!({
                "feelingOptions": catalog.feelings,
                "questionBank": catalog.questions,
                "destinationBlueprints": catalog.blueprints,
                "coreActivities": catalog.activities,
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    Ok(())
}
