//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Tripplanner - feeling-driven itinerary co-creation
#[derive(Parser)]
#[command(
    name = "tripplanner",
    about = "Co-create a travel itinerary from feelings, answers, and a chat collaborator",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; no subcommand starts the interactive session
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a plan in one shot from flags
    Plan {
        /// Feeling ids to tag, in priority order (repeatable)
        #[arg(short, long = "feel", value_name = "ID")]
        feel: Vec<String>,

        /// Question answers as key=value (repeatable)
        #[arg(short, long = "answer", value_name = "KEY=VALUE")]
        answer: Vec<String>,

        /// Skip backend enrichment and keep the local draft
        #[arg(long)]
        offline: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the plan as spreadsheet CSV rows
    Export {
        /// Feeling ids to tag, in priority order (repeatable)
        #[arg(short, long = "feel", value_name = "ID")]
        feel: Vec<String>,

        /// Question answers as key=value (repeatable)
        #[arg(short, long = "answer", value_name = "KEY=VALUE")]
        answer: Vec<String>,
    },

    /// Probe the backend liveness endpoint
    Health,
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs")
        .join("tripplanner.log")
}

/// Generate the after_help text with the log location
pub fn generate_after_help() -> String {
    format!("Logs are written to: {}\n", get_log_path().display())
}

/// Output format for the plan command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["tripplanner"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_plan_with_flags() {
        let cli = Cli::parse_from([
            "tripplanner",
            "plan",
            "-f",
            "adventure",
            "-f",
            "budget",
            "-a",
            "climate=Cooler",
            "-a",
            "budget=Budget-friendly",
        ]);
        if let Some(Command::Plan {
            feel,
            answer,
            offline,
            format,
        }) = cli.command
        {
            assert_eq!(feel, vec!["adventure", "budget"]);
            assert_eq!(answer, vec!["climate=Cooler", "budget=Budget-friendly"]);
            assert!(!offline);
            assert_eq!(format, OutputFormat::Text);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_parse_plan_json_offline() {
        let cli = Cli::parse_from(["tripplanner", "plan", "-f", "relax", "--offline", "-o", "json"]);
        if let Some(Command::Plan {
            offline, format, ..
        }) = cli.command
        {
            assert!(offline);
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["tripplanner", "export", "-f", "food"]);
        assert!(matches!(cli.command, Some(Command::Export { .. })));
    }

    #[test]
    fn test_cli_parse_health() {
        let cli = Cli::parse_from(["tripplanner", "health"]);
        assert!(matches!(cli.command, Some(Command::Health)));
    }

    #[test]
    fn test_cli_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "tripplanner",
            "-c",
            "/path/to/config.yml",
            "-l",
            "debug",
            "health",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
