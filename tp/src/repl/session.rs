//! REPL session management

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tripcatalog::{Catalog, QuestionKind};

use crate::api::PlannerApi;
use crate::domain::Sender;
use crate::export;
use crate::replies::ReplyLoader;
use crate::session::PlanSession;

/// Interactive planning session
pub struct ReplSession {
    session: PlanSession,
    printed: usize,
}

impl ReplSession {
    /// Create a new REPL session
    pub fn new(catalog: Catalog, client: Arc<dyn PlannerApi>, replies: ReplyLoader) -> Self {
        Self {
            session: PlanSession::new(catalog, client, replies),
            printed: 0,
        }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();
        self.flush_messages();

        // Create readline editor for proper line editing
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        // Main REPL loop
        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(input);

                    // Handle slash commands
                    if input.starts_with('/') {
                        match self.handle_slash_command(input).await {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        // Anything else goes to the trip concierge
                        self.session.send_chat(input).await;
                        self.flush_messages();
                        self.print_error();
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Print welcome message
    fn print_welcome(&self) {
        println!();
        println!("{}", "Trip Planner".bright_cyan().bold());
        println!("Co-create a three-day itinerary from how you want the trip to feel.");
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    /// Handle slash commands
    async fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/feelings" => {
                self.print_feelings();
                SlashResult::Continue
            }
            "/feel" | "/f" => {
                self.cmd_feel(&parts[1..]);
                SlashResult::Continue
            }
            "/answer" | "/a" => {
                self.cmd_answer(input);
                SlashResult::Continue
            }
            "/skip" => {
                self.cmd_skip();
                SlashResult::Continue
            }
            "/status" | "/s" => {
                self.print_status();
                SlashResult::Continue
            }
            "/generate" | "/g" => {
                self.cmd_generate().await;
                SlashResult::Continue
            }
            "/plan" => {
                self.print_itinerary();
                SlashResult::Continue
            }
            "/move" => {
                self.cmd_move(&parts[1..]);
                SlashResult::Continue
            }
            "/export" => {
                self.cmd_export();
                SlashResult::Continue
            }
            "/reset" => {
                self.session.reset();
                self.printed = 0;
                println!("{}", "Session reset.".dimmed());
                self.flush_messages();
                SlashResult::Continue
            }
            "/history" => {
                self.print_history();
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    /// Toggle a feeling tag on or off
    fn cmd_feel(&mut self, args: &[&str]) {
        let Some(id) = args.first() else {
            println!("Usage: {} <id>", "/feel".yellow());
            self.print_feelings();
            return;
        };

        match self.session.toggle_feeling(id) {
            Some(true) => {
                self.flush_messages();
                self.print_current_question();
            }
            Some(false) => {
                println!("{}", format!("Removed {}.", id).dimmed());
            }
            None => {
                println!("{} Unknown feeling: {}", "?".yellow(), id);
                println!("Type {} to see the options", "/feelings".yellow());
            }
        }
    }

    /// Answer the question the cursor is sitting on
    fn cmd_answer(&mut self, input: &str) {
        let value = input.splitn(2, char::is_whitespace).nth(1).unwrap_or("").trim();
        if value.is_empty() {
            println!("Usage: {} <text>", "/answer".yellow());
            return;
        }
        if self.session.current_question().is_none() {
            println!("{}", "No question is waiting for an answer.".dimmed());
            return;
        }

        self.session.answer_current_question(value);
        self.flush_messages();
        self.print_current_question();
    }

    /// Skip the current question without recording an answer
    fn cmd_skip(&mut self) {
        if self.session.skip_current_question() {
            self.print_current_question();
        } else {
            println!("{}", "No question is waiting for an answer.".dimmed());
        }
    }

    /// Build the itinerary once the intake is complete
    async fn cmd_generate(&mut self) {
        if !self.session.is_ready() {
            if self.session.feelings().is_empty() {
                println!("{}", "Pick at least one feeling first (/feelings).".dimmed());
            } else {
                println!("{}", "There are still open questions. Answer or /skip them first.".dimmed());
            }
            return;
        }

        println!("{}", "Building your itinerary...".dimmed());
        self.session.generate().await;
        self.flush_messages();
        self.print_error();
        self.print_itinerary();
    }

    /// Move an activity up or down within its day
    fn cmd_move(&mut self, args: &[&str]) {
        if self.session.itinerary().is_none() {
            println!("{}", "No itinerary yet. Type /generate once you're ready.".dimmed());
            return;
        }

        let (Some(day), Some(slot), Some(dir)) = (args.first(), args.get(1), args.get(2)) else {
            println!("Usage: {} <day> <slot> up|down", "/move".yellow());
            return;
        };
        let (Ok(day), Ok(slot)) = (day.parse::<usize>(), slot.parse::<usize>()) else {
            println!("Usage: {} <day> <slot> up|down", "/move".yellow());
            return;
        };
        let direction = match *dir {
            "up" => -1,
            "down" => 1,
            _ => {
                println!("Usage: {} <day> <slot> up|down", "/move".yellow());
                return;
            }
        };

        // Days and slots are 1-based on screen
        if day == 0 || slot == 0 {
            println!("{}", "Days and slots are numbered from 1.".dimmed());
            return;
        }
        if self.session.move_activity(day - 1, slot - 1, direction) {
            self.print_itinerary();
        } else {
            println!("{}", "That move would fall off the schedule.".dimmed());
        }
    }

    /// Write the itinerary rows as a CSV file in the current directory
    fn cmd_export(&self) {
        let Some(itinerary) = self.session.itinerary() else {
            println!("{}", "No itinerary yet. Type /generate once you're ready.".dimmed());
            return;
        };

        let rows = export::flatten(&itinerary.days);
        let csv = match export::to_csv(&rows) {
            Ok(csv) => csv,
            Err(err) => {
                println!("{} {}", "Export failed:".red(), err);
                return;
            }
        };

        match std::fs::write(export::EXPORT_CSV_NAME, csv) {
            Ok(()) => {
                println!("Wrote {} rows to {}", rows.len(), export::EXPORT_CSV_NAME.bright_green());
                println!(
                    "{}",
                    format!(
                        "Import into {} (sheet \"{}\") to share it as a workbook.",
                        export::EXPORT_FILE_NAME,
                        export::EXPORT_SHEET_NAME
                    )
                    .dimmed()
                );
            }
            Err(err) => {
                println!("{} {}", "Export failed:".red(), err);
            }
        }
    }

    /// Print help message
    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:26} Show this help", "/help".yellow());
        println!("  {:26} List feeling options", "/feelings".yellow());
        println!("  {:26} Toggle a feeling tag", "/feel <id>".yellow());
        println!("  {:26} Answer the current question", "/answer <text>".yellow());
        println!("  {:26} Skip the current question", "/skip".yellow());
        println!("  {:26} Show session progress", "/status".yellow());
        println!("  {:26} Build the itinerary", "/generate".yellow());
        println!("  {:26} Show the current itinerary", "/plan".yellow());
        println!("  {:26} Reorder an activity", "/move <day> <slot> up|down".yellow());
        println!("  {:26} Save the itinerary as CSV", "/export".yellow());
        println!("  {:26} Show the conversation", "/history".yellow());
        println!("  {:26} Start over", "/reset".yellow());
        println!("  {:26} Exit the REPL", "/quit".yellow());
        println!();
        println!("Anything else is sent to the trip concierge.");
        println!();
    }

    /// List the feeling options with selection markers
    fn print_feelings(&self) {
        println!();
        println!("{}", "How should this trip feel?".bright_cyan());
        for feeling in &self.session.catalog().feelings {
            let marker = if self.session.feelings().contains(&feeling.id) {
                "x".bright_green()
            } else {
                " ".normal()
            };
            println!("  [{}] {:10} {}", marker, feeling.id.yellow(), feeling.description);
        }
        println!();
        println!("Toggle one with {}", "/feel <id>".yellow());
    }

    /// Show the question currently waiting for an answer
    fn print_current_question(&self) {
        match self.session.current_question() {
            Some(question) => {
                println!();
                println!("{} {}", question.icon, question.question.bright_cyan());
                if let Some(helper) = &question.helper {
                    println!("  {}", helper.dimmed());
                }
                if question.kind == QuestionKind::Choice {
                    for option in &question.options {
                        println!("  {} {}", "-".dimmed(), option);
                    }
                } else if let Some(placeholder) = &question.placeholder {
                    println!("  {}", placeholder.dimmed());
                }
                println!("Answer with {} or {}", "/answer <text>".yellow(), "/skip".yellow());
            }
            None => {
                if self.session.is_ready() {
                    println!("{}", "All set. Type /generate to build the itinerary.".dimmed());
                } else if self.session.feelings().is_empty() {
                    println!("{}", "Pick at least one feeling first (/feelings).".dimmed());
                }
            }
        }
    }

    /// Print session progress
    fn print_status(&self) {
        println!();
        println!("{}", "Session Status:".bright_cyan());
        for step in self.session.steps() {
            let marker = if step.complete {
                "x".bright_green()
            } else {
                " ".normal()
            };
            println!("  [{}] {}", marker, step.label);
        }

        let chips = self.session.chips();
        if !chips.is_empty() {
            println!("  {}", chips.join("  |  ").dimmed());
        }

        let answered = self.session.answers().len();
        let active = self.session.active_questions().len();
        println!("  Questions: {} answered, {} active", answered, active);

        if let Some(itinerary) = self.session.itinerary() {
            let stage = if itinerary.is_enriched() { "enriched" } else { "draft" };
            println!("  Itinerary: {} ({})", itinerary.destination, stage);
        }
        if let Some(warning) = &self.session.enrichment().warning {
            println!("  {} {}", "Warning:".yellow(), warning);
        }
        if let Some(err) = self.session.last_error() {
            println!("  {} {}", "Error:".red(), err);
        }
        println!();
    }

    /// Print the current itinerary
    fn print_itinerary(&self) {
        let Some(itinerary) = self.session.itinerary() else {
            println!("{}", "No itinerary yet. Type /generate once you're ready.".dimmed());
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
            for (i, activity) in day.activities.iter().enumerate() {
                println!(
                    "  {}. {:9} {}",
                    i + 1,
                    activity.time_block.label().yellow(),
                    activity.title.bold()
                );
                println!("     {}", activity.detail);
                println!("     {}", activity.notes.dimmed());
                println!("     {}", activity.map_link.dimmed());
            }
        }

        let enrichment = self.session.enrichment();
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
        }

        println!();
        println!(
            "Reorder with {} or save with {}",
            "/move <day> <slot> up|down".yellow(),
            "/export".yellow()
        );
    }

    /// Print the conversation so far
    fn print_history(&self) {
        let messages = self.session.messages();
        if messages.is_empty() {
            println!("{}", "No conversation history.".dimmed());
            return;
        }

        println!();
        println!("{}", "Conversation History:".bright_cyan());
        for (i, msg) in messages.iter().enumerate() {
            let role = match msg.sender {
                Sender::User => "You".bright_green(),
                Sender::Assistant => "Planner".bright_blue(),
            };
            let preview: String = msg.text.chars().take(80).collect();
            let text = if msg.text.len() > 80 { format!("{}...", preview) } else { preview };
            println!("  {}. {}: {}", i + 1, role, text);
        }
        println!();
    }

    /// Print assistant messages added since the last flush
    ///
    /// User messages are skipped; the user just typed them at the prompt.
    fn flush_messages(&mut self) {
        let messages = self.session.messages();
        for msg in &messages[self.printed..] {
            if msg.sender == Sender::Assistant {
                println!("{} {}", "*".bright_blue(), msg.text);
            }
        }
        self.printed = messages.len();
    }

    /// Print the last request error, if any
    fn print_error(&self) {
        if let Some(err) = self.session.last_error() {
            println!("{} {}", "!".red(), err.red());
        }
    }
}

/// Result of handling a slash command
enum SlashResult {
    Continue,
    Quit,
}
