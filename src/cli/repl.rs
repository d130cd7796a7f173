// Interactive chat REPL

use anyhow::Result;
use crossterm::{
    cursor,
    style::Stylize,
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tokio::time::sleep;

use crate::chat::{NoticeKind, Orchestrator, Reply, Session};
use crate::format::{strip_styles, Reveal, CARET};

use super::commands::{handle_command, Command};

/// Delay between revealed tokens.
const TOKEN_DELAY_MS: u64 = 30;
/// Pause behind the "Analyzing your query..." notice.
const ANALYZE_DELAY_MS: u64 = 300;

/// Get current terminal width, or default to 80 if not a TTY
fn terminal_width() -> usize {
    terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

pub struct Repl {
    session: Session,
    orchestrator: Orchestrator,
    // UI state
    is_interactive: bool,
}

impl Repl {
    pub fn new(session: Session, orchestrator: Orchestrator, plain: bool) -> Self {
        // Styling and pacing need a TTY and can be switched off explicitly
        let is_interactive = !plain && io::stdout().is_terminal();

        Self {
            session,
            orchestrator,
            is_interactive,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            if self.is_interactive {
                println!();
                self.print_separator();
                print!("> ");
            } else {
                print!("Query: ");
            }
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if self.is_interactive {
                self.print_separator();
                println!();
            }

            if let Some(command) = Command::parse(input) {
                match command {
                    Command::Quit => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        match handle_command(command, &mut self.session) {
                            Ok(output) => println!("{}", output),
                            Err(e) => eprintln!("Error: {}", e),
                        }
                        continue;
                    }
                }
            }

            self.process_query(input).await?;
        }

        Ok(())
    }

    async fn process_query(&mut self, input: &str) -> Result<()> {
        if self.is_interactive {
            print!("{}", "Analyzing your query...".dark_grey());
            io::stdout().flush()?;
            sleep(Duration::from_millis(ANALYZE_DELAY_MS)).await;
            io::stdout()
                .execute(cursor::MoveToColumn(0))?
                .execute(Clear(ClearType::CurrentLine))?;
        }

        match self.orchestrator.submit(&mut self.session, input).await {
            Reply::Answer { processed, full } => {
                if self.is_interactive {
                    self.reveal(&processed, &full).await?;
                } else {
                    println!("{}", strip_styles(&full));
                }
            }
            Reply::Notice { kind, text } => self.print_notice(kind, &text),
        }

        if self.is_interactive {
            println!();
            self.print_status_line();
        }

        Ok(())
    }

    /// Token-by-token reveal with the caret placeholder, then one final
    /// redraw with the status words recolored.
    async fn reveal(&self, processed: &str, full: &str) -> Result<()> {
        let mut stdout = io::stdout();
        let mut shown = 0usize;
        let mut body = String::new();
        let mut caret_shown = false;

        for frame in Reveal::new(processed) {
            let done = !frame.ends_with(CARET);
            body = frame.strip_suffix(CARET).unwrap_or(&frame).to_string();

            if caret_shown {
                stdout
                    .execute(cursor::MoveLeft(1))?
                    .execute(Clear(ClearType::UntilNewLine))?;
            }

            write!(stdout, "{}", &body[shown..])?;
            shown = body.len();

            if done {
                caret_shown = false;
            } else {
                write!(stdout, "{}", CARET)?;
                caret_shown = true;
            }
            stdout.flush()?;

            if !done {
                sleep(Duration::from_millis(TOKEN_DELAY_MS)).await;
            }
        }

        if full == body {
            println!();
            return Ok(());
        }

        // Swap the revealed block for the highlighted rendition.
        let lines = body.lines().count().max(1);
        stdout.execute(cursor::MoveToColumn(0))?;
        if lines > 1 {
            stdout.execute(cursor::MoveUp((lines - 1) as u16))?;
        }
        stdout.execute(Clear(ClearType::FromCursorDown))?;
        println!("{}", full);

        Ok(())
    }

    fn print_notice(&self, kind: NoticeKind, text: &str) {
        if !self.is_interactive {
            println!("{}", strip_styles(text));
            return;
        }

        match kind {
            NoticeKind::MissingCredential => println!("{}", text.dark_yellow()),
            _ => println!("{}", text.red()),
        }
    }

    fn print_banner(&self) {
        if !self.is_interactive {
            eprintln!("# billy - non-interactive mode");
            return;
        }

        println!("📅 Smart Bill Reminder Assistant");
        println!("Never miss a payment with AI-powered bill tracking and reminders");
        println!();
        println!("  🔔 Reminders - payment due alerts");
        println!("  📊 Analysis  - spending patterns");
        println!("  💳 Tracking  - multiple payment methods");
        println!("  📈 Tips      - financial optimization");
        println!();

        if !self.session.settings.has_api_key() {
            println!(
                "{}",
                "No API key configured. Set OPENROUTER_API_KEY or use /key <KEY>.".dark_yellow()
            );
        }

        println!("Ready. Type /help for commands.");
        println!();

        if let Some(greeting) = self.session.transcript.turns().first() {
            println!("{}", greeting.content);
        }
        self.print_status_line();
    }

    /// Print separator line that adapts to terminal width
    fn print_separator(&self) {
        let width = terminal_width();
        println!("{}", "─".repeat(width));
    }

    /// Print the current settings below the reply (only in interactive mode)
    fn print_status_line(&self) {
        if !self.is_interactive {
            return;
        }

        let settings = &self.session.settings;
        let status = format!(
            "Model: {} | Style: {:.1} | Retries: {} | Key: {}",
            settings.model,
            settings.temperature,
            settings.max_retries,
            if settings.has_api_key() {
                "set"
            } else {
                "not set"
            }
        );

        // Truncate to terminal width if needed
        let width = terminal_width();
        let truncated = if status.len() > width {
            format!("{}...", &status[..width.saturating_sub(3)])
        } else {
            status
        };

        println!("{}", truncated.dark_grey());
    }
}
