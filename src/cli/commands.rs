// Slash command handling
// In-session controls for settings and the transcript

use anyhow::Result;

use crate::chat::{Session, CLEARED_GREETING};

pub enum Command {
    Help,
    Quit,
    Clear,
    Key(String),
    Model(String),
    Temperature(f32),
    Retries(u32),
    Settings,
    Invalid(&'static str),
}

impl Command {
    /// Parse a slash command; `None` means the input is a chat query.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.trim().splitn(2, char::is_whitespace);
        let head = parts.next()?;
        let arg = parts.next().map(str::trim).unwrap_or("");

        let command = match head {
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            "/clear" => Command::Clear,
            "/settings" => Command::Settings,
            "/key" => {
                if arg.is_empty() {
                    Command::Invalid("usage: /key <KEY>")
                } else {
                    Command::Key(arg.to_string())
                }
            }
            "/model" => {
                if arg.is_empty() {
                    Command::Invalid("usage: /model <NAME>")
                } else {
                    Command::Model(arg.to_string())
                }
            }
            "/temp" => match arg.parse() {
                Ok(value) => Command::Temperature(value),
                Err(_) => Command::Invalid("usage: /temp <0.0-1.0>"),
            },
            "/retries" => match arg.parse() {
                Ok(value) => Command::Retries(value),
                Err(_) => Command::Invalid("usage: /retries <1-5>"),
            },
            _ => return None,
        };

        Some(command)
    }
}

pub fn handle_command(command: Command, session: &mut Session) -> Result<String> {
    match command {
        Command::Help => Ok(format_help()),
        Command::Quit => Ok("Goodbye!".to_string()),
        Command::Clear => {
            session.transcript.clear();
            Ok(CLEARED_GREETING.to_string())
        }
        Command::Key(key) => {
            session.settings.api_key = Some(key);
            Ok("API key set for this session".to_string())
        }
        Command::Model(model) => {
            session.settings.model = model.clone();
            Ok(format!("Model set to {}", model))
        }
        Command::Temperature(value) => {
            session.settings.set_temperature(value)?;
            Ok(format!("Response style set to {:.1}", value))
        }
        Command::Retries(value) => {
            session.settings.set_max_retries(value)?;
            Ok(format!("Max retries set to {}", value))
        }
        Command::Settings => Ok(format_settings(session)),
        Command::Invalid(usage) => Ok(usage.to_string()),
    }
}

fn format_help() -> String {
    r#"Available commands:
  /help           - Show this help message
  /quit           - Exit the assistant
  /clear          - Clear the chat and start over
  /key <KEY>      - Set the OpenRouter API key for this session
  /model <NAME>   - Set the model identifier
  /temp <0.0-1.0> - Response style: precise (0.0) to creative (1.0)
  /retries <1-5>  - Attempts per request on a garbled response
  /settings       - Show the current settings

Ask about bill management to get started!"#
        .to_string()
}

fn format_settings(session: &Session) -> String {
    let settings = &session.settings;
    format!(
        "Model: {}\n\
         Response style: {:.1}\n\
         Max retries: {}\n\
         API key: {}",
        settings.model,
        settings.temperature,
        settings.max_retries,
        if settings.has_api_key() {
            "set (hidden)"
        } else {
            "not set"
        }
    )
}
