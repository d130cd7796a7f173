// Request/response cycle: build the bounded-context request, call the
// endpoint with the retry policy, shape the reply, append it.

use chrono::Local;

use crate::config::Settings;
use crate::format::{assemble, highlight_status, post_process};
use crate::openrouter::{with_retry, ChatError, ChatRequest, Client, Message};

use super::prompt::system_prompt;
use super::transcript::{Transcript, Turn};

/// How many trailing transcript turns ride along with each request.
pub const CONTEXT_TURNS: usize = 4;

/// Everything one session owns: the transcript plus the adjustable settings.
pub struct Session {
    pub transcript: Transcript,
    pub settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            transcript: Transcript::new(),
            settings,
        }
    }
}

/// Outcome of one submitted query. The matching assistant turn has already
/// been appended to the transcript when this is returned.
pub enum Reply {
    /// The endpoint answered. `processed` feeds the paced reveal; `full` is
    /// the assembled text with status highlighting, as recorded.
    Answer { processed: String, full: String },
    /// The cycle failed. `text` is the notice shown and recorded.
    Notice { kind: NoticeKind, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    MissingCredential,
    ProcessingError,
    NetworkError,
    Unexpected,
}

pub struct Orchestrator {
    client: Client,
}

impl Orchestrator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Append `user_text` as a user turn and drive one completion cycle.
    ///
    /// Callers filter out empty input; the user turn is appended before any
    /// network activity. Exactly one assistant turn is appended no matter
    /// how the cycle ends, so the session is always ready for the next
    /// query.
    pub async fn submit(&self, session: &mut Session, user_text: &str) -> Reply {
        session.transcript.push_user(user_text);

        let result = match session.settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(api_key) => {
                let api_key = api_key.to_string();
                let request = build_request(&session.transcript, &session.settings);

                with_retry(session.settings.max_retries, || {
                    self.client.complete(&api_key, &request)
                })
                .await
            }
            None => Err(ChatError::MissingCredential),
        };

        match result {
            Ok(raw) => {
                let processed = post_process(&raw);
                let full = highlight_status(&assemble(&processed));
                session.transcript.push_assistant(full.clone());
                Reply::Answer { processed, full }
            }
            Err(ChatError::MissingCredential) => {
                fail(session, NoticeKind::MissingCredential, setup_notice())
            }
            Err(ChatError::MalformedResponse(detail)) => {
                tracing::error!("completion attempts exhausted: {}", detail);
                fail(session, NoticeKind::ProcessingError, processing_notice())
            }
            Err(ChatError::Network(detail)) => {
                fail(session, NoticeKind::NetworkError, network_notice(&detail))
            }
            Err(e) => {
                tracing::error!("unexpected completion failure: {}", e);
                fail(session, NoticeKind::Unexpected, unexpected_notice(&e))
            }
        }
    }
}

/// Record the notice as the assistant turn, mirroring what the screen shows.
fn fail(session: &mut Session, kind: NoticeKind, text: String) -> Reply {
    session.transcript.push_assistant(text.clone());
    Reply::Notice { kind, text }
}

/// System instruction plus at most the last `CONTEXT_TURNS` turns.
fn build_request(transcript: &Transcript, settings: &Settings) -> ChatRequest {
    let context = transcript
        .recent(CONTEXT_TURNS)
        .iter()
        .map(Message::from)
        .collect();

    ChatRequest::new(
        &settings.model,
        system_prompt(Local::now().date_naive()),
        context,
        settings.temperature,
    )
}

impl From<&Turn> for Message {
    fn from(turn: &Turn) -> Self {
        Message::new(turn.role.as_str(), turn.content.clone())
    }
}

fn setup_notice() -> String {
    "🔑 API key required\n\
     Get Started:\n\
     1. Visit https://openrouter.ai/keys\n\
     2. Create an account & get a key\n\
     3. Run /key <KEY>, or set OPENROUTER_API_KEY and restart"
        .to_string()
}

fn processing_notice() -> String {
    "⚠️ Processing error. Try:\n\
     - Rephrase your question\n\
     - Check payment details format\n\
     - Verify internet connection"
        .to_string()
}

fn network_notice(detail: &str) -> String {
    format!(
        "🌐 Network Error: {}\nConnection issue - please try again",
        detail
    )
}

fn unexpected_notice(e: &ChatError) -> String {
    format!("❌ Unexpected error: {}\nPlease try again", e)
}
