// Chat module
// Transcript state, system prompt, and the request/response orchestrator

mod orchestrator;
mod prompt;
mod transcript;

pub use orchestrator::{NoticeKind, Orchestrator, Reply, Session, CONTEXT_TURNS};
pub use prompt::system_prompt;
pub use transcript::{Role, Transcript, Turn, CLEARED_GREETING, GREETING};
