// OpenRouter API module
// Public interface for the chat-completions client

mod client;
mod error;
mod retry;
mod types;

pub use client::Client;
pub use error::ChatError;
pub use retry::with_retry;
pub use types::{ChatRequest, Message};
