//! neurochat-llm - Conversation request pipeline
//!
//! Owns everything between the shell's send action and the completion
//! endpoint: the history window, prompt assembly, the minimum-interval
//! rate gate, the single HTTP attempt, and the classification of every
//! outcome into [`RequestError`] or an [`AssistantReply`].
//!
//! The pipeline is stateless per call. The two pieces of shared state
//! (transcript and limiter) are passed in explicitly, so [`submit`]
//! behaves identically no matter how often the hosting shell re-runs
//! its own loop.

pub mod chat;
pub mod client;
pub mod error;
pub mod limiter;
pub mod prompt;
pub mod wire;

// Re-export commonly used types
pub use chat::{submit, AssistantReply};
pub use client::{CompletionClient, HEALTH_TIMEOUT, REQUEST_TIMEOUT};
pub use error::RequestError;
pub use limiter::RateLimiter;
pub use wire::{CompletionRequest, CompletionResponse, STOP_SEQUENCES};
