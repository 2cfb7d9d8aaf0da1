//! neurochat-core - Core types for the NeuroChat client
//!
//! This crate provides the foundational types shared by the request
//! pipeline and the terminal shell:
//! - `message` - Role and Message
//! - `transcript` - append-only conversation history with request windowing
//! - `config` - immutable per-process configuration and its defaults
//! - `export` - serializable transcript export document

pub mod config;
pub mod export;
pub mod message;
pub mod transcript;

// Re-export commonly used types
pub use config::{
    validate_api_url, ChatConfig, ConfigError, DEFAULT_API_URL, DEFAULT_MAX_HISTORY_MESSAGES,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL_NAME, DEFAULT_RATE_LIMIT_SECONDS, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE,
};
pub use export::{AppInfo, ChatExport, APP_NAME};
pub use message::{Message, Role};
pub use transcript::Transcript;
