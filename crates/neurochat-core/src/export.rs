use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::message::Message;
use crate::transcript::Transcript;

pub const APP_NAME: &str = "NeuroChat";

#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: APP_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Snapshot of a session ready to be written to disk.
#[derive(Debug, Serialize)]
pub struct ChatExport<'a> {
    pub app_info: AppInfo,
    pub timestamp: DateTime<Utc>,
    pub system_prompt: &'a str,
    pub messages: &'a [Message],
}

impl<'a> ChatExport<'a> {
    pub fn new(transcript: &'a Transcript, system_prompt: &'a str) -> Self {
        Self {
            app_info: AppInfo::default(),
            timestamp: Utc::now(),
            system_prompt,
            messages: transcript.messages(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// `chat_history_<YYYYmmdd_HHMMSS>.json` in local time.
    pub fn default_filename() -> String {
        Self::filename_at(Local::now())
    }

    fn filename_at(at: DateTime<Local>) -> String {
        format!("chat_history_{}.json", at.format("%Y%m%d_%H%M%S"))
    }
}
