//! # Core Module
//!
//! Configuration and the fixed outbound message text for the reminder bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod messages;

// Re-export commonly used items
pub use config::Config;
pub use messages::{
    format_duration, reminder_count_line, removed_reply, success_reply, ALARM_TEXT,
    NO_ACTIVE_REMINDERS, UNKNOWN_COMMAND, USAGE_STRING,
};
