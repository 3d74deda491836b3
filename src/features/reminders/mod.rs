//! # Reminders Feature
//!
//! Daily reminder scheduling: recurring jobs, per-conversation tracking,
//! alarm delivery.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod scheduler;
pub mod service;

pub use scheduler::{
    until_next_occurrence, AlarmSink, ConversationId, DailyScheduler, DiscordAlarmSink, JobHandle,
    TokioDailyScheduler,
};
pub use service::{ReminderService, SetConfirmation};
