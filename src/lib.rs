// Core layer - configuration and outbound message text
pub mod core;

// Features layer - feature modules
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

// Re-export core config
pub use core::Config;

// Re-export feature items
pub use features::reminders::{
    AlarmSink, ConversationId, DailyScheduler, DiscordAlarmSink, JobHandle, ReminderService,
    SetConfirmation, TokioDailyScheduler,
};
