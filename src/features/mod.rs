//! # Features
//!
//! Feature modules for the reminder bot.

pub mod reminders;

pub use reminders::{ReminderService, TokioDailyScheduler};
