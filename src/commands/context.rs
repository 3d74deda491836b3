//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::features::reminders::ReminderService;
use std::sync::Arc;

/// Shared context for all command handlers
///
/// Carries the services command handlers need; today that is the
/// ReminderService for scheduling and tracking daily reminders.
#[derive(Clone)]
pub struct CommandContext {
    pub reminders: Arc<ReminderService>,
}

impl CommandContext {
    /// Create a new CommandContext with the given services
    pub fn new(reminders: Arc<ReminderService>) -> Self {
        Self { reminders }
    }
}
