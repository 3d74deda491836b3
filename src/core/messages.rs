//! Outbound message text
//!
//! Every string the bot sends lives here. The alarm text and the reply
//! templates are fixed wire-compatible strings; changing them breaks users'
//! expectations, so keep them verbatim.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

/// The message delivered when a daily alarm fires
pub const ALARM_TEXT: &str = "Pipi Tanz, Pipi Tanz, Zeit für Pipi Tanz!";

/// Static usage text for /start, /help and malformed /set arguments
pub const USAGE_STRING: &str = "Schedule a daily reminder with `/set HH:MM` (24-hour clock, local time), e.g. `/set 09:30`.\nRemove all reminders for this channel with `/unset`.";

/// Reply for /unset when nothing is scheduled
pub const NO_ACTIVE_REMINDERS: &str = "You have no active reminders";

/// Reply for unrecognized commands
pub const UNKNOWN_COMMAND: &str = "Unknown command. Use `/help` to see available commands.";

/// Confirmation for a successful /set, formatted with the next-fire delta
pub fn success_reply(until_first: chrono::Duration) -> String {
    format!(
        "Timer successfully set! First reminder in {}.",
        format_duration(until_first.num_seconds())
    )
}

/// Current reminder tally, sent right after the /set confirmation
pub fn reminder_count_line(count: usize) -> String {
    format!("You currently have {count} reminders")
}

/// Confirmation for /unset
pub fn removed_reply(count: usize) -> String {
    format!("{count} reminders successfully removed!")
}

/// Format a duration in seconds into a human-readable string
pub fn format_duration(seconds: i64) -> String {
    if seconds < 60 {
        format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" })
    } else if seconds < 3600 {
        let mins = seconds / 60;
        format!("{} minute{}", mins, if mins == 1 { "" } else { "s" })
    } else {
        let hours = seconds / 3600;
        let mins = (seconds % 3600) / 60;
        if mins > 0 {
            format!(
                "{} hour{} {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                mins,
                if mins == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    }
}
