//! Set command handler
//!
//! Handles: set
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveTime;
use log::{debug, info};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::core::messages::{reminder_count_line, success_reply, USAGE_STRING};
use crate::features::reminders::ConversationId;

/// Position of the time argument in the /set argument list
const TIME_ARG_INDEX: usize = 0;

/// Handler for /set HH:MM - schedule a daily reminder
pub struct SetHandler;

#[async_trait]
impl ChatCommandHandler for SetHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["set"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        args: &[&str],
    ) -> Result<()> {
        let conversation = ConversationId::from(msg.channel_id);

        let time = args.get(TIME_ARG_INDEX).and_then(|s| Self::parse_time_of_day(s));
        let Some(time) = time else {
            debug!("❌ Malformed /set arguments {args:?} from conversation {conversation}");
            msg.channel_id.say(&serenity_ctx.http, USAGE_STRING).await?;
            return Ok(());
        };

        let confirmation = ctx.reminders.set_daily(conversation, time);
        info!(
            "✅ Daily reminder at {} set for conversation {conversation} ({} active)",
            time.format("%H:%M"),
            confirmation.active
        );

        msg.channel_id
            .say(&serenity_ctx.http, success_reply(confirmation.until_first))
            .await?;
        msg.channel_id
            .say(&serenity_ctx.http, reminder_count_line(confirmation.active))
            .await?;

        Ok(())
    }
}

impl SetHandler {
    /// Parse a time-of-day token like "9:30" or "09:30" (24-hour clock)
    ///
    /// The token must split into exactly two integer parts on `:`; range
    /// checking is left to `NaiveTime` construction.
    fn parse_time_of_day(token: &str) -> Option<NaiveTime> {
        let (hour, minute) = token.split_once(':')?;
        if minute.contains(':') {
            return None;
        }
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_handler_commands() {
        let handler = SetHandler;
        assert_eq!(handler.command_names(), &["set"]);
    }

    #[test]
    fn test_parse_time_of_day_valid() {
        let cases = [
            ("00:00", (0, 0)),
            ("9:5", (9, 5)),
            ("09:05", (9, 5)),
            ("12:30", (12, 30)),
            ("23:59", (23, 59)),
        ];
        for (token, (hour, minute)) in cases {
            assert_eq!(
                SetHandler::parse_time_of_day(token),
                NaiveTime::from_hms_opt(hour, minute, 0),
                "token {token}"
            );
        }
    }

    #[test]
    fn test_parse_time_of_day_invalid() {
        let cases = [
            "",        // empty
            "12",      // no separator
            "12:",     // empty minute
            ":30",     // empty hour
            "12.30",   // wrong separator
            "12:34:56",// too many parts
            "ab:cd",   // non-numeric
            "12:3b",   // trailing garbage
            "24:00",   // hour out of range
            "12:60",   // minute out of range
            "-1:30",   // negative hour
        ];
        for token in cases {
            assert_eq!(SetHandler::parse_time_of_day(token), None, "token {token}");
        }
    }
}
