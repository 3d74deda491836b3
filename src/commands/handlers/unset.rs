//! Unset command handler
//!
//! Handles: unset
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::core::messages::{removed_reply, NO_ACTIVE_REMINDERS};
use crate::features::reminders::ConversationId;

/// Handler for /unset - cancel every reminder for the conversation
pub struct UnsetHandler;

#[async_trait]
impl ChatCommandHandler for UnsetHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["unset"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        _args: &[&str],
    ) -> Result<()> {
        let conversation = ConversationId::from(msg.channel_id);

        let reply = match ctx.reminders.unset_all(conversation) {
            Some(removed) => {
                info!("🗑️ Unset removed {removed} reminder(s) for conversation {conversation}");
                removed_reply(removed)
            }
            None => NO_ACTIVE_REMINDERS.to_string(),
        };
        msg.channel_id.say(&serenity_ctx.http, reply).await?;

        Ok(())
    }
}
