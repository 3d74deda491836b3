//! Usage command handlers
//!
//! Handles: start, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::core::messages::USAGE_STRING;

/// Handler for /start and /help: replies with the static usage text
pub struct UsageHandler;

#[async_trait]
impl ChatCommandHandler for UsageHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        _args: &[&str],
    ) -> Result<()> {
        debug!("📚 Sending usage text to channel {}", msg.channel_id);
        msg.channel_id.say(&serenity_ctx.http, USAGE_STRING).await?;
        Ok(())
    }
}
