//! Message-to-command dispatch
//!
//! Routes incoming chat messages beginning with `/` to the registered
//! command handlers.

use anyhow::Result;
use log::{debug, info};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::registry::CommandRegistry;
use crate::core::messages::UNKNOWN_COMMAND;
use crate::features::reminders::ReminderService;

#[derive(Clone)]
pub struct CommandHandler {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandHandler {
    pub fn new(reminders: Arc<ReminderService>) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        CommandHandler {
            registry,
            context: Arc::new(CommandContext::new(reminders)),
        }
    }

    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let content = msg.content.trim();
        let Some((command, args)) = parse_command(content) else {
            debug!("ℹ️ Ignoring non-command message in channel {}", msg.channel_id);
            return Ok(());
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{}] 🎯 Processing text command: /{} | Args: {} | Channel: {}",
            request_id,
            command,
            args.len(),
            msg.channel_id
        );

        match self.registry.get(command) {
            Some(handler) => {
                handler
                    .handle(Arc::clone(&self.context), ctx, msg, &args)
                    .await?;
                info!("[{request_id}] ✅ Command /{command} completed");
            }
            None => {
                debug!("[{request_id}] ❓ Unknown command: /{command}");
                msg.channel_id.say(&ctx.http, UNKNOWN_COMMAND).await?;
            }
        }

        Ok(())
    }
}

/// Split message content into a command name (leading `/` stripped) and its
/// whitespace-separated arguments
///
/// Returns None for anything that is not a command.
fn parse_command(content: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = content.split_whitespace();
    let command = parts.next()?.strip_prefix('/')?;
    if command.is_empty() {
        return None;
    }
    Some((command, parts.collect()))
}
