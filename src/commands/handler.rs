//! Chat command handler trait and infrastructure
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// Trait for text command handlers
///
/// Each handler implements this trait to process one or more commands.
/// Handlers are registered with a CommandRegistry and dispatched based on the
/// command name, with the leading `/` already stripped.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl ChatCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         serenity_ctx: &Context,
///         msg: &Message,
///         args: &[&str],
///     ) -> Result<()> {
///         msg.channel_id.say(&serenity_ctx.http, "Pong!").await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ChatCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with the reminder service
    /// * `serenity_ctx` - Serenity context for Discord API calls
    /// * `msg` - The message carrying the command
    /// * `args` - Whitespace-split tokens after the command name
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        args: &[&str],
    ) -> Result<()>;
}
