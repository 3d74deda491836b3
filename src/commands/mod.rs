//! # Command System
//!
//! Text command (/) handling for chat messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;

// Re-export the CommandHandler dispatcher
pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::ChatCommandHandler;
pub use registry::CommandRegistry;
