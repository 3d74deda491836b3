//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod set;
pub mod unset;
pub mod usage;

use std::sync::Arc;

use super::handler::ChatCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn ChatCommandHandler>> {
    vec![
        Arc::new(usage::UsageHandler),
        Arc::new(set::SetHandler),
        Arc::new(unset::UnsetHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_commands_have_handlers() {
        let names: Vec<&str> = create_all_handlers()
            .iter()
            .flat_map(|h| h.command_names().iter().copied())
            .collect();

        for expected in ["start", "help", "set", "unset"] {
            assert!(names.contains(&expected), "missing handler for {expected}");
        }
    }
}
