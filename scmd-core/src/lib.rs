//! Command registry shared by the authorization gate and the console front end.

pub mod command;
pub mod containers;
pub mod help;
pub mod localize;
pub mod registry;

use std::sync::Arc;

use command::ConsoleReply;
use localize::Localize;
use registry::CommandRegistry;
use scmd_common::access::AccessLevel;

const OPTIONS_UNAVAILABLE: &str = "Server options are not available on this console.";

/// Core module bootstrap object.
///
/// Owns the process-wide registry behind an `Arc`, so gate instances and connection handlers
/// can hold it without copying the table.
#[derive(Debug, Clone)]
pub struct CoreModule {
    registry: Arc<CommandRegistry>,
}

impl CoreModule {
    /// Builds the registry of built-in commands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(CommandRegistry::with_builtin_commands()),
        }
    }

    /// Returns the shared registry handle.
    #[must_use]
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Answers `help [topic]` for a caller holding `level`.
    ///
    /// No topic prints the help of `help` itself, `commands` lists what `level` may run, and
    /// anything else is resolved as a command name. Server options live outside this console,
    /// so `options` gets a fixed notice.
    #[must_use]
    pub fn help(&self, topic: &str, level: AccessLevel, localize: &impl Localize) -> ConsoleReply {
        let topic = topic.trim();
        if topic.is_empty() {
            let descriptor = self.registry.by_id(registry::CommandId::Help);
            return ConsoleReply::Info(help::render_command_help(descriptor, localize));
        }
        if topic == "commands" {
            return ConsoleReply::Info(help::render_command_list(
                &self.registry,
                level,
                localize,
            ));
        }
        if topic == "options" {
            return ConsoleReply::Info(localize.localize(OPTIONS_UNAVAILABLE));
        }
        match self.registry.by_name(topic) {
            Ok(descriptor) => ConsoleReply::Info(help::render_command_help(descriptor, localize)),
            Err(error) => ConsoleReply::Error(error.to_string()),
        }
    }
}

impl Default for CoreModule {
    fn default() -> Self {
        Self::new()
    }
}
