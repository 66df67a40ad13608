//! Authorization gate and vote promotion for console commands.

pub mod echo;
pub mod gate;
pub mod vote;

use std::sync::Arc;

use gate::AuthorizationGate;
use scmd_common::config::RuntimeConfig;
use scmd_core::registry::CommandRegistry;

/// Gate subsystem bootstrap module.
#[derive(Debug, Clone)]
pub struct GateModule {
    /// Gate shared by every connection handler of the server composition root.
    pub gate: AuthorizationGate,
}

impl GateModule {
    /// Creates the gate over `registry` with the configured promotion policy.
    #[must_use]
    pub fn new(registry: Arc<CommandRegistry>, config: &RuntimeConfig) -> Self {
        Self {
            gate: AuthorizationGate::from_config(registry, config),
        }
    }
}
