//! Authorization gate.
//!
//! Classifies one invocation as allowed, promoted to a vote, or denied. The gate holds only
//! immutable configuration and the shared registry, so clones can be handed to every
//! connection handler.

use std::sync::Arc;

use scmd_common::access::AccessLevel;
use scmd_common::config::{RuntimeConfig, VotePromotionPolicy};
use scmd_common::ids::{CommandIndex, ConnectionId, VotePercent};
use scmd_core::registry::{
    CommandDescriptor, CommandId, CommandRegistry, LookupError, RegistryError,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::vote::VoteRequest;

/// Originator of one command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// Local server operator. Runs at the configured console level and never opens votes.
    Console,
    /// Remote connection with the level it held when the line arrived.
    Connection {
        /// Connection identifier.
        id: ConnectionId,
        /// Access level snapshot.
        level: AccessLevel,
    },
}

impl Caller {
    /// Connection id, or `None` for the console.
    #[must_use]
    pub fn connection_id(self) -> Option<ConnectionId> {
        match self {
            Self::Console => None,
            Self::Connection { id, .. } => Some(id),
        }
    }
}

/// Why an invocation was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// Name did not resolve to exactly one command.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Caller is below the command's level and may not propose a vote for it.
    #[error("you need '{required}' access to use '{command}'")]
    InsufficientPrivilege {
        /// Resolved command name.
        command: &'static str,
        /// Level the command requires.
        required: AccessLevel,
    },
}

/// Outcome of classifying one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Invocation is refused.
    Denied(DenyReason),
    /// Caller may run the command right away.
    DirectAllowed(CommandId),
    /// Command runs only if a vote passes.
    VoteRequired(VoteRequest),
}

/// Stateless classifier over the shared command registry.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    registry: Arc<CommandRegistry>,
    policy: VotePromotionPolicy,
    default_vote_percent: VotePercent,
    console_level: AccessLevel,
}

impl AuthorizationGate {
    /// Builds a gate from runtime configuration.
    #[must_use]
    pub fn from_config(registry: Arc<CommandRegistry>, config: &RuntimeConfig) -> Self {
        Self {
            registry,
            policy: config.vote_promotion,
            default_vote_percent: config.default_vote_percent,
            console_level: config.console_level,
        }
    }

    /// Registry this gate resolves names against.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Level the gate assumes for `caller`.
    #[must_use]
    pub fn level_of(&self, caller: Caller) -> AccessLevel {
        match caller {
            Caller::Console => self.console_level,
            Caller::Connection { level, .. } => level,
        }
    }

    /// Resolves `name` and classifies the invocation.
    #[must_use]
    pub fn classify(&self, caller: Caller, name: &str) -> Decision {
        match self.registry.by_name(name) {
            Ok(descriptor) => self.evaluate(caller, descriptor),
            Err(error) => {
                debug!(command = name, %error, "command lookup failed");
                Decision::Denied(error.into())
            }
        }
    }

    /// Classifies an invocation of the command stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::OutOfRange` when `index` is not a table position.
    pub fn classify_index(
        &self,
        caller: Caller,
        index: CommandIndex,
    ) -> Result<Decision, RegistryError> {
        let descriptor = self.registry.by_index(index)?;
        Ok(self.evaluate(caller, descriptor))
    }

    /// Classifies an invocation of an already resolved command.
    #[must_use]
    pub fn evaluate(&self, caller: Caller, descriptor: &CommandDescriptor) -> Decision {
        let held = self.level_of(caller);
        let required = descriptor.required_level();
        if held.satisfies(required) {
            debug!(command = descriptor.name(), %held, "command allowed");
            return Decision::DirectAllowed(descriptor.id());
        }

        if let Caller::Connection { id, level } = caller
            && self.policy.promotes(level, required)
        {
            let request = VoteRequest {
                proposer: id,
                command: descriptor.id(),
                flags: descriptor.vote_flags(),
                percent: descriptor.resolve_vote_percent(self.default_vote_percent),
            };
            debug!(
                command = descriptor.name(),
                proposer = id,
                percent = request.percent.get(),
                "command promoted to vote"
            );
            return Decision::VoteRequired(request);
        }

        warn!(
            command = descriptor.name(),
            %held,
            %required,
            "command denied for insufficient access"
        );
        Decision::Denied(DenyReason::InsufficientPrivilege {
            command: descriptor.name(),
            required,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{AuthorizationGate, Caller, Decision, DenyReason};
    use crate::vote::VoteRequest;
    use googletest::prelude::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use scmd_common::access::AccessLevel;
    use scmd_common::config::{RuntimeConfig, VotePromotionPolicy};
    use scmd_common::ids::VotePercent;
    use scmd_core::registry::{CommandId, CommandRegistry, LookupError, RegistryError, VoteFlags};

    fn gate_with(config: &RuntimeConfig) -> AuthorizationGate {
        AuthorizationGate::from_config(Arc::new(CommandRegistry::with_builtin_commands()), config)
    }

    fn gate() -> AuthorizationGate {
        gate_with(&RuntimeConfig::default())
    }

    fn connection(level: AccessLevel) -> Caller {
        Caller::Connection { id: 3, level }
    }

    #[rstest]
    fn hack_connection_runs_every_command_directly() {
        let gate = gate();
        for descriptor in gate.registry().iter() {
            assert_that!(
                &gate.evaluate(connection(AccessLevel::Hack), descriptor),
                eq(&Decision::DirectAllowed(descriptor.id()))
            );
        }
    }

    #[rstest]
    fn none_connection_is_denied_every_command() {
        let gate = gate();
        for descriptor in gate.registry().iter() {
            assert_that!(
                &gate.evaluate(connection(AccessLevel::None), descriptor),
                eq(&Decision::Denied(DenyReason::InsufficientPrivilege {
                    command: descriptor.name(),
                    required: descriptor.required_level(),
                }))
            );
        }
    }

    #[rstest]
    fn quit_is_denied_for_basic_connection() {
        assert_that!(
            &gate().classify(connection(AccessLevel::Basic), "quit"),
            eq(&Decision::Denied(DenyReason::InsufficientPrivilege {
                command: "quit",
                required: AccessLevel::Hack,
            }))
        );
    }

    #[rstest]
    fn denial_message_names_required_level() {
        let Decision::Denied(reason) = gate().classify(connection(AccessLevel::Info), "start")
        else {
            panic!("info connection cannot start the game");
        };
        assert_that!(reason.to_string(), eq("you need 'basic' access to use 'start'"));
    }

    #[rstest]
    fn basic_connection_proposes_ctrl_command_as_vote() {
        assert_that!(
            &gate().classify(connection(AccessLevel::Basic), "set"),
            eq(&Decision::VoteRequired(VoteRequest {
                proposer: 3,
                command: CommandId::Set,
                flags: VoteFlags::NONE,
                percent: VotePercent::new(50).expect("valid percent"),
            }))
        );
    }

    #[rstest]
    fn kick_vote_refuses_sole_decision() {
        let Decision::VoteRequired(request) =
            gate().classify(connection(AccessLevel::Basic), "kick")
        else {
            panic!("basic connection must be able to propose kick");
        };
        assert_that!(request.flags, eq(VoteFlags::NO_PASS_ALONE));
        assert_that!(request.permits_sole_decision(1), eq(false));
        assert_that!(request.permits_sole_decision(2), eq(true));
    }

    #[rstest]
    fn vote_percent_falls_back_to_server_default() {
        let config = RuntimeConfig {
            default_vote_percent: VotePercent::new(75).expect("valid percent"),
            ..RuntimeConfig::default()
        };
        let gate = gate_with(&config);
        let debug = gate.registry().by_id(CommandId::Debug);
        let Decision::VoteRequired(request) = gate.evaluate(connection(AccessLevel::Basic), debug)
        else {
            panic!("basic connection must be able to propose debug");
        };
        assert_that!(debug.vote_percent(), eq(0_u8));
        assert_that!(request.percent.get(), eq(75_u8));
    }

    #[rstest]
    fn basic_connection_runs_vote_directly() {
        let gate = gate();
        assert_that!(
            &gate.classify(connection(AccessLevel::Basic), "vote"),
            eq(&Decision::DirectAllowed(CommandId::Vote))
        );
    }

    #[rstest]
    #[case(AccessLevel::Basic, "cmdlevel")]
    #[case(AccessLevel::Ctrl, "cmdlevel")]
    #[case(AccessLevel::Admin, "quit")]
    #[case(AccessLevel::Info, "set")]
    fn calls_outside_promotion_boundary_are_denied(
        #[case] level: AccessLevel,
        #[case] name: &str,
    ) {
        assert_that!(
            matches!(
                gate().classify(connection(level), name),
                Decision::Denied(DenyReason::InsufficientPrivilege { .. })
            ),
            eq(true)
        );
    }

    #[rstest]
    fn disabled_promotion_denies_instead_of_voting() {
        let config = RuntimeConfig {
            vote_promotion: VotePromotionPolicy::disabled(),
            ..RuntimeConfig::default()
        };
        assert_that!(
            matches!(
                gate_with(&config).classify(connection(AccessLevel::Basic), "set"),
                Decision::Denied(DenyReason::InsufficientPrivilege { .. })
            ),
            eq(true)
        );
    }

    #[rstest]
    fn console_runs_at_configured_level_and_is_never_promoted() {
        assert_that!(
            &gate().classify(Caller::Console, "quit"),
            eq(&Decision::DirectAllowed(CommandId::Quit))
        );

        let config = RuntimeConfig {
            console_level: AccessLevel::Basic,
            ..RuntimeConfig::default()
        };
        assert_that!(
            &gate_with(&config).classify(Caller::Console, "set"),
            eq(&Decision::Denied(DenyReason::InsufficientPrivilege {
                command: "set",
                required: AccessLevel::Ctrl,
            }))
        );
    }

    #[rstest]
    fn lookup_failures_become_denials() {
        let gate = gate();
        assert_that!(
            &gate.classify(Caller::Console, "xyzzy"),
            eq(&Decision::Denied(DenyReason::Lookup(LookupError::NotFound(
                "xyzzy".to_owned()
            ))))
        );
        assert_that!(
            &gate.classify(Caller::Console, ""),
            eq(&Decision::Denied(DenyReason::Lookup(LookupError::Empty)))
        );
        assert_that!(
            matches!(
                gate.classify(Caller::Console, "s"),
                Decision::Denied(DenyReason::Lookup(LookupError::Ambiguous { .. }))
            ),
            eq(true)
        );
    }

    #[rstest]
    fn classify_index_checks_table_bounds() {
        let gate = gate();
        let len = gate.registry().len();
        assert_that!(
            &gate.classify_index(Caller::Console, len),
            eq(&Err(RegistryError::OutOfRange { index: len, len }))
        );
        assert_that!(
            &gate.classify_index(Caller::Console, CommandId::Start.index()),
            eq(&Ok(Decision::DirectAllowed(CommandId::Start)))
        );
    }

    #[rstest]
    fn caller_exposes_connection_id() {
        assert_that!(Caller::Console.connection_id(), eq(None));
        assert_that!(connection(AccessLevel::Info).connection_id(), eq(Some(3_u32)));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[rstest]
    fn registry_and_gate_can_be_shared_across_threads() {
        assert_send_sync::<CommandRegistry>();
        assert_send_sync::<AuthorizationGate>();
        assert_send_sync::<Decision>();
    }

    fn any_level() -> impl Strategy<Value = AccessLevel> {
        proptest::sample::select(AccessLevel::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn sufficient_level_is_always_allowed(
            level in any_level(),
            index in 0..CommandId::COUNT,
        ) {
            let gate = gate();
            let descriptor = gate.registry().by_index(index).expect("index inside table");
            let decision = gate.evaluate(connection(level), descriptor);
            if level.satisfies(descriptor.required_level()) {
                prop_assert_eq!(decision, Decision::DirectAllowed(descriptor.id()));
            } else {
                let is_direct = matches!(decision, Decision::DirectAllowed(_));
                prop_assert!(!is_direct);
            }
        }

        #[test]
        fn votes_only_come_from_promotable_callers(
            level in any_level(),
            index in 0..CommandId::COUNT,
        ) {
            let gate = gate();
            let descriptor = gate.registry().by_index(index).expect("index inside table");
            if let Decision::VoteRequired(request) = gate.evaluate(connection(level), descriptor) {
                prop_assert!(level >= AccessLevel::Basic);
                prop_assert!(descriptor.required_level() <= AccessLevel::Ctrl);
                prop_assert_eq!(request.command, descriptor.id());
                prop_assert!(request.percent.get() > 0);
            }
        }
    }
}
