//! Runtime configuration shared by module bootstrap code.

use crate::access::AccessLevel;
use crate::error::{ConsoleError, ConsoleResult};
use crate::ids::VotePercent;

/// Threshold used when a command does not carry its own vote percent.
pub const DEFAULT_VOTE_PERCENT: u8 = 50;

/// Decides which under-privileged invocations turn into a vote instead of a denial.
///
/// A caller below a command's required level may still propose it when the caller holds at
/// least `min_proposer` and the command requires at most `max_votable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotePromotionPolicy {
    /// Whether under-privileged calls may be promoted at all.
    pub enabled: bool,
    /// Lowest level allowed to open a vote.
    pub min_proposer: AccessLevel,
    /// Highest required level a vote can stand in for.
    pub max_votable: AccessLevel,
}

impl VotePromotionPolicy {
    /// Policy that never promotes; every under-privileged call is denied.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            min_proposer: AccessLevel::Basic,
            max_votable: AccessLevel::Ctrl,
        }
    }

    /// Returns whether `held` may open a vote for a command requiring `required`.
    #[must_use]
    pub fn promotes(&self, held: AccessLevel, required: AccessLevel) -> bool {
        self.enabled && held >= self.min_proposer && required <= self.max_votable
    }
}

impl Default for VotePromotionPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            min_proposer: AccessLevel::Basic,
            max_votable: AccessLevel::Ctrl,
        }
    }
}

/// Bootstrap configuration used by `scmd-server` during process startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Server-wide vote threshold applied to commands whose own percent is `0`.
    pub default_vote_percent: VotePercent,
    /// Vote promotion boundary for under-privileged callers.
    pub vote_promotion: VotePromotionPolicy,
    /// Level held by the local server console.
    pub console_level: AccessLevel,
}

impl RuntimeConfig {
    /// Checks cross-field constraints that the individual types cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InvalidConfig` when the default vote percent is zero or the
    /// promotion boundary is empty or lets `none` connections propose votes.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.default_vote_percent.get() == 0 {
            return Err(ConsoleError::InvalidConfig(
                "default vote percent must be greater than zero",
            ));
        }
        let policy = &self.vote_promotion;
        if policy.enabled {
            if policy.min_proposer == AccessLevel::None {
                return Err(ConsoleError::InvalidConfig(
                    "vote proposers must hold at least 'info' access",
                ));
            }
            if policy.max_votable <= policy.min_proposer {
                return Err(ConsoleError::InvalidConfig(
                    "highest votable level must be above the proposer level",
                ));
            }
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            default_vote_percent: VotePercent::new(DEFAULT_VOTE_PERCENT)
                .expect("literal vote percent must be in range"),
            vote_promotion: VotePromotionPolicy::default(),
            console_level: AccessLevel::Hack,
        }
    }
}
