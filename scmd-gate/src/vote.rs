//! Vote requests produced when a command is promoted instead of denied.
//!
//! The gate only describes the vote. Opening it, collecting ballots and tallying belong to the
//! external vote subsystem, which consults `permits_sole_decision` before letting one voter
//! settle the outcome.

use scmd_common::ids::{ConnectionId, VotePercent};
use scmd_core::registry::{CommandId, VoteFlags};

/// Everything the vote subsystem needs to open a vote for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRequest {
    /// Connection that proposed the command.
    pub proposer: ConnectionId,
    /// Command put to the vote.
    pub command: CommandId,
    /// Behaviour flags copied from the command's descriptor.
    pub flags: VoteFlags,
    /// Threshold with the server default already applied.
    pub percent: VotePercent,
}

impl VoteRequest {
    /// Returns whether a vote with `voter_count` eligible voters may be decided by one of them.
    ///
    /// Commands flagged `no_pass_alone` (such as `kick`) need a second voter.
    #[must_use]
    pub fn permits_sole_decision(&self, voter_count: usize) -> bool {
        !(self.flags.no_pass_alone && voter_count <= 1)
    }

    /// Returns whether a single opposing ballot defeats the vote.
    #[must_use]
    pub fn fails_on_dissent(&self) -> bool {
        self.flags.no_dissent
    }
}
