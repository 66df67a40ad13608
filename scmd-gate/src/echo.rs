//! Echo audience of an executed command.

use scmd_common::access::AccessLevel;
use scmd_common::ids::ConnectionId;
use scmd_core::registry::EchoPolicy;

use crate::gate::Caller;

/// Level snapshot of one connected client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedClient {
    /// Connection identifier.
    pub id: ConnectionId,
    /// Current access level.
    pub level: AccessLevel,
}

/// Returns the connections that should see `caller`'s command echoed, in input order.
///
/// The caller itself is skipped since it already sees its own reply.
#[must_use]
pub fn echo_recipients(
    policy: EchoPolicy,
    caller: Caller,
    clients: &[ConnectedClient],
) -> Vec<ConnectionId> {
    let own_id = caller.connection_id();
    clients
        .iter()
        .filter(|client| Some(client.id) != own_id)
        .filter(|client| policy.reaches(client.level))
        .map(|client| client.id)
        .collect()
}
