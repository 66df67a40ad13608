//! Command registry.
//!
//! One immutable table owns every command's identity, usage text and authorization/vote
//! metadata. The table is built once at startup and then shared read-only; lookups never
//! allocate except when reporting an ambiguous name.

use scmd_common::access::AccessLevel;
use scmd_common::ids::CommandIndex;
use thiserror::Error;
use tracing::error;

use crate::containers::HotMap as HashMap;

#[path = "registry/command_id.rs"]
mod command_id;
#[path = "registry/descriptor.rs"]
mod descriptor;
#[path = "registry/lookup.rs"]
mod lookup;
#[path = "registry/table.rs"]
mod table;

pub use command_id::CommandId;
pub use descriptor::{
    CommandDescriptor, EchoPolicy, Synopsis, VoteFlags, vote_flags_of, vote_percent_of,
};
pub use lookup::LookupError;

/// Contract violations of the registry API.
///
/// These indicate a caller bug, never bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Index does not name a table entry.
    #[error("command index {index} out of range (table has {len} entries)")]
    OutOfRange {
        /// Requested index.
        index: CommandIndex,
        /// Table size.
        len: usize,
    },
}

/// Immutable command table with O(1) index access.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
    exact_names: HashMap<&'static str, CommandId>,
}

impl CommandRegistry {
    /// Builds the registry holding every built-in command of this build.
    #[must_use]
    pub fn with_builtin_commands() -> Self {
        let descriptors = CommandId::ALL
            .iter()
            .map(|id| table::builtin_descriptor(*id))
            .collect::<Vec<_>>();
        let exact_names = descriptors
            .iter()
            .map(|descriptor| (descriptor.name, descriptor.id))
            .collect();
        Self {
            descriptors,
            exact_names,
        }
    }

    /// Returns the descriptor stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::OutOfRange` when `index` is not a table position. The failure is
    /// logged because it can only come from a caller holding a stale or forged index.
    pub fn by_index(&self, index: CommandIndex) -> Result<&CommandDescriptor, RegistryError> {
        self.descriptors.get(index).ok_or_else(|| {
            let len = self.descriptors.len();
            error!(index, len, "command index out of range");
            RegistryError::OutOfRange { index, len }
        })
    }

    /// Returns the descriptor of a known command.
    #[must_use]
    pub fn by_id(&self, id: CommandId) -> &CommandDescriptor {
        &self.descriptors[id.index()]
    }

    /// Number of commands in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` for a table without commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates descriptors in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.descriptors.iter()
    }

    /// Iterates the commands `level` may run without a vote, in index order.
    pub fn commands_for_level(
        &self,
        level: AccessLevel,
    ) -> impl Iterator<Item = &CommandDescriptor> {
        self.descriptors
            .iter()
            .filter(move |descriptor| level.satisfies(descriptor.level))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtin_commands()
    }
}
