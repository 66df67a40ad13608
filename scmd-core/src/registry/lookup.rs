use thiserror::Error;

use super::{CommandDescriptor, CommandRegistry};

/// User-input failures while resolving a typed command name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Nothing was typed.
    #[error("empty command name")]
    Empty,

    /// The name is not a prefix of any command.
    #[error("unknown command '{0}'")]
    NotFound(String),

    /// The name is a prefix of several commands.
    #[error("ambiguous command '{name}', could be: {list}", list = .candidates.join(", "))]
    Ambiguous {
        /// Name as typed.
        name: String,
        /// Every matching command name, in table order.
        candidates: Vec<&'static str>,
    },
}

impl CommandRegistry {
    /// Resolves a typed name by unique-prefix match.
    ///
    /// Matching is case-sensitive. A name equal to a registered command always resolves to that
    /// command, even when it is also a prefix of a longer name (`lua` vs `luafile`). Otherwise
    /// the name must be a prefix of exactly one command.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Empty` for an empty name, `LookupError::NotFound` when no command
    /// starts with `name`, and `LookupError::Ambiguous` listing all matches when several do.
    pub fn by_name(&self, name: &str) -> Result<&CommandDescriptor, LookupError> {
        if name.is_empty() {
            return Err(LookupError::Empty);
        }
        if let Some(id) = self.exact_names.get(name) {
            return Ok(self.by_id(*id));
        }

        let mut matches = self
            .descriptors
            .iter()
            .filter(|descriptor| descriptor.name.starts_with(name));
        let Some(first) = matches.next() else {
            return Err(LookupError::NotFound(name.to_owned()));
        };
        let rest = matches.collect::<Vec<_>>();
        if rest.is_empty() {
            return Ok(first);
        }

        let candidates = std::iter::once(first)
            .chain(rest)
            .map(|descriptor| descriptor.name)
            .collect();
        Err(LookupError::Ambiguous {
            name: name.to_owned(),
            candidates,
        })
    }
}
