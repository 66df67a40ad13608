use scmd_common::access::AccessLevel;
use scmd_common::ids::VotePercent;

use super::CommandId;
use crate::localize::Localize;

/// Who is told that a command was run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EchoPolicy {
    /// Nobody besides the caller.
    None,
    /// Connections at `admin` level and above.
    Admins,
    /// Every connected user.
    All,
}

impl EchoPolicy {
    /// Returns whether a connection holding `recipient` receives the notice.
    #[must_use]
    pub fn reaches(self, recipient: AccessLevel) -> bool {
        match self {
            Self::None => false,
            Self::Admins => recipient >= AccessLevel::Admin,
            Self::All => true,
        }
    }
}

/// Independent policy switches applied by the vote subsystem when tallying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VoteFlags {
    /// The proposer's ballot alone can never pass the vote.
    pub no_pass_alone: bool,
    /// Any ballot against the vote fails it.
    pub no_dissent: bool,
}

impl VoteFlags {
    /// No restriction beyond the default tally.
    pub const NONE: Self = Self {
        no_pass_alone: false,
        no_dissent: false,
    };
    /// Only `no_pass_alone`.
    pub const NO_PASS_ALONE: Self = Self {
        no_pass_alone: true,
        no_dissent: false,
    };

    const NO_PASS_ALONE_BIT: u32 = 1 << 0;
    const NO_DISSENT_BIT: u32 = 1 << 1;

    /// Wire encoding handed to the vote subsystem.
    #[must_use]
    pub const fn bits(self) -> u32 {
        let mut bits = 0;
        if self.no_pass_alone {
            bits |= Self::NO_PASS_ALONE_BIT;
        }
        if self.no_dissent {
            bits |= Self::NO_DISSENT_BIT;
        }
        bits
    }

    /// Decodes the wire encoding. Unknown bits are ignored.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            no_pass_alone: bits & Self::NO_PASS_ALONE_BIT != 0,
            no_dissent: bits & Self::NO_DISSENT_BIT != 0,
        }
    }

    /// Returns `true` when no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits() == 0
    }
}

/// Usage summary of a command.
///
/// Synopses that only list literal keywords are shown verbatim; the rest go through the
/// localizer like any other help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synopsis {
    /// Raw synopsis, possibly several lines.
    pub text: &'static str,
    /// Whether the text is handed to the localizer.
    pub translatable: bool,
}

impl Synopsis {
    /// Synopsis shown exactly as written.
    #[must_use]
    pub const fn verbatim(text: &'static str) -> Self {
        Self {
            text,
            translatable: false,
        }
    }

    /// Synopsis passed through the localizer.
    #[must_use]
    pub const fn translatable(text: &'static str) -> Self {
        Self {
            text,
            translatable: true,
        }
    }
}

/// Metadata for one command table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub(crate) id: CommandId,
    pub(crate) name: &'static str,
    pub(crate) level: AccessLevel,
    pub(crate) synopsis: Synopsis,
    pub(crate) short_help: &'static str,
    pub(crate) extra_help: Option<&'static str>,
    pub(crate) echo: EchoPolicy,
    pub(crate) vote_flags: VoteFlags,
    pub(crate) vote_percent: u8,
}

impl CommandDescriptor {
    #[must_use]
    pub fn id(&self) -> CommandId {
        self.id
    }

    /// Dense table index, equal to `id().index()`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.id.index()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Access level needed to run the command without a vote.
    #[must_use]
    pub fn required_level(&self) -> AccessLevel {
        self.level
    }

    #[must_use]
    pub fn synopsis(&self) -> Synopsis {
        self.synopsis
    }

    #[must_use]
    pub fn echo(&self) -> EchoPolicy {
        self.echo
    }

    #[must_use]
    pub fn vote_flags(&self) -> VoteFlags {
        self.vote_flags
    }

    /// Raw vote percent; `0` means the server default applies.
    #[must_use]
    pub fn vote_percent(&self) -> u8 {
        self.vote_percent
    }

    /// Per-command threshold, or `None` when the server default applies.
    #[must_use]
    pub fn vote_percent_override(&self) -> Option<VotePercent> {
        VotePercent::new(self.vote_percent).filter(|percent| percent.get() > 0)
    }

    /// Threshold a vote on this command must reach.
    #[must_use]
    pub fn resolve_vote_percent(&self, server_default: VotePercent) -> VotePercent {
        self.vote_percent_override().unwrap_or(server_default)
    }

    /// Usage text for display.
    #[must_use]
    pub fn synopsis_text(&self, localize: &impl Localize) -> String {
        if self.synopsis.translatable {
            localize.localize(self.synopsis.text)
        } else {
            self.synopsis.text.to_owned()
        }
    }

    /// One-line description for display.
    #[must_use]
    pub fn short_help_text(&self, localize: &impl Localize) -> String {
        localize.localize(self.short_help)
    }

    /// Long description for display, or `None` when the command has none.
    #[must_use]
    pub fn extra_help_text(&self, localize: &impl Localize) -> Option<String> {
        self.extra_help.map(|text| localize.localize(text))
    }
}

/// Vote flags of a possibly unresolved command; empty when there is none.
#[must_use]
pub fn vote_flags_of(descriptor: Option<&CommandDescriptor>) -> VoteFlags {
    descriptor.map_or(VoteFlags::NONE, CommandDescriptor::vote_flags)
}

/// Raw vote percent of a possibly unresolved command; `0` when there is none.
#[must_use]
pub fn vote_percent_of(descriptor: Option<&CommandDescriptor>) -> u8 {
    descriptor.map_or(0, CommandDescriptor::vote_percent)
}
