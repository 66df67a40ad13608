use scmd_common::ids::CommandIndex;

/// Stable identity of every built-in command.
///
/// The discriminant is the command's index in the registry table. Variants compiled out by build
/// configuration shift every later discriminant, and `ALL` shifts with them, so indices stay
/// dense within one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandId {
    Start,
    Help,
    List,
    Quit,
    Cut,
    Explain,
    Show,
    Wall,
    ConnectMsg,
    Vote,
    Debug,
    Set,
    Team,
    RulesetDir,
    MetaMessage,
    MetaPatches,
    MetaConnection,
    MetaServer,
    AiToggle,
    Take,
    Observe,
    Detach,
    Create,
    Away,
    Novice,
    Easy,
    Normal,
    Hard,
    Cheating,
    Experimental,
    CmdLevel,
    First,
    TimeoutIncrease,
    CancelVote,
    Ignore,
    Unignore,
    PlayerColor,
    EndGame,
    Surrender,
    Remove,
    Save,
    Load,
    Read,
    Write,
    Reset,
    Lua,
    LuaFile,
    Kick,
    /// Legacy save format, debug builds only.
    #[cfg(debug_assertions)]
    OldSave,
    Delegate,
    Fcdb,
    MapImg,
    RfcStyle,
    ServerId,
}

impl CommandId {
    /// Every command in table order. Must list variants in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Start,
        Self::Help,
        Self::List,
        Self::Quit,
        Self::Cut,
        Self::Explain,
        Self::Show,
        Self::Wall,
        Self::ConnectMsg,
        Self::Vote,
        Self::Debug,
        Self::Set,
        Self::Team,
        Self::RulesetDir,
        Self::MetaMessage,
        Self::MetaPatches,
        Self::MetaConnection,
        Self::MetaServer,
        Self::AiToggle,
        Self::Take,
        Self::Observe,
        Self::Detach,
        Self::Create,
        Self::Away,
        Self::Novice,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Cheating,
        Self::Experimental,
        Self::CmdLevel,
        Self::First,
        Self::TimeoutIncrease,
        Self::CancelVote,
        Self::Ignore,
        Self::Unignore,
        Self::PlayerColor,
        Self::EndGame,
        Self::Surrender,
        Self::Remove,
        Self::Save,
        Self::Load,
        Self::Read,
        Self::Write,
        Self::Reset,
        Self::Lua,
        Self::LuaFile,
        Self::Kick,
        #[cfg(debug_assertions)]
        Self::OldSave,
        Self::Delegate,
        Self::Fcdb,
        Self::MapImg,
        Self::RfcStyle,
        Self::ServerId,
    ];

    /// Number of commands compiled into this build.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the dense table index of this command.
    #[must_use]
    pub const fn index(self) -> CommandIndex {
        self as CommandIndex
    }

    /// Converts a raw table index back into a command id.
    ///
    /// Returns `None` for indices outside the table.
    #[must_use]
    pub fn from_index(index: CommandIndex) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
