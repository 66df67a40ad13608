//! Built-in command table.
//!
//! Every `CommandId` maps to exactly one descriptor through an exhaustive match, so adding a
//! command without metadata, or metadata without an id, fails to compile.

use scmd_common::access::AccessLevel;

use super::{CommandDescriptor, CommandId, EchoPolicy, Synopsis, VoteFlags};

#[allow(clippy::too_many_lines)]
pub(super) fn builtin_descriptor(id: CommandId) -> CommandDescriptor {
    match id {
        CommandId::Start => CommandDescriptor {
            id,
            name: "start",
            level: AccessLevel::Basic,
            synopsis: Synopsis::verbatim("start"),
            short_help: "Start the game, or restart after loading a savegame.",
            extra_help: Some(
                "This command starts the game. When starting a new game, it should be used \
                 after all human players have connected, and AI players have been created (if \
                 required), and any desired changes to initial server options have been made. \
                 After 'start', each human player will be able to choose their nation, and then \
                 the game will begin. This command is also required after loading a savegame \
                 for the game to recommence. Once the game is running this command is no longer \
                 available, since it would have no effect.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Help => CommandDescriptor {
            id,
            name: "help",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable(
                "help\n\
                 help commands\n\
                 help options\n\
                 help <command-name>\n\
                 help <option-name>",
            ),
            short_help: "Show help about server commands and server options.",
            extra_help: Some(
                "With no arguments gives some introductory help. With argument \"commands\" or \
                 \"options\" gives respectively a list of all commands or all options. \
                 Otherwise the argument is taken as a command name or option name, and help is \
                 given for that command or option. For options, the help information includes \
                 the current and default values for that option. The argument may be \
                 abbreviated where unambiguous.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::List => CommandDescriptor {
            id,
            name: "list",
            level: AccessLevel::Info,
            synopsis: Synopsis::verbatim(
                "list\n\
                 list colors\n\
                 list connections\n\
                 list ignored users\n\
                 list map image definitions\n\
                 list players\n\
                 list scenarios\n\
                 list teams\n\
                 list votes",
            ),
            short_help: "Show a list of various things.",
            extra_help: Some(
                "Show a list of:\n \
                 - the player colors,\n \
                 - connections to the server,\n \
                 - your ignore list,\n \
                 - the list of defined map images,\n \
                 - the list of the players in the game,\n \
                 - the available scenarios,\n \
                 - the teams of players or\n \
                 - the running votes.\n\
                 The argument may be abbreviated, and defaults to 'players' if absent.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Quit => CommandDescriptor {
            id,
            name: "quit",
            level: AccessLevel::Hack,
            synopsis: Synopsis::verbatim("quit"),
            short_help: "Quit the game and shutdown the server.",
            extra_help: None,
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Cut => CommandDescriptor {
            id,
            name: "cut",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("cut <connection-name>"),
            short_help: "Cut a client's connection to server.",
            extra_help: Some(
                "Cut specified client's connection to the server, removing that client from \
                 the game. If the game has not yet started that client's player is removed from \
                 the game, otherwise there is no effect on the player. Note that this command \
                 takes connection names, not player names.",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Explain => CommandDescriptor {
            id,
            name: "explain",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable(
                "explain\n\
                 explain <option-name>",
            ),
            short_help: "Explain server options.",
            extra_help: Some(
                "The 'explain' command gives a subset of the functionality of 'help', and is \
                 included for backward compatibility. With no arguments it gives a list of \
                 options (like 'help options'), and with an argument it gives help for a \
                 particular option (like 'help <option-name>').",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Show => CommandDescriptor {
            id,
            name: "show",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable(
                "show\n\
                 show <option-name>\n\
                 show <option-prefix>\n\
                 show all\n\
                 show vital\n\
                 show situational\n\
                 show rare\n\
                 show changed\n\
                 show locked\n\
                 show rulesetdir",
            ),
            short_help: "Show server options.",
            extra_help: Some(
                "With no arguments, shows vital server options (or available options, when \
                 used by clients). With an option name argument, show only the named option, \
                 or options with that prefix. With \"all\", it shows all options. With \
                 \"vital\", \"situational\" or \"rare\", a set of options with this level. With \
                 \"changed\", it shows only the options which have been modified, while with \
                 \"locked\" all settings locked by the ruleset will be listed. With \
                 \"rulesetdir\", it will show the current ruleset directory name.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Wall => CommandDescriptor {
            id,
            name: "wall",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable("wall <message>"),
            short_help: "Send message to all connections.",
            extra_help: Some(
                "For each connected client, pops up a window showing the message entered.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::ConnectMsg => CommandDescriptor {
            id,
            name: "connectmsg",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable("connectmsg <message>"),
            short_help: "Set message to show to connecting players.",
            extra_help: Some(
                "Set message to send to clients when they connect.\n\
                 Empty message means that no message is sent.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Vote => CommandDescriptor {
            id,
            name: "vote",
            level: AccessLevel::Basic,
            synopsis: Synopsis::translatable("vote yes|no|abstain [vote number]"),
            short_help: "Cast a vote.",
            extra_help: Some(
                "A player with basic level access issuing a control level command starts a \
                 new vote for the command. The /vote command followed by \"yes\", \"no\", or \
                 \"abstain\", and optionally a vote number, gives your vote. If you do not add a \
                 vote number, your vote applies to the latest vote. You can only suggest one \
                 vote at a time. The vote will pass immediately if more than half of the voters \
                 who have not abstained vote for it, or fail immediately if at least half of the \
                 voters who have not abstained vote against it.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Debug => CommandDescriptor {
            id,
            name: "debug",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::verbatim(
                "debug diplomacy\n\
                 debug ferries\n\
                 debug player <player>\n\
                 debug tech <player>\n\
                 debug city <x> <y>\n\
                 debug units <x> <y>\n\
                 debug unit <id>\n\
                 debug timing\n\
                 debug info",
            ),
            short_help: "Turn on or off AI debugging of given entity.",
            extra_help: Some(
                "Print AI debug information about given entity and turn continuous debugging \
                 output for this entity on or off.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Set => CommandDescriptor {
            id,
            name: "set",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("set <option-name> <value>"),
            short_help: "Set server option.",
            extra_help: None,
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Team => CommandDescriptor {
            id,
            name: "team",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("team <player> <team>"),
            short_help: "Change a player's team affiliation.",
            extra_help: Some(
                "A team is a group of players that start out allied, with shared vision and \
                 embassies, and fight together to achieve team victory with averaged individual \
                 scores. Each player is always a member of a team (possibly the only member). \
                 This command changes which team a player is a member of. Use \"\" if names \
                 contain whitespace.",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::RulesetDir => CommandDescriptor {
            id,
            name: "rulesetdir",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("rulesetdir <directory>"),
            short_help: "Choose new ruleset directory or modpack.",
            extra_help: Some("Choose new ruleset directory or modpack."),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::MetaMessage => CommandDescriptor {
            id,
            name: "metamessage",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("metamessage <meta-line>"),
            short_help: "Set metaserver info line.",
            extra_help: Some(
                "Set user defined metaserver info line. If parameter is omitted, previously set \
                 metamessage will be removed. For most of the time user defined metamessage \
                 will be used instead of automatically generated messages, if it is available.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::MetaPatches => CommandDescriptor {
            id,
            name: "metapatches",
            level: AccessLevel::Hack,
            synopsis: Synopsis::translatable("metapatches <meta-line>"),
            short_help: "Set metaserver patches line.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::MetaConnection => CommandDescriptor {
            id,
            name: "metaconnection",
            level: AccessLevel::Admin,
            synopsis: Synopsis::verbatim(
                "metaconnection u|up\n\
                 metaconnection d|down\n\
                 metaconnection ?",
            ),
            short_help: "Control metaserver connection.",
            extra_help: Some(
                "'metaconnection ?' reports on the status of the connection to metaserver. \
                 'metaconnection down' or 'metac d' brings the metaserver connection down. \
                 'metaconnection up' or 'metac u' brings the metaserver connection up.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::MetaServer => CommandDescriptor {
            id,
            name: "metaserver",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable("metaserver <address>"),
            short_help: "Set address (URL) for metaserver to report to.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::AiToggle => CommandDescriptor {
            id,
            name: "aitoggle",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("aitoggle <player-name>"),
            short_help: "Toggle AI status of player.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Take => CommandDescriptor {
            id,
            name: "take",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable("take [connection-name] <player-name>"),
            short_help: "Take over a player's place in the game.",
            extra_help: Some(
                "Only the console and connections with cmdlevel 'hack' can force other \
                 connections to take over a player. If you're not one of these, only the \
                 <player-name> argument is allowed. If '-' is given for the player name and the \
                 connection does not already control a player, one is created and assigned to \
                 the connection.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Observe => CommandDescriptor {
            id,
            name: "observe",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable("observe [connection-name] [player-name]"),
            short_help: "Observe a player or the whole game.",
            extra_help: Some(
                "Only the console and connections with cmdlevel 'hack' can force other \
                 connections to observe a player. If you're not one of these, only the \
                 [player-name] argument is allowed. If the console gives no player-name or the \
                 connection uses no arguments, then the connection is attached to a global \
                 observer.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Detach => CommandDescriptor {
            id,
            name: "detach",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable("detach <connection-name>"),
            short_help: "Detach from a player.",
            extra_help: Some(
                "Only the console and connections with cmdlevel 'hack' can force other \
                 connections to detach from a player.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Create => CommandDescriptor {
            id,
            name: "create",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("create <player-name> [ai type]"),
            short_help: "Create an AI player with a given name.",
            extra_help: Some(
                "With the 'create' command a new player with the given name is created.\n\
                 If the game was started, the command checks for free player slots and, if no \
                 free slots are available, it tries to reuse the slots of dead players. The new \
                 player has no units or cities.\n\
                 AI type parameter can be used to select which AI module will be used for the \
                 created player. This requires that the server has been built with AI module \
                 support and the respective module has been loaded.",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Away => CommandDescriptor {
            id,
            name: "away",
            level: AccessLevel::Basic,
            synopsis: Synopsis::verbatim("away"),
            short_help: "Set yourself in away mode. The AI will watch your back.",
            extra_help: Some("The AI will govern your nation but do minimal changes."),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Novice => skill_level_descriptor(
            id,
            "novice",
            "novice\n\
             novice <player-name>",
            "Set one or all AI players to 'novice'.",
            "With no arguments, sets all AI players to skill level 'novice', and sets the default \
             level for any new AI players to 'novice'. With an argument, sets the skill level for \
             that player only.",
        ),
        CommandId::Easy => skill_level_descriptor(
            id,
            "easy",
            "easy\n\
             easy <player-name>",
            "Set one or all AI players to 'easy'.",
            "With no arguments, sets all AI players to skill level 'easy', and sets the default \
             level for any new AI players to 'easy'. With an argument, sets the skill level for \
             that player only.",
        ),
        CommandId::Normal => skill_level_descriptor(
            id,
            "normal",
            "normal\n\
             normal <player-name>",
            "Set one or all AI players to 'normal'.",
            "With no arguments, sets all AI players to skill level 'normal', and sets the default \
             level for any new AI players to 'normal'. With an argument, sets the skill level for \
             that player only.",
        ),
        CommandId::Hard => skill_level_descriptor(
            id,
            "hard",
            "hard\n\
             hard <player-name>",
            "Set one or all AI players to 'hard'.",
            "With no arguments, sets all AI players to skill level 'hard', and sets the default \
             level for any new AI players to 'hard'. With an argument, sets the skill level for \
             that player only.",
        ),
        CommandId::Cheating => skill_level_descriptor(
            id,
            "cheating",
            "cheating\n\
             cheating <player-name>",
            "Set one or all AI players to 'cheating'.",
            "With no arguments, sets all AI players to skill level 'cheating', and sets the default \
             level for any new AI players to 'cheating'. With an argument, sets the skill level for \
             that player only.",
        ),
        CommandId::Experimental => CommandDescriptor {
            id,
            name: "experimental",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable(
                "experimental\n\
                 experimental <player-name>",
            ),
            short_help: "Set one or all AI players to 'experimental'.",
            extra_help: Some(
                "With no arguments, sets all AI players to skill 'experimental', and sets the \
                 default level for any new AI players to this. With an argument, sets the skill \
                 level for that player only. THIS IS ONLY FOR TESTING OF NEW AI FEATURES! For \
                 ordinary servers, this option has no effect.",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::CmdLevel => CommandDescriptor {
            id,
            name: "cmdlevel",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable(
                "cmdlevel\n\
                 cmdlevel <level>\n\
                 cmdlevel <level> new\n\
                 cmdlevel <level> first\n\
                 cmdlevel <level> <connection-name>",
            ),
            short_help: "Query or set command access level access.",
            extra_help: Some(
                "The command access level controls which server commands are available to \
                 users via the client chatline. The available levels are:\n    \
                 none  -  no commands\n    \
                 info  -  informational or observer commands only\n    \
                 basic -  commands available to players in the game\n    \
                 ctrl  -  commands that affect the game and users\n    \
                 admin -  commands that affect server operation\n    \
                 hack  -  *all* commands - dangerous!\n\
                 With no arguments, the current command access levels are reported. With a \
                 single argument, the level is set for all existing connections, and the \
                 default is set for future connections. If 'new' is specified, the level is set \
                 for newly connecting clients. If 'first come' is specified, the 'first come' \
                 level is set; it will be granted to the first client to connect, or if there \
                 are connections already, the first client to issue the 'first' command. If a \
                 connection name is specified, the level is set for that connection only.\n\
                 Command access levels do not persist if a client disconnects, because some \
                 untrusted person could reconnect with the same name. Note that this command \
                 takes connection names, not player names.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::First => CommandDescriptor {
            id,
            name: "first",
            level: AccessLevel::Basic,
            synopsis: Synopsis::verbatim("first"),
            short_help: "If there is none, become the game organizer with increased permissions.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::TimeoutIncrease => CommandDescriptor {
            id,
            name: "timeoutincrease",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("timeoutincrease <turn> <turninc> <value> <valuemult>"),
            short_help: "See \"help timeoutincrease\".",
            extra_help: Some(
                "Every <turn> turns, add <value> to timeout timer, then add <turninc> to <turn> \
                 and multiply <value> by <valuemult>. Use this command in concert with the \
                 option \"timeout\". Defaults are 0 0 0 1",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::CancelVote => CommandDescriptor {
            id,
            name: "cancelvote",
            level: AccessLevel::Basic,
            synopsis: Synopsis::translatable(
                "cancelvote\n\
                 cancelvote <vote number>\n\
                 cancelvote all",
            ),
            short_help: "Cancel a running vote.",
            extra_help: Some(
                "With no arguments this command removes your own vote. If you have an admin \
                 access level, you can cancel any vote by vote number, or all votes with the \
                 'all' argument.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Ignore => CommandDescriptor {
            id,
            name: "ignore",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable("ignore [type=]<pattern>"),
            short_help: "Block all messages from users matching the pattern.",
            extra_help: Some(
                "The given pattern will be added to your ignore list; you will not receive any \
                 messages from users matching this pattern. The type may be either \"user\", \
                 \"host\", or \"ip\". The default type (if omitted) is to match against the \
                 username. The pattern supports unix glob style wildcards, i.e. * matches zero \
                 or more characters, ? exactly one character, [abc] exactly one of 'a' 'b' or \
                 'c', etc. To access your current ignore list, issue \"/list ignore\".",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Unignore => CommandDescriptor {
            id,
            name: "unignore",
            level: AccessLevel::Info,
            synopsis: Synopsis::translatable("unignore <range>"),
            short_help: "Remove ignore list entries.",
            extra_help: Some(
                "The ignore list entries in the given range will be removed; you will be able \
                 to receive messages from the respective users. The range argument may be a \
                 single number or a pair of numbers separated by a dash '-'. If the first \
                 number is omitted, it is assumed to be 1, if the last is omitted, it is assumed \
                 to be the last valid ignore list index. To access your current ignore list, \
                 issue \"/list ignore\".",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::PlayerColor => CommandDescriptor {
            id,
            name: "playercolor",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable(
                "playercolor <player-name> <color>\n\
                 playercolor <player-name> reset",
            ),
            short_help: "Define the color of a player.",
            extra_help: Some(
                "This command is used to set the color of a player's nation. The color is \
                 defined using a hexadecimal notation (HEX) for the combination of Red, Green, \
                 and Blue color values (RGB). The lowest value is 0 (in HEX: 00). The highest \
                 value is 255 (in HEX: FF). The color definition starts with a '#' sign followed \
                 by the HEX values for the three colors, i.e '#ff0000' for red. In server \
                 scripts, the '#' sign must be escaped or the color definition must be quoted.\n\
                 In initial game state the color can only be defined if the 'plrcolormode' \
                 setting is set to 'PLR_SET'. The defined color can be removed using the reset \
                 argument.\n\
                 For a running game, this command redefines the player color. The change will \
                 be visible in the following turn.\n\
                 To list the player color use 'list colors'.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::EndGame => CommandDescriptor {
            id,
            name: "endgame",
            level: AccessLevel::Admin,
            synopsis: Synopsis::verbatim("endgame"),
            short_help: "End the game immediately in a draw.",
            extra_help: None,
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Surrender => CommandDescriptor {
            id,
            name: "surrender",
            level: AccessLevel::Basic,
            synopsis: Synopsis::verbatim("surrender"),
            short_help: "Concede the game.",
            extra_help: Some(
                "This tells everyone else that you concede the game, and if all but one player \
                 (or one team) have conceded the game in this way then the game ends.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Remove => CommandDescriptor {
            id,
            name: "remove",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("remove <player-name>"),
            short_help: "Fully remove player from game.",
            extra_help: Some(
                "This *completely* removes a player from the game, including all cities and \
                 units etc. Use with care!",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Save => CommandDescriptor {
            id,
            name: "save",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable(
                "save\n\
                 save <file-name>",
            ),
            short_help: "Save game to file.",
            extra_help: Some(
                "Save the current game to file <file-name>. If no file-name argument is given \
                 saves to \"<auto-save name prefix><year>m.sav[.gz]\". To reload a savegame \
                 created by 'save', start the server with the command-line argument:\n    \
                 '--file <filename>' or '-f <filename>'\n\
                 and use the 'start' command once players have reconnected.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Load => CommandDescriptor {
            id,
            name: "load",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable(
                "load\n\
                 load <file-name>",
            ),
            short_help: "Load game from file.",
            extra_help: Some(
                "Load a game from <file-name>. Any current data including players, rulesets \
                 and server options are lost.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Read => CommandDescriptor {
            id,
            name: "read",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("read <file-name>"),
            short_help: "Process server commands from file.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Write => CommandDescriptor {
            id,
            name: "write",
            level: AccessLevel::Hack,
            synopsis: Synopsis::translatable("write <file-name>"),
            short_help: "Write current settings as server commands to file.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Reset => CommandDescriptor {
            id,
            name: "reset",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::verbatim("reset"),
            short_help: "Reset all server settings.",
            extra_help: Some(
                "Reset all settings if it is possible. The following levels are supported:\n  \
                 game     - using the values defined at the game start\n  \
                 ruleset  - using the values defined in the ruleset\n  \
                 script   - using default values and rereading the start script\n  \
                 default  - using default values",
            ),
            echo: EchoPolicy::All,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::Lua => CommandDescriptor {
            id,
            name: "lua",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable("lua <script>"),
            short_help: "Evaluate a line of server script in the current game.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::LuaFile => CommandDescriptor {
            id,
            name: "luafile",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable("luafile <file>"),
            short_help: "Evaluate a server script file in the current game.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Kick => CommandDescriptor {
            id,
            name: "kick",
            level: AccessLevel::Ctrl,
            synopsis: Synopsis::translatable("kick <user>"),
            short_help: "Cut a connection and disallow reconnect.",
            extra_help: Some(
                "The connection given by the 'user' argument will be cut from the server and \
                 not allowed to reconnect. The time the user wouldn't be able to reconnect is \
                 controlled by the 'kicktime' setting.",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NO_PASS_ALONE,
            vote_percent: 50,
        },
        #[cfg(debug_assertions)]
        CommandId::OldSave => CommandDescriptor {
            id,
            name: "oldsave",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable(
                "oldsave\n\
                 oldsave <file-name>",
            ),
            short_help: "Save game to file using the old format.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Delegate => CommandDescriptor {
            id,
            name: "delegate",
            level: AccessLevel::Basic,
            synopsis: Synopsis::translatable(
                "delegate cancel [player-name]\n\
                 delegate restore\n\
                 delegate show <player-name>\n\
                 delegate take <player-name>\n\
                 delegate to <username> [player-name]",
            ),
            short_help: "Delegate control to another user.",
            extra_help: Some(
                "This command can be used to delegate the control over a player. The \
                 [player-name] argument can only be used by connections with the cmdlevel \
                 'admin' or above to force the corresponding change of the delegation status.",
            ),
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::Fcdb => CommandDescriptor {
            id,
            name: "fcdb",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable(
                "fcdb [reload]\n\
                 fcdb [lua] <script>",
            ),
            short_help: "Commands related to the user database support. The argument [reload] \
                         allows a reset of the script file after a change while the argument \
                         [lua] allows to evaluate a line of script in the context of the \
                         database script instance.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::MapImg => CommandDescriptor {
            id,
            name: "mapimg",
            level: AccessLevel::Admin,
            synopsis: Synopsis::translatable(
                "mapimg colortest\n\
                 mapimg create <id>|all\n\
                 mapimg define <mapdef>\n\
                 mapimg delete <id>|all\n\
                 mapimg show <id>|all\n\
                 mapimg help",
            ),
            short_help: "Create image files of the world/player map.",
            extra_help: Some(
                "This command allows the creation of map images. Supported arguments:\n  \
                 colortest        - create a image to showing all colors\n  \
                 create <id>|all  - create a specific or all map images\n  \
                 define <mapdef>  - define a map image\n  \
                 delete <id>|all  - delete a specific or all map images\n  \
                 help             - more information about the definition\n  \
                 show <id>|all    - shown a specific or all map images",
            ),
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 50,
        },
        CommandId::RfcStyle => CommandDescriptor {
            id,
            name: "rfcstyle",
            level: AccessLevel::Hack,
            synopsis: Synopsis::verbatim("rfcstyle"),
            short_help: "Switch server output between 'RFC-style' and normal style.",
            extra_help: None,
            echo: EchoPolicy::Admins,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
        CommandId::ServerId => CommandDescriptor {
            id,
            name: "serverid",
            level: AccessLevel::Info,
            synopsis: Synopsis::verbatim("serverid"),
            short_help: "Simply returns the id of the server.",
            extra_help: None,
            echo: EchoPolicy::None,
            vote_flags: VoteFlags::NONE,
            vote_percent: 0,
        },
    }
}

/// The five AI skill commands share level, echo and vote policy.
fn skill_level_descriptor(
    id: CommandId,
    name: &'static str,
    synopsis: &'static str,
    short_help: &'static str,
    extra_help: &'static str,
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        name,
        level: AccessLevel::Ctrl,
        synopsis: Synopsis::translatable(synopsis),
        short_help,
        extra_help: Some(extra_help),
        echo: EchoPolicy::All,
        vote_flags: VoteFlags::NONE,
        vote_percent: 50,
    }
}
