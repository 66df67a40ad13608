//! Canonical console line and reply types.

/// One typed console line split into command name and argument rest.
///
/// Only `name` takes part in lookup and authorization; `rest` is handed to the command's
/// implementation untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Command name or unique prefix as typed.
    pub name: String,
    /// Everything after the name, with surrounding whitespace removed.
    pub rest: String,
}

impl CommandLine {
    /// Creates a command line from an already separated name and rest.
    #[must_use]
    pub fn new(name: impl Into<String>, rest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: rest.into(),
        }
    }

    /// Splits a raw line at the first whitespace run.
    ///
    /// A single leading `/` (chat-line command marker) is dropped. Returns `None` for lines that
    /// contain nothing but whitespace and the marker.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed).trim_start();
        if trimmed.is_empty() {
            return None;
        }
        let (name, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        Some(Self::new(name, rest.trim()))
    }
}

/// Canonical console reply.
///
/// The enum stays presentation-neutral; rendering to the line-oriented console happens at the
/// server boundary through `to_console_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleReply {
    /// Multi-line informational output such as help text.
    Info(String),
    /// Command accepted for immediate execution.
    Accepted(String),
    /// Command turned into a vote.
    VoteOpened(String),
    /// Command rejected.
    Error(String),
}

impl ConsoleReply {
    /// Renders the reply as console text.
    #[must_use]
    pub fn to_console_text(&self) -> String {
        match self {
            Self::Info(text) => text.clone(),
            Self::Accepted(text) => format!("OK {text}"),
            Self::VoteOpened(text) => format!("VOTE {text}"),
            Self::Error(message) => format!("ERR {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandLine, ConsoleReply};
    use googletest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("kick alice", "kick", "alice")]
    #[case("/set timeout   60 ", "set", "timeout   60")]
    #[case("  start", "start", "")]
    #[case("/ vote yes 3", "vote", "yes 3")]
    fn parse_splits_name_from_rest(#[case] line: &str, #[case] name: &str, #[case] rest: &str) {
        let parsed = CommandLine::parse(line).expect("line has a command name");
        assert_that!(&parsed, eq(&CommandLine::new(name, rest)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("/")]
    fn parse_rejects_blank_lines(#[case] line: &str) {
        assert_that!(&CommandLine::parse(line), eq(&None));
    }

    #[rstest]
    fn console_text_prefixes_status() {
        assert_that!(
            ConsoleReply::Accepted("start".to_owned()).to_console_text(),
            eq("OK start")
        );
        assert_that!(
            ConsoleReply::Error("unknown command 'x'".to_owned()).to_console_text(),
            eq("ERR unknown command 'x'")
        );
        assert_that!(
            ConsoleReply::Info("line one\nline two".to_owned()).to_console_text(),
            eq("line one\nline two")
        );
    }
}
