//! Help text rendering for `help <command>` and `help commands`.
//!
//! Rendering is pure: descriptor data plus a localizer in, display text out.

use scmd_common::access::AccessLevel;

use crate::localize::Localize;
use crate::registry::{CommandDescriptor, CommandRegistry};

/// Column limit for wrapped help text.
pub const HELP_WRAP_COLUMNS: usize = 76;

const DESCRIPTION_INDENT: usize = 2;
const LIST_COLUMN_GAP: usize = 2;

/// Renders the full help block of one command.
///
/// ```text
/// Command: kick  -  Cut a connection and disallow reconnect.
/// Synopsis: kick <user>
/// Level: ctrl
/// Description:
///   The connection given by the 'user' argument will be cut ...
/// ```
///
/// Continuation lines of a multi-line synopsis are aligned under its first line. The
/// description section is left out for commands without extra help.
#[must_use]
pub fn render_command_help(descriptor: &CommandDescriptor, localize: &impl Localize) -> String {
    let mut lines = vec![format!(
        "{} {}  -  {}",
        localize.localize("Command:"),
        descriptor.name(),
        descriptor.short_help_text(localize)
    )];

    let synopsis_label = localize.localize("Synopsis:");
    let continuation = " ".repeat(synopsis_label.chars().count() + 1);
    for (position, line) in descriptor.synopsis_text(localize).lines().enumerate() {
        if position == 0 {
            lines.push(format!("{synopsis_label} {line}"));
        } else {
            lines.push(format!("{continuation}{line}"));
        }
    }

    lines.push(format!(
        "{} {}",
        localize.localize("Level:"),
        descriptor.required_level()
    ));

    if let Some(extra_help) = descriptor.extra_help_text(localize) {
        lines.push(localize.localize("Description:"));
        lines.extend(wrap_text(&extra_help, HELP_WRAP_COLUMNS, DESCRIPTION_INDENT));
    }
    lines.join("\n")
}

/// Renders the names of every command `level` may run directly, in columns.
#[must_use]
pub fn render_command_list(
    registry: &CommandRegistry,
    level: AccessLevel,
    localize: &impl Localize,
) -> String {
    let names = registry
        .commands_for_level(level)
        .map(CommandDescriptor::name)
        .collect::<Vec<_>>();
    if names.is_empty() {
        return localize.localize("No server commands are available at your access level.");
    }

    let column_width = names
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or_default()
        + LIST_COLUMN_GAP;
    let columns = (HELP_WRAP_COLUMNS / column_width).max(1);

    let mut lines = vec![localize.localize("The following server commands are available:")];
    for row in names.chunks(columns) {
        let line = row
            .iter()
            .map(|name| format!("{name:<column_width$}"))
            .collect::<String>();
        lines.push(line.trim_end().to_owned());
    }
    lines.join("\n")
}

/// Greedy word wrap that keeps explicit line breaks.
///
/// Lines that already fit are kept verbatim, so aligned tables inside help text survive.
/// Longer lines are re-flowed; continuation lines keep the original line's leading spaces.
#[must_use]
pub fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    for line in text.lines() {
        let body = line.trim_start();
        if body.is_empty() {
            wrapped.push(String::new());
            continue;
        }
        let prefix = " ".repeat(indent + line.len() - body.len());
        if prefix.len() + body.chars().count() <= width {
            wrapped.push(format!("{prefix}{}", body.trim_end()));
            continue;
        }

        let mut current = prefix.clone();
        let mut current_width = prefix.len();
        let mut has_word = false;
        for word in body.split_whitespace() {
            let word_width = word.chars().count();
            if has_word && current_width + 1 + word_width > width {
                wrapped.push(std::mem::replace(&mut current, prefix.clone()));
                current_width = prefix.len();
                has_word = false;
            }
            if has_word {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            has_word = true;
        }
        wrapped.push(current);
    }
    wrapped
}
