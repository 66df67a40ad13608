//! Line ingress shared by the stdin loop and unit tests.

use std::io::{BufRead, Write};

use crate::app::ConsoleApp;
use scmd_common::error::{ConsoleError, ConsoleResult};
use scmd_core::command::ConsoleReply;
use scmd_gate::gate::Caller;
use tracing::warn;

/// Feeds every line of `input` through the console and writes one reply per command.
///
/// Blank lines and `#` comments are skipped. Lines that are not valid UTF-8 get an error reply
/// and do not stop the loop. Processing ends at end of input or after an accepted `quit`.
/// Returns the number of commands handled.
///
/// # Errors
///
/// Returns `ConsoleError::Io` when reading input or writing a reply fails.
pub(crate) fn serve_lines(
    app: &ConsoleApp,
    caller: Caller,
    mut input: impl BufRead,
    mut output: impl Write,
) -> ConsoleResult<usize> {
    let mut buffer = Vec::new();
    let mut handled = 0;
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buffer) {
            Ok(line) => line,
            Err(error) => {
                let error = ConsoleError::Protocol(format!("input line is not UTF-8: {error}"));
                warn!(%error, "skipping console line");
                writeln!(output, "{}", ConsoleReply::Error(error.to_string()).to_console_text())?;
                continue;
            }
        };
        if line.trim_start().starts_with('#') {
            continue;
        }
        let Some(outcome) = app.handle_line(caller, line) else {
            continue;
        };

        handled += 1;
        writeln!(output, "{}", outcome.reply.to_console_text())?;
        if outcome.shutdown {
            break;
        }
    }
    output.flush()?;
    Ok(handled)
}
