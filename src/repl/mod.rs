//! # REPL Adapter
//!
//! The terminal-specific layer. Prints the prompt, reads one line at a
//! time, turns it into a `core::action::Action`, and writes whatever
//! `update()` replies.
//!
//! This is the only module that touches stdin and stdout. The loop itself
//! is generic over `BufRead`/`Write` so tests can drive a whole session
//! from memory.
//!
//! ## End of input
//!
//! Closing stdin (Ctrl+D, or the end of piped input) ends the session the
//! same way the exit sentinel does. A newline is written first so the
//! farewell does not share a line with the dangling prompt.

mod event;

pub use event::{ReplEvent, read_event};

use log::{info, warn};
use std::io::{self, BufRead, Write};

use crate::core::action::{Action, BANNER, Effect, FAREWELL, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// Run an interactive session on the process's stdin and stdout.
pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut app, stdin.lock(), stdout.lock())
}

/// Drive `app` until it stops running, reading from `input` and writing
/// every prompt and reply to `output`.
pub fn run_session(app: &mut App, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    if app.show_banner {
        writeln!(output, "{BANNER}")?;
    }

    while app.running {
        write!(output, "{}", app.prompt)?;
        output.flush()?;

        let action = match read_event(&mut input)? {
            ReplEvent::Line(line) => Action::classify(&line),
            ReplEvent::Eof => {
                warn!("Input closed without exit sentinel, exiting");
                writeln!(output)?;
                Action::EndOfInput
            }
        };

        match update(app, action) {
            Effect::Reply(text) => writeln!(output, "{text}")?,
            Effect::Quit => {}
        }
    }

    for line in FAREWELL {
        writeln!(output, "{line}")?;
    }
    output.flush()?;

    let stats = app.stats;
    info!(
        "Session finished: {} lines ({} help, {} encoded, {} decoded, {} invalid)",
        stats.total(),
        stats.help,
        stats.encoded,
        stats.decoded,
        stats.invalid
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_support::{test_app, transcript};

    #[test]
    fn test_exit_immediately() {
        assert_eq!(
            transcript(&mut test_app(), "0\n"),
            "Morse Code Program!!\n> Good Bye\nMorse Code Program Finished!!\n"
        );
    }

    #[test]
    fn test_reply_then_exit() {
        let mut app = test_app();
        app.show_banner = false;
        assert_eq!(
            transcript(&mut app, "sos\n0\n"),
            "> ... --- ...\n> Good Bye\nMorse Code Program Finished!!\n"
        );
        assert_eq!(app.stats.encoded, 1);
        assert!(!app.running);
    }

    #[test]
    fn test_eof_ends_session_on_fresh_line() {
        let mut app = test_app();
        app.show_banner = false;
        assert_eq!(
            transcript(&mut app, "... --- ..."),
            "> SOS\n> \nGood Bye\nMorse Code Program Finished!!\n"
        );
    }

    #[test]
    fn test_lines_after_exit_are_not_read() {
        let mut app = test_app();
        app.show_banner = false;
        let out = transcript(&mut app, "0\nsos\n");
        assert!(!out.contains("..."));
        assert_eq!(app.stats.total(), 0);
    }
}
