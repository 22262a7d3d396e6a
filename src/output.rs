//! User-facing console output.
//!
//! Commands print through a [`Console`] resolved once at startup, so the
//! quiet/colour decision is made in one place instead of at every call site.

use colored::{ColoredString, Colorize};
use is_terminal::IsTerminal;
use serde::Serialize;

/// Environment variable that silences non-forced output when truthy.
pub const SILENT_ENV: &str = "CONNMAN_SILENT";
/// Environment variable that toggles coloured output.
pub const COLOUR_ENV: &str = "CONNMAN_COLOUR";

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
    colour: bool,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str) -> Option<bool> {
    parse_flag(&std::env::var(name).ok()?)
}

/// Precedence: an explicit CLI flag beats the matching environment
/// variable, which beats the default (not quiet, coloured).
fn resolve(
    quiet_flag: bool,
    no_colour_flag: bool,
    silent_env: Option<bool>,
    colour_env: Option<bool>,
) -> (bool, bool) {
    let quiet = quiet_flag || silent_env.unwrap_or(false);
    let colour = if no_colour_flag {
        false
    } else {
        colour_env.unwrap_or(true)
    };
    (quiet, colour)
}

impl Console {
    /// Resolve output settings from the global CLI flags, `CONNMAN_SILENT`
    /// and `CONNMAN_COLOUR`. Colour additionally requires stdout to be a
    /// terminal.
    pub fn from_flags(quiet: bool, no_colour: bool) -> Self {
        let (quiet, colour) = resolve(quiet, no_colour, env_flag(SILENT_ENV), env_flag(COLOUR_ENV));
        Self {
            quiet,
            colour: colour && std::io::stdout().is_terminal(),
        }
    }

    pub fn new(quiet: bool, colour: bool) -> Self {
        Self { quiet, colour }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a plain line. `force` bypasses quiet mode and is reserved for
    /// command results that scripts consume.
    pub fn print(&self, text: &str, force: bool) {
        if !self.quiet || force {
            println!("{text}");
        }
    }

    /// Pretty-print a JSON-serialisable value, subject to the same `force`
    /// rule as [`Console::print`].
    pub fn print_json<T: Serialize>(&self, value: &T, force: bool) {
        if self.quiet && !force {
            return;
        }
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(err) => log::error!("Failed to serialise output: {err}"),
        }
    }

    fn stamped(&self, label: &str, text: &str, paint: fn(&str) -> ColoredString) {
        if self.quiet {
            return;
        }
        if self.colour {
            println!("{}\t {}", paint(label).bold(), paint(text));
        } else {
            println!("{label}\t {text}");
        }
    }

    pub fn debug(&self, text: &str) {
        self.stamped("DEBUG", text, |s| s.bright_black());
    }

    pub fn info(&self, text: &str) {
        self.stamped("INFO", text, |s| s.blue());
    }

    pub fn success(&self, text: &str) {
        self.stamped("SUCCESS", text, |s| s.green());
    }

    pub fn warn(&self, text: &str) {
        self.stamped("WARNING", text, |s| s.yellow());
    }

    pub fn error(&self, text: &str) {
        self.stamped("ERROR", text, |s| s.red());
    }
}
