//! Decorated status lines for the diagnostic stream
//!
//! Formatting takes the message and a [`StatusStyle`] and colors the tag
//! per call only when the style asks for it; the [`Reporter`] only decides whether a line is shown for the current
//! [`Verbosity`] and where it goes.

use colored::{ColoredString, Colorize};
use std::io::Write;

/// Kind of status line, each with its own tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
    Process,
}

impl StatusKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success => "[ + ]",
            Self::Error => "[ ! ]",
            Self::Info => "[ - ]",
            Self::Process => "[ * ]",
        }
    }

    fn painted_tag(&self) -> ColoredString {
        match self {
            Self::Success => self.tag().bright_green(),
            Self::Error => self.tag().bright_red(),
            Self::Info | Self::Process => self.tag().bright_blue(),
        }
    }
}

/// Whether ANSI color codes are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub color: bool,
}

impl StatusStyle {
    pub const PLAIN: Self = Self { color: false };
    pub const COLORED: Self = Self { color: true };

    /// Color only when not disabled by flag or `NO_COLOR` and stderr is a terminal
    pub fn resolve(no_color_flag: bool, no_color_env: Option<&str>, stderr_is_terminal: bool) -> Self {
        let env_disables = no_color_env.is_some_and(|v| !v.is_empty());
        Self {
            color: !no_color_flag && !env_disables && stderr_is_terminal,
        }
    }

    /// Resolve against the real process environment
    pub fn detect(no_color_flag: bool) -> Self {
        use std::io::IsTerminal;
        let env = std::env::var("NO_COLOR").ok();
        Self::resolve(no_color_flag, env.as_deref(), std::io::stderr().is_terminal())
    }
}

/// Render one status line (without trailing newline)
pub fn format_status(kind: StatusKind, message: &str, style: StatusStyle) -> String {
    if style.color {
        format!("{} {}", kind.painted_tag(), message)
    } else {
        format!("{} {}", kind.tag(), message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// `--quiet` wins over `--verbose`
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    pub fn shows(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Error => true,
            StatusKind::Success | StatusKind::Process => *self != Self::Quiet,
            StatusKind::Info => *self == Self::Verbose,
        }
    }
}

/// Writes status lines to a diagnostic stream
pub struct Reporter<W: Write> {
    out: W,
    style: StatusStyle,
    verbosity: Verbosity,
}

impl Reporter<std::io::Stderr> {
    pub fn stderr(style: StatusStyle, verbosity: Verbosity) -> Self {
        Self::new(std::io::stderr(), style, verbosity)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, style: StatusStyle, verbosity: Verbosity) -> Self {
        Self {
            out,
            style,
            verbosity,
        }
    }

    pub fn emit(&mut self, kind: StatusKind, message: &str) {
        if !self.verbosity.shows(kind) {
            return;
        }
        // A closed stderr must never abort the run
        let _ = writeln!(self.out, "{}", format_status(kind, message, self.style));
    }

    pub fn success(&mut self, message: &str) {
        self.emit(StatusKind::Success, message);
    }

    pub fn error(&mut self, message: &str) {
        self.emit(StatusKind::Error, message);
    }

    pub fn info(&mut self, message: &str) {
        self.emit(StatusKind::Info, message);
    }

    pub fn process(&mut self, message: &str) {
        self.emit(StatusKind::Process, message);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatting() {
        assert_eq!(
            format_status(StatusKind::Success, "done", StatusStyle::PLAIN),
            "[ + ] done"
        );
        assert_eq!(
            format_status(StatusKind::Error, "oops", StatusStyle::PLAIN),
            "[ ! ] oops"
        );
        assert_eq!(
            format_status(StatusKind::Info, "note", StatusStyle::PLAIN),
            "[ - ] note"
        );
        assert_eq!(
            format_status(StatusKind::Process, "work", StatusStyle::PLAIN),
            "[ * ] work"
        );
    }

    #[test]
    fn test_colored_formatting() {
        // colored also consults the environment; force it on for this check
        colored::control::set_override(true);
        assert_eq!(
            format_status(StatusKind::Success, "done", StatusStyle::COLORED),
            "\x1b[92m[ + ]\x1b[0m done"
        );
        assert_eq!(
            format_status(StatusKind::Error, "oops", StatusStyle::COLORED),
            "\x1b[91m[ ! ]\x1b[0m oops"
        );
    }

    #[test]
    fn test_style_resolution() {
        assert!(StatusStyle::resolve(false, None, true).color);
        assert!(!StatusStyle::resolve(true, None, true).color);
        assert!(!StatusStyle::resolve(false, None, false).color);
        assert!(!StatusStyle::resolve(false, Some("1"), true).color);
        // Empty NO_COLOR does not disable color
        assert!(StatusStyle::resolve(false, Some(""), true).color);
    }

    #[test]
    fn test_verbosity_filtering() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);

        let quiet = Verbosity::Quiet;
        assert!(quiet.shows(StatusKind::Error));
        assert!(!quiet.shows(StatusKind::Success));
        assert!(!quiet.shows(StatusKind::Info));

        assert!(Verbosity::Normal.shows(StatusKind::Process));
        assert!(!Verbosity::Normal.shows(StatusKind::Info));
        assert!(Verbosity::Verbose.shows(StatusKind::Info));
    }

    #[test]
    fn test_reporter_writes_lines() {
        let mut reporter = Reporter::new(Vec::new(), StatusStyle::PLAIN, Verbosity::Normal);
        reporter.process("Encoding ROT13...");
        reporter.info("hidden");
        reporter.success("Encoded 3 characters");
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "[ * ] Encoding ROT13...\n[ + ] Encoded 3 characters\n");
    }

    #[test]
    fn test_quiet_reporter_still_reports_errors() {
        let mut reporter = Reporter::new(Vec::new(), StatusStyle::PLAIN, Verbosity::Quiet);
        reporter.success("hidden");
        reporter.error("File not found: x");
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "[ ! ] File not found: x\n");
    }
}
