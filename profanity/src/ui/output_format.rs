//! Coloured status messages for stderr.
//!
//! Colour is only emitted when the caller says the stream supports it, so piped output
//! stays plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
}

impl MessageKind {
    fn label(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Warn => "warning",
            MessageKind::Error => "error",
        }
    }
}

pub fn print_message<W: Write>(writer: &mut W, kind: MessageKind, msg: &str, supports_color: bool) -> io::Result<()> {
    let label = kind.label();
    if !supports_color {
        return writeln!(writer, "{}: {}", label, msg);
    }
    match kind {
        MessageKind::Info => writeln!(writer, "{}: {}", label.cyan(), msg),
        MessageKind::Warn => writeln!(writer, "{}: {}", label.yellow().bold(), msg),
        MessageKind::Error => writeln!(writer, "{}: {}", label.red().bold(), msg),
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Info, msg, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Warn, msg, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Error, msg, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "warning: careful\n");
    }

    #[test]
    fn coloured_output_keeps_the_message() {
        let mut out = Vec::new();
        print_error_message(&mut out, "broken", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with("broken\n"));
    }
}
