//! Unified diff between the input and the filtered text.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a line-level diff of `original` against `filtered`.
/// Removed lines are red and added lines green when `supports_color` is set.
pub fn print_diff<W: Write>(original: &str, filtered: &str, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let patch = create_patch(original, filtered);
    let header = "--- Diff View ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changed = true;
                    let text = format!("-{}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", text.red())?;
                    } else {
                        writeln!(writer, "{}", text)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let text = format!("+{}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", text.green())?;
                    } else {
                        writeln!(writer, "{}", text)?;
                    }
                }
                DiffLine::Context(s) => writeln!(writer, " {}", s.trim_end_matches('\n'))?,
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_removed_and_added_lines() {
        let mut out = Vec::new();
        print_diff("keep\noh crap\n", "keep\noh ****\n", &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("-oh crap"));
        assert!(text.contains("+oh ****"));
        assert!(text.contains(" keep"));
    }

    #[test]
    fn identical_text_reports_no_changes() {
        let mut out = Vec::new();
        print_diff("same\n", "same\n", &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No changes."));
    }
}
