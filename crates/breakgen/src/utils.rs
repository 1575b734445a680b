use similar::{ChangeTag, TextDiff};
use std::fmt::{self, Write};
use tracing_subscriber::EnvFilter;
use yansi::{Color, Paint, Style};

/// Initializes a tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise the verbosity flags pick the
/// default level. Logs go to stderr so stdout stays machine-consumable
/// in dry-run mode.
pub fn subscriber(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

struct Line(Option<usize>);

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("    "),
            Some(idx) => write!(f, "{:<4}", idx + 1),
        }
    }
}

/// Renders a compact colored summary of `diff` for check mode.
pub fn format_diff_summary<'a>(name: &str, diff: &'a TextDiff<'a, 'a, '_, str>) -> String {
    let mut summary = String::with_capacity(128);
    let _ = writeln!(summary, "Diff in {name}:");

    for (i, group) in diff.grouped_ops(3).into_iter().enumerate() {
        if i > 0 {
            let _ = writeln!(summary, "{}", "-".repeat(80));
        }
        for op in group {
            for change in diff.iter_changes(&op) {
                let dimmed = Style::new().dim();
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", Color::Red.foreground()),
                    ChangeTag::Insert => ("+", Color::Green.foreground()),
                    ChangeTag::Equal => (" ", dimmed),
                };
                let _ = write!(
                    summary,
                    "{}{} |{} {}",
                    Line(change.old_index()).paint(dimmed),
                    Line(change.new_index()).paint(dimmed),
                    sign.paint(style.bold()),
                    change.value().trim_end().paint(style),
                );
                summary.push('\n');
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_summary_marks_changed_lines() {
        let diff = TextDiff::from_lines("a\nb\nc\n", "a\nx\nc\n");
        let summary = format_diff_summary("table.rs", &diff);
        assert!(summary.starts_with("Diff in table.rs:"));
        assert!(summary.contains('b'));
        assert!(summary.contains('x'));
    }
}
