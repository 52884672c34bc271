//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors, failed secrets
//! - Yellow: warnings
//! - Cyan: repositories, secret names, hints
//! - Bold: headers
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

const RULE_WIDTH: usize = 56;
const LABEL_WIDTH: usize = 12;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Line prefix marks.
#[derive(Clone, Copy)]
enum Mark {
    Success,
    Failure,
    Warning,
    Hint,
}

impl Mark {
    fn symbol(self) -> &'static str {
        match self {
            Mark::Success => "✓",
            Mark::Failure => "✗",
            Mark::Warning => "⚠",
            Mark::Hint => "→",
        }
    }

    fn render(self, msg: &str) -> String {
        if !colors_enabled() {
            return format!("{} {}", self.symbol(), msg);
        }
        let symbol = style(self.symbol());
        match self {
            Mark::Success => format!("{} {}", symbol.green(), msg),
            Mark::Failure => format!("{} {}", symbol.red(), msg),
            Mark::Warning => format!("{} {}", symbol.yellow(), msg),
            Mark::Hint => format!("{} {}", symbol.cyan(), style(msg).cyan()),
        }
    }
}

/// Print a success line with checkmark (green).
///
/// Example: `✓ acme/svc API_KEY (201)`
pub fn success(msg: &str) {
    println!("{}", Mark::Success.render(msg));
}

/// Print a fatal error to stderr (red).
///
/// Example: `✗ config file not found: assets/actor.json`
pub fn error(msg: &str) {
    eprintln!("{}", Mark::Failure.render(msg));
}

/// Print a failed report line to stdout (red).
pub fn failure(msg: &str) {
    println!("{}", Mark::Failure.render(msg));
}

/// Print a warning (yellow).
pub fn warn(msg: &str) {
    println!("{}", Mark::Warning.render(msg));
}

/// Print a hint to stderr (cyan), shown under errors.
///
/// Example: `→ pass --assets <dir> or create ./assets`
pub fn hint(msg: &str) {
    eprintln!("{}", Mark::Hint.render(msg));
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold), labels aligned.
///
/// Example: `  repositories  3`
pub fn kv(label: &str, value: impl Display) {
    println!("{}", format_kv(label, value, colors_enabled()));
}

fn format_kv(label: &str, value: impl Display, colored: bool) -> String {
    let label = format!("{:<width$}", label, width = LABEL_WIDTH);
    if colored {
        format!("  {}  {}", style(label).dim(), style(value).bold())
    } else {
        format!("  {}  {}", label, value)
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Format a repository or secret name in cyan.
pub fn name(n: impl Display) -> String {
    if colors_enabled() {
        style(n).cyan().to_string()
    } else {
        n.to_string()
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}
