//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for breadcrumb trails.

use crate::models::{BreadcrumbEntry, EntryKind, Trail};

// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const UNDERLINE: &str = "\x1b[4m";

const CYAN: &str = "\x1b[36m";
const BRIGHT_WHITE: &str = "\x1b[97m";
const BRIGHT_YELLOW: &str = "\x1b[93m";

/// Get color for an entry kind
fn entry_color(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Link => CYAN,
        EntryKind::Current => BRIGHT_WHITE,
        EntryKind::Plain => DIM,
    }
}

/// Format a single entry
fn format_entry_ansi(entry: &BreadcrumbEntry) -> String {
    let kind = entry.kind();
    let color = entry_color(kind);
    match kind {
        EntryKind::Link => format!("{}{}{}{}", color, UNDERLINE, entry.text, RESET),
        EntryKind::Current => format!("{}{}{}{}", BOLD, color, entry.text, RESET),
        EntryKind::Plain => format!("{}{}{}", color, entry.text, RESET),
    }
}

/// Format breadcrumb trail as ANSI
pub fn format_trail_ansi(trail: &Trail) -> String {
    let mut output = String::new();

    let view = trail.view.map(|v| v.label()).unwrap_or("unmatched");
    output.push_str(&format!("{}{}[{}]{} ", BOLD, BRIGHT_YELLOW, view, RESET));

    let separator = format!("{}{}{}", DIM, trail.separator, RESET);
    output.push_str(
        &trail
            .entries
            .iter()
            .map(format_entry_ansi)
            .collect::<Vec<_>>()
            .join(&separator),
    );

    // Link targets, one per line
    for entry in trail.entries.iter().filter(|e| e.kind() == EntryKind::Link) {
        output.push_str(&format!(
            "\n  {}{}{} {}→ {}{}",
            CYAN,
            entry.text,
            RESET,
            DIM,
            entry.url.as_deref().unwrap_or_default(),
            RESET
        ));
    }

    output
}
