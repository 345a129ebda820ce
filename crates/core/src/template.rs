//! printf-style entry templates
//!
//! Templates use `%s` for the next positional argument, `%N$s` for an
//! explicit position (1-indexed) and `%%` for a literal percent sign.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:(\d+)\$)?s|%%").unwrap());

/// Substitute arguments into a template. Missing arguments become empty.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut next = 0;
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if &caps[0] == "%%" {
                return "%".to_string();
            }
            let index = match caps.get(1) {
                Some(pos) => pos.as_str().parse::<usize>().unwrap_or(0).wrapping_sub(1),
                None => {
                    next += 1;
                    next - 1
                }
            };
            args.get(index).copied().unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Escape text for use in html content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
