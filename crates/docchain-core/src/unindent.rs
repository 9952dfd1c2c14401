//! Indentation normalization for documentation text.
//!
//! Documentation written inside an indented definition carries the
//! definition's indentation on every line but the first. Blocks are
//! normalized before they are compared or joined so concatenated text
//! does not come out jagged.

use regex::Regex;
use std::sync::LazyLock;

static RE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*").unwrap());

/// Width of the leading run of spaces and tabs (one column each).
fn indent_width(line: &str) -> usize {
    RE_INDENT.find(line).map_or(0, |m| m.end())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Remove the common indentation of `text`.
///
/// - the first line loses all of its leading whitespace
/// - every non-blank line after the first loses the smallest indentation
///   found among those lines
/// - whitespace-only lines become empty
/// - leading and trailing blank lines are dropped
pub fn unindent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|l| !is_blank(l))
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    let mut out: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if is_blank(line) {
                ""
            } else if i == 0 {
                line.trim_start()
            } else {
                &line[margin..]
            }
        })
        .collect();

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    let start = out.iter().position(|l| !l.is_empty()).unwrap_or(out.len());

    out[start..].join("\n")
}
