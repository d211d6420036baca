//! Docstring whitespace normalization.
//!
//! Follows the PEP-257 trimming convention: tabs expand to 8-column stops,
//! the minimal indentation shared by every line after the first is removed,
//! and blank lines at both ends are dropped.

/// Normalize a raw docstring
///
/// The first line is stripped on both sides; every following line loses the
/// minimal common indentation (computed over non-blank lines only) and its
/// trailing whitespace. Leading and trailing blank lines are removed. An
/// empty or whitespace-only input yields the empty string.
pub fn trim(docstring: &str) -> String {
    if docstring.is_empty() {
        return String::new();
    }

    let expanded = expand_tabs(docstring);
    let lines: Vec<&str> = expanded
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // Minimum indentation; the first line does not count
    let indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.chars().count() - line.trim_start().chars().count())
        .min();

    let mut trimmed = vec![lines[0].trim().to_string()];
    if let Some(indent) = indent {
        for line in &lines[1..] {
            let rest: String = line.chars().skip(indent).collect();
            trimmed.push(rest.trim_end().to_string());
        }
    }

    // Strip trailing and leading blank lines
    while trimmed.last().is_some_and(|line| line.is_empty()) {
        trimmed.pop();
    }
    while trimmed.first().is_some_and(|line| line.is_empty()) {
        trimmed.remove(0);
    }

    trimmed.join("\n")
}

/// Expand tab characters to the next multiple-of-8 column
fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let width = 8 - column % 8;
                for _ in 0..width {
                    out.push(' ');
                }
                column += width;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
