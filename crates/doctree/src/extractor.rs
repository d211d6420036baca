//! Line-grouping recognizer for class and method declarations.
//!
//! This is pattern matching over text lines, not a parser: no syntax tree is
//! built and malformed input is tolerated. A line starting (after horizontal
//! whitespace) with `class ` or `def `, an identifier, an optional
//! parenthesized list and a colon opens a new group; everything up to the
//! next such line belongs to the group. Names, parameter lists and docstrings
//! are then pulled out of each group individually, so partial or broken
//! declarations degrade to empty fields instead of failing extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ExtractorConfig;
use crate::entities::{Class, Entity, Method};
use crate::trim;

static CLASS_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\S\n]*class \w+(\(.*\))?:").unwrap());

static DEF_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\S\n]*def \w+(\(.*\))?:").unwrap());

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*\)").unwrap());

static NAME_AND_PARAMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\((.*)\)").unwrap());

static DOCSTRING_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)"""(.*?)""""#).unwrap());

/// Declaration marker that opens a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Class,
    Def,
}

impl Marker {
    fn text(self) -> &'static str {
        match self {
            Marker::Class => "class ",
            Marker::Def => "def ",
        }
    }

    fn boundary(self) -> &'static Regex {
        match self {
            Marker::Class => &CLASS_BOUNDARY,
            Marker::Def => &DEF_BOUNDARY,
        }
    }
}

/// Extracts classes and methods from a sequence of source lines
///
/// Lines may keep or omit their trailing newlines; both are handled
/// uniformly. Extraction itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor with the given retention policy
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get the retention policy
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract method entities from lines
    ///
    /// A method is kept iff its name is non-empty, it passes the visibility
    /// policy, and it passes the empty-docstring policy.
    pub fn methods(&self, lines: &[String]) -> Vec<Method> {
        let mut result = Vec::new();
        for group in split_groups(lines, Marker::Def) {
            let signature = group_title(group, Marker::Def);
            let (name, raw_parameters) = split_title(&signature);
            let parameters = split_parameters(&raw_parameters);
            let docstring = docstring_of(group);
            let method = Method::new(name, parameters, docstring);
            if !method.name.is_empty()
                && (method.is_public() || self.config.include_nonpublic)
                && (!method.docstring.is_empty() || self.config.include_undocumented)
            {
                result.push(method);
            }
        }
        result
    }

    /// Extract class entities from lines
    ///
    /// Lines before the first class declaration form a synthetic class with
    /// an empty name holding the module's top-level methods. Classes are
    /// filtered on visibility only, never on their docstring.
    pub fn classes(&self, lines: &[String]) -> Vec<Class> {
        let mut result = Vec::new();
        for group in split_groups(lines, Marker::Class) {
            let signature = group_title(group, Marker::Class);
            let (name, parent) = split_title(&signature);
            let docstring = docstring_of(group);
            let methods = self.methods(group);
            let class = Class::new(name, parent, docstring, methods);
            if class.is_public() || self.config.include_nonpublic {
                result.push(class);
            }
        }
        result
    }

    /// First docstring of the whole text, trimmed; empty if absent
    ///
    /// Used for package marker files, whose module-level docstring documents
    /// the enclosing package.
    pub fn module_docstring(&self, lines: &[String]) -> String {
        docstring_of(lines)
    }
}

/// Split lines into groups opened by declaration-marker lines
///
/// Lines before the first boundary form an initial, untitled group. Groups
/// are contiguous slices of the input, so splitting is a pure function of
/// the lines.
fn split_groups(lines: &[String], marker: Marker) -> Vec<&[String]> {
    let mut groups = Vec::new();
    if lines.is_empty() {
        return groups;
    }
    let mut start = 0usize;
    for (index, line) in lines.iter().enumerate() {
        if index > 0 && marker.boundary().is_match(line) {
            groups.push(&lines[start..index]);
            start = index;
        }
    }
    groups.push(&lines[start..]);
    groups
}

/// Title of a group: the first line between the marker and the trailing colon
fn group_title(group: &[String], marker: Marker) -> String {
    let Some(first) = group.first() else {
        return String::new();
    };
    let title_line = first.trim_end();
    match first.find(marker.text()) {
        Some(index) => {
            let start = index + marker.text().len();
            let end = title_line.len().saturating_sub(1);
            title_line.get(start..end).unwrap_or("").to_string()
        }
        None => String::new(),
    }
}

/// Split a title into entity name and raw parameter string
///
/// A parenthesized title that does not have the `name(parameters)` shape
/// degrades to empty name and parameters rather than failing.
fn split_title(title: &str) -> (String, String) {
    if title.is_empty() {
        return (String::new(), String::new());
    }
    if PARENTHESIZED.is_match(title) {
        match NAME_AND_PARAMS.captures(title) {
            Some(caps) => (caps[1].to_string(), caps[2].to_string()),
            None => (String::new(), String::new()),
        }
    } else {
        (title.to_string(), String::new())
    }
}

/// Split a raw parameter string on `", "` and trim each piece
fn split_parameters(parameters: &str) -> Vec<String> {
    if parameters.is_empty() {
        return Vec::new();
    }
    parameters
        .split(", ")
        .map(|parameter| parameter.trim().to_string())
        .collect()
}

/// First triple-quoted span of a group, trimmed; empty if absent
///
/// A second docstring in the same group is ignored.
fn docstring_of(group: &[String]) -> String {
    let text = join_lines(group);
    match DOCSTRING_SPAN.captures(&text) {
        Some(caps) => trim::trim(caps.get(1).map_or("", |m| m.as_str())),
        None => String::new(),
    }
}

/// Join lines with single newlines, normalizing any trailing line endings
fn join_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let line = line.strip_suffix('\n').unwrap_or(line);
            line.strip_suffix('\r').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
