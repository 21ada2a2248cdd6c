//! Google-style section merging.
//!
//! A Google section is a `Header:` line at column zero with an indented
//! body:
//!
//! ```text
//! Args:
//!     x (int): The first operand.
//! ```

use super::sections::{self, nonblank, Docstring, Section, SectionPolicy};

/// Canonical Google section order for rendered output.
pub(crate) static GOOGLE_SECTIONS: &[&str] = &[
    "Args",
    "Arguments",
    "Attributes",
    "Returns",
    "Yields",
    "Raises",
    "Warns",
    "Note",
    "Notes",
    "Example",
    "Examples",
    "References",
    "See Also",
    "Todo",
];

/// The `"google"` style: section-wise merge, child sections replace parent's.
///
/// Sections the child lacks are inherited from the parent; the child's
/// summary wins when present. A side with no docstring passes the other
/// through unchanged.
pub fn google(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    merge_google(parent, child, SectionPolicy::Replace)
}

/// The `"google-merge"` style: like [`google`], but a section present on
/// both sides keeps the parent's body with the child's appended below it.
pub fn google_merge(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    merge_google(parent, child, SectionPolicy::Append)
}

fn merge_google(
    parent: Option<&str>,
    child: Option<&str>,
    policy: SectionPolicy,
) -> Option<String> {
    match (nonblank(parent), nonblank(child)) {
        (None, None) => None,
        (Some(p), None) => Some(p.to_string()),
        (None, Some(c)) => Some(c.to_string()),
        (Some(p), Some(c)) => render(&sections::merge(
            &parse(p),
            &parse(c),
            GOOGLE_SECTIONS,
            policy,
        )),
    }
}

/// Returns the section name if the line is a `Header:` line.
///
/// Headers sit at column zero, end with a colon, and are made of
/// title-cased words (`Args:`, `See Also:`).
fn header_name(line: &str) -> Option<&str> {
    if line.starts_with(' ') || line.starts_with('\t') {
        return None;
    }
    let name = line.trim_end().strip_suffix(':')?;
    let first = name.chars().next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return None;
    }
    Some(name)
}

/// Splits a docstring at `Header:` lines.
pub(crate) fn parse(text: &str) -> Docstring {
    let lines: Vec<&str> = text.lines().collect();

    let headers: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .filter_map(|(at, line)| header_name(line).map(|name| (at, name)))
        .collect();

    let summary_end = headers.first().map_or(lines.len(), |&(at, _)| at);
    let summary = sections::block(&lines[..summary_end]);

    let mut parsed = Vec::with_capacity(headers.len());
    for (h, &(start, name)) in headers.iter().enumerate() {
        let end = headers.get(h + 1).map_or(lines.len(), |&(at, _)| at);
        let body = sections::block(&lines[start + 1..end]).unwrap_or_default();
        parsed.push(Section {
            name: name.to_string(),
            body,
        });
    }

    Docstring {
        summary,
        sections: parsed,
    }
}

/// Renders a docstring back to Google form.
pub(crate) fn render(doc: &Docstring) -> Option<String> {
    let mut blocks = Vec::with_capacity(doc.sections.len() + 1);
    if let Some(summary) = &doc.summary {
        blocks.push(summary.clone());
    }
    for section in &doc.sections {
        if section.body.is_empty() {
            blocks.push(format!("{}:", section.name));
        } else {
            blocks.push(format!("{}:\n{}", section.name, section.body));
        }
    }
    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}
