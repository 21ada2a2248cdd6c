//! NumPy-style section merging.
//!
//! A NumPy section is a header line underlined with dashes of the same
//! length:
//!
//! ```text
//! Parameters
//! ----------
//! x : int
//!     The first operand.
//! ```

use super::sections::{self, nonblank, Docstring, Section, SectionPolicy};

/// Canonical NumPy section order for rendered output.
pub(crate) static NUMPY_SECTIONS: &[&str] = &[
    "Parameters",
    "Other Parameters",
    "Attributes",
    "Methods",
    "Returns",
    "Yields",
    "Receives",
    "Raises",
    "Warns",
    "Warnings",
    "See Also",
    "Notes",
    "References",
    "Examples",
];

/// The `"numpy"` style: section-wise merge, child sections replace parent's.
///
/// Sections the child lacks are inherited from the parent; the child's
/// summary wins when present. A side with no docstring passes the other
/// through unchanged.
pub fn numpy(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    merge_numpy(parent, child, SectionPolicy::Replace)
}

/// The `"numpy-merge"` style: like [`numpy`], but a section present on both
/// sides keeps the parent's body with the child's appended below it.
pub fn numpy_merge(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    merge_numpy(parent, child, SectionPolicy::Append)
}

fn merge_numpy(
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
            NUMPY_SECTIONS,
            policy,
        )),
    }
}

/// Splits a docstring at dash-underlined headers.
pub(crate) fn parse(text: &str) -> Docstring {
    let lines: Vec<&str> = text.lines().collect();

    let mut headers: Vec<(usize, &str)> = Vec::new();
    let mut i = 0;
    while i + 1 < lines.len() {
        let name = lines[i].trim();
        let rule = lines[i + 1].trim();
        if !name.is_empty() && !rule.is_empty() && rule.len() == name.len()
            && rule.chars().all(|c| c == '-')
        {
            headers.push((i, name));
            i += 2;
        } else {
            i += 1;
        }
    }

    let summary_end = headers.first().map_or(lines.len(), |&(at, _)| at);
    let summary = sections::block(&lines[..summary_end]);

    let mut parsed = Vec::with_capacity(headers.len());
    for (h, &(start, name)) in headers.iter().enumerate() {
        let end = headers.get(h + 1).map_or(lines.len(), |&(at, _)| at);
        let body = sections::block(&lines[start + 2..end]).unwrap_or_default();
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

/// Renders a docstring back to NumPy form.
pub(crate) fn render(doc: &Docstring) -> Option<String> {
    let mut blocks = Vec::with_capacity(doc.sections.len() + 1);
    if let Some(summary) = &doc.summary {
        blocks.push(summary.clone());
    }
    for section in &doc.sections {
        let rule = "-".repeat(section.name.len());
        if section.body.is_empty() {
            blocks.push(format!("{}\n{}", section.name, rule));
        } else {
            blocks.push(format!("{}\n{}\n{}", section.name, rule, section.body));
        }
    }
    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}
