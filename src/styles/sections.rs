//! Shared section model for NumPy- and Google-style docstrings.
//!
//! Both formats reduce to the same shape: an optional summary followed by
//! named sections. Parsing and rendering differ per format (header syntax);
//! the merge itself is format-independent and lives here.

use std::collections::HashMap;

/// A parsed docstring: summary text plus named sections in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Docstring {
    pub summary: Option<String>,
    pub sections: Vec<Section>,
}

/// One named section with its body text, indentation preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
    pub name: String,
    pub body: String,
}

/// What to do when a section exists on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionPolicy {
    /// Child body wins outright.
    Replace,
    /// Parent body kept, child body appended below it.
    Append,
}

/// Merges two parsed docstrings section-wise.
///
/// The child's summary wins when present. Sections are emitted in the order
/// given by `order`; sections not in the canonical list follow in appearance
/// order, parent's first.
pub(crate) fn merge(
    parent: &Docstring,
    child: &Docstring,
    order: &[&str],
    policy: SectionPolicy,
) -> Docstring {
    let parent_bodies: HashMap<&str, &str> = parent
        .sections
        .iter()
        .map(|s| (s.name.as_str(), s.body.as_str()))
        .collect();
    let child_bodies: HashMap<&str, &str> = child
        .sections
        .iter()
        .map(|s| (s.name.as_str(), s.body.as_str()))
        .collect();

    let mut names: Vec<&str> = order
        .iter()
        .copied()
        .filter(|n| parent_bodies.contains_key(n) || child_bodies.contains_key(n))
        .collect();
    for section in parent.sections.iter().chain(child.sections.iter()) {
        if !names.contains(&section.name.as_str()) {
            names.push(&section.name);
        }
    }

    let mut sections = Vec::with_capacity(names.len());
    for name in names {
        let body = match (parent_bodies.get(name), child_bodies.get(name)) {
            (Some(p), Some(c)) => match policy {
                SectionPolicy::Replace => (*c).to_string(),
                SectionPolicy::Append => format!("{}\n{}", p, c),
            },
            (Some(p), None) => (*p).to_string(),
            (None, Some(c)) => (*c).to_string(),
            (None, None) => continue,
        };
        sections.push(Section {
            name: name.to_string(),
            body,
        });
    }

    Docstring {
        summary: child.summary.clone().or_else(|| parent.summary.clone()),
        sections,
    }
}

/// Joins lines into a block, dropping blank lines at both edges.
///
/// Returns `None` if every line is blank.
pub(crate) fn block(lines: &[&str]) -> Option<String> {
    let first = lines.iter().position(|l| !l.trim().is_empty())?;
    let last = lines.iter().rposition(|l| !l.trim().is_empty())?;
    Some(lines[first..=last].join("\n"))
}

/// Treats whitespace-only docstrings as absent.
pub(crate) fn nonblank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
