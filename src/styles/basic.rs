//! Whole-docstring merge styles.

use super::sections::nonblank;

/// The `"parent"` style: the parent's docstring verbatim, child discarded.
///
/// ```rust
/// use docmerge::styles::parent;
///
/// assert_eq!(parent(Some("Computes X."), None), Some("Computes X.".to_string()));
/// // No parent doc means no doc, even if the child had one.
/// assert_eq!(parent(None, Some("Computes Y.")), None);
/// ```
pub fn parent(parent: Option<&str>, _child: Option<&str>) -> Option<String> {
    parent.map(str::to_string)
}

/// The `"parent-then-child"` style: concatenation, parent first.
///
/// The two texts are joined with a blank line. A side that is missing or
/// whitespace-only is skipped; if both are, the result is no docstring.
///
/// ```rust
/// use docmerge::styles::parent_then_child;
///
/// assert_eq!(
///     parent_then_child(Some("Base."), Some("Extra.")),
///     Some("Base.\n\nExtra.".to_string())
/// );
/// assert_eq!(parent_then_child(None, Some("Extra.")), Some("Extra.".to_string()));
/// ```
pub fn parent_then_child(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    match (nonblank(parent), nonblank(child)) {
        (Some(p), Some(c)) => Some(format!("{}\n\n{}", p, c)),
        (Some(p), None) => Some(p.to_string()),
        (None, Some(c)) => Some(c.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_keeps_parent_verbatim() {
        assert_eq!(
            parent(Some("Computes X."), Some("Computes Y.")),
            Some("Computes X.".to_string())
        );
        assert_eq!(parent(Some("Computes X."), None), Some("Computes X.".to_string()));
    }

    #[test]
    fn test_parent_discards_child_when_parent_missing() {
        assert_eq!(parent(None, Some("Computes Y.")), None);
        assert_eq!(parent(None, None), None);
    }

    #[test]
    fn test_parent_then_child_order() {
        let merged = parent_then_child(Some("Base."), Some("Extra.")).unwrap();
        let base_at = merged.find("Base.").unwrap();
        let extra_at = merged.find("Extra.").unwrap();
        assert!(base_at < extra_at);
    }

    #[test]
    fn test_parent_then_child_single_side() {
        assert_eq!(parent_then_child(Some("Base."), None), Some("Base.".to_string()));
        assert_eq!(parent_then_child(None, Some("Extra.")), Some("Extra.".to_string()));
        assert_eq!(parent_then_child(None, None), None);
    }

    #[test]
    fn test_parent_then_child_blank_sides_skipped() {
        assert_eq!(
            parent_then_child(Some("  \n"), Some("Extra.")),
            Some("Extra.".to_string())
        );
        assert_eq!(parent_then_child(Some("  "), Some("   ")), None);
    }
}
