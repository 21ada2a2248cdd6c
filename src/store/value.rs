//! Merge-function handles and style references.

use std::fmt;
use std::sync::Arc;

/// Shared handle to a docstring-merge function.
///
/// A merge function is a pure, stateless policy that combines a parent and a
/// child docstring into one: `(parent, child) -> merged`. `None` means "no
/// docstring" on both sides of the call.
pub type MergeFn =
    Arc<dyn Fn(Option<&str>, Option<&str>) -> Option<String> + Send + Sync>;

/// Reference to a merge style: either a registered name or a function.
///
/// Every API that takes a style accepts both forms, so one-off merge policies
/// can be passed directly at the call site without touching the store:
///
/// ```rust
/// use docmerge::{StyleRef, StyleStore};
///
/// let store = StyleStore::new();
///
/// // By registered name
/// let by_name = store.resolve(&StyleRef::from("parent")).unwrap();
///
/// // By ad-hoc function, never registered
/// let shout = StyleRef::func(|parent: Option<&str>, _child: Option<&str>| {
///     parent.map(|p| p.to_uppercase())
/// });
/// let by_func = store.resolve(&shout).unwrap();
///
/// assert_eq!(by_name(Some("Hi."), None), Some("Hi.".to_string()));
/// assert_eq!(by_func(Some("Hi."), None), Some("HI.".to_string()));
/// ```
#[derive(Clone)]
pub enum StyleRef {
    /// A style identifier to be looked up in a [`StyleStore`](crate::StyleStore).
    Named(String),
    /// An unregistered merge function supplied directly.
    Func(MergeFn),
}

impl StyleRef {
    /// Wraps a closure or function as an ad-hoc style.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(Option<&str>, Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        StyleRef::Func(Arc::new(f))
    }
}

impl fmt::Debug for StyleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            StyleRef::Func(_) => f.write_str("Func(<merge fn>)"),
        }
    }
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        StyleRef::Named(name.to_string())
    }
}

impl From<String> for StyleRef {
    fn from(name: String) -> Self {
        StyleRef::Named(name)
    }
}

impl From<MergeFn> for StyleRef {
    fn from(func: MergeFn) -> Self {
        StyleRef::Func(func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_ref_from_str() {
        let style = StyleRef::from("numpy");
        assert!(matches!(style, StyleRef::Named(ref n) if n == "numpy"));
    }

    #[test]
    fn test_style_ref_from_string() {
        let style = StyleRef::from(String::from("google"));
        assert!(matches!(style, StyleRef::Named(ref n) if n == "google"));
    }

    #[test]
    fn test_style_ref_func_wraps_closure() {
        let style = StyleRef::func(|p: Option<&str>, _c: Option<&str>| p.map(str::to_string));
        match style {
            StyleRef::Func(f) => assert_eq!(f(Some("x"), None), Some("x".to_string())),
            StyleRef::Named(_) => panic!("expected a function variant"),
        }
    }

    #[test]
    fn test_style_ref_debug_hides_function() {
        let style = StyleRef::func(|_: Option<&str>, _: Option<&str>| None);
        assert_eq!(format!("{:?}", style), "Func(<merge fn>)");

        let named = StyleRef::from("parent");
        assert!(format!("{:?}", named).contains("parent"));
    }
}
