//! The style store: named docstring-merge functions.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::error::StyleError;
use super::value::{MergeFn, StyleRef};

/// Registry of named merge styles.
///
/// [`StyleStore::new`] seeds the built-in styles (`"parent"`,
/// `"parent-then-child"`, `"numpy"`, `"numpy-merge"`, `"google"`,
/// `"google-merge"`); [`StyleStore::empty`] starts blank. Entries are
/// registered and removed explicitly and are read, never mutated, on each
/// merge.
///
/// # Validation
///
/// Registration smoke-tests the candidate by calling it with two empty
/// docstrings. A function that panics on that probe is rejected with
/// [`StyleError::ProbeFailed`]. The probe is necessary but not sufficient:
/// a function that survives `("", "")` may still panic on other inputs.
///
/// # Thread safety
///
/// The store itself is not synchronized. For a shared process-wide store see
/// [`add_style`](crate::add_style) and friends, which guard one behind a
/// mutex.
///
/// # Example
///
/// ```rust
/// use docmerge::{StyleRef, StyleStore};
///
/// let mut store = StyleStore::new();
/// store
///     .register_fn("child-first", |p: Option<&str>, c: Option<&str>| {
///         c.map(str::to_string).or_else(|| p.map(str::to_string))
///     })
///     .unwrap();
///
/// let merge = store.resolve(&StyleRef::from("child-first")).unwrap();
/// assert_eq!(merge(Some("old"), Some("new")), Some("new".to_string()));
/// ```
#[derive(Clone)]
pub struct StyleStore {
    styles: HashMap<String, MergeFn>,
}

impl StyleStore {
    /// Creates a store seeded with the built-in styles.
    pub fn new() -> Self {
        let mut store = Self::empty();
        crate::styles::register_builtins(&mut store);
        store
    }

    /// Creates a store with no styles at all.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Registers a merge function under `name`, overwriting any existing
    /// entry with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ProbeFailed`] if the function panics on the
    /// empty-docstring probe call.
    pub fn register(&mut self, name: impl Into<String>, func: MergeFn) -> Result<(), StyleError> {
        let name = name.into();
        if !probe(&func) {
            return Err(StyleError::ProbeFailed { name: Some(name) });
        }
        self.styles.insert(name, func);
        Ok(())
    }

    /// Registers a plain closure or function, wrapping it for storage.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, func: F) -> Result<(), StyleError>
    where
        F: Fn(Option<&str>, Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(func))
    }

    /// Inserts a built-in style, skipping the probe.
    ///
    /// Only for seeding: built-in merge functions are total by construction.
    pub(crate) fn insert_builtin(&mut self, name: &str, func: MergeFn) {
        self.styles.insert(name.to_string(), func);
    }

    /// Resolves a style reference to its merge function.
    ///
    /// A [`StyleRef::Func`] is probe-checked and returned as-is, so ad-hoc
    /// merge policies never have to be registered. A [`StyleRef::Named`] is
    /// looked up in the store.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] for an unregistered name, or
    /// [`StyleError::ProbeFailed`] for a supplied function that panics on
    /// the probe call.
    pub fn resolve(&self, style: &StyleRef) -> Result<MergeFn, StyleError> {
        match style {
            StyleRef::Func(func) => {
                if !probe(func) {
                    return Err(StyleError::ProbeFailed { name: None });
                }
                Ok(func.clone())
            }
            StyleRef::Named(name) => {
                self.styles
                    .get(name)
                    .cloned()
                    .ok_or_else(|| StyleError::UnknownStyle {
                        name: name.clone(),
                        available: self.names().iter().map(|s| s.to_string()).collect(),
                    })
            }
        }
    }

    /// Removes a style. Removing an absent name is a no-op.
    ///
    /// Returns `true` if an entry was actually removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.styles.remove(name).is_some()
    }

    /// Returns whether a style with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns all registered style names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleStore")
            .field("styles", &self.names())
            .finish()
    }
}

impl fmt::Display for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The available styles are:")?;
        for name in self.names() {
            write!(f, "\n\t- {}", name)?;
        }
        Ok(())
    }
}

/// Smoke-tests a merge function with two empty docstrings.
///
/// Rust's types already guarantee the signature; the probe keeps the weaker
/// runtime guarantee that the function at least survives empty input.
fn probe(func: &MergeFn) -> bool {
    panic::catch_unwind(AssertUnwindSafe(|| {
        func(Some(""), Some(""));
    }))
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(parent: Option<&str>, _child: Option<&str>) -> Option<String> {
        parent.map(|p| p.to_uppercase())
    }

    #[test]
    fn test_new_store_has_builtins() {
        let store = StyleStore::new();
        for name in [
            "parent",
            "parent-then-child",
            "numpy",
            "numpy-merge",
            "google",
            "google-merge",
        ] {
            assert!(store.contains(name), "missing built-in '{}'", name);
        }
    }

    #[test]
    fn test_empty_store() {
        let store = StyleStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_register_and_resolve_named() {
        let mut store = StyleStore::empty();
        store.register_fn("upper", upper).unwrap();

        let merge = store.resolve(&StyleRef::from("upper")).unwrap();
        assert_eq!(merge(Some("hi"), None), Some("HI".to_string()));
    }

    #[test]
    fn test_register_overwrites_silently() {
        let mut store = StyleStore::empty();
        store
            .register_fn("s", |_: Option<&str>, _: Option<&str>| {
                Some("first".to_string())
            })
            .unwrap();
        store
            .register_fn("s", |_: Option<&str>, _: Option<&str>| {
                Some("second".to_string())
            })
            .unwrap();

        let merge = store.resolve(&StyleRef::from("s")).unwrap();
        assert_eq!(merge(None, None), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_register_rejects_panicking_function() {
        let mut store = StyleStore::empty();
        let result = store.register_fn("broken", |_: Option<&str>, _: Option<&str>| {
            panic!("always")
        });

        assert!(matches!(
            result,
            Err(StyleError::ProbeFailed { name: Some(ref n) }) if n == "broken"
        ));
        assert!(!store.contains("broken"));
    }

    #[test]
    fn test_probe_is_necessary_not_sufficient() {
        // Survives the empty probe, panics on anything else. Registration
        // must still succeed; the probe only covers the empty pair.
        let mut store = StyleStore::empty();
        let result = store.register_fn("touchy", |p: Option<&str>, _: Option<&str>| {
            if p == Some("") {
                None
            } else {
                panic!("non-empty input")
            }
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let mut store = StyleStore::empty();
        store.register_fn("real", upper).unwrap();

        let result = store.resolve(&StyleRef::from("missing"));
        match result {
            Err(StyleError::UnknownStyle { name, available }) => {
                assert_eq!(name, "missing");
                assert_eq!(available, vec!["real".to_string()]);
            }
            Err(other) => panic!("expected UnknownStyle, got {:?}", other),
            Ok(_) => panic!("expected UnknownStyle, got Ok(..)"),
        }
    }

    #[test]
    fn test_resolve_ad_hoc_function() {
        let store = StyleStore::empty();
        let style = StyleRef::func(upper);

        let merge = store.resolve(&style).unwrap();
        assert_eq!(merge(Some("ok"), Some("ignored")), Some("OK".to_string()));
    }

    #[test]
    fn test_resolve_ad_hoc_panicking_function() {
        let store = StyleStore::empty();
        let style = StyleRef::func(|_: Option<&str>, _: Option<&str>| -> Option<String> {
            panic!("always")
        });

        let result = store.resolve(&style);
        assert!(matches!(result, Err(StyleError::ProbeFailed { name: None })));
    }

    #[test]
    fn test_unregister_present_and_absent() {
        let mut store = StyleStore::empty();
        store.register_fn("gone", upper).unwrap();

        assert!(store.unregister("gone"));
        // Absent name is a no-op, never an error.
        assert!(!store.unregister("gone"));
        assert!(!store.unregister("never-was"));
    }

    #[test]
    fn test_names_sorted() {
        let mut store = StyleStore::empty();
        store.register_fn("zeta", upper).unwrap();
        store.register_fn("alpha", upper).unwrap();
        store.register_fn("mid", upper).unwrap();

        assert_eq!(store.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_display_lists_styles() {
        let mut store = StyleStore::empty();
        store.register_fn("b", upper).unwrap();
        store.register_fn("a", upper).unwrap();

        let rendered = store.to_string();
        assert!(rendered.starts_with("The available styles are:"));
        assert!(rendered.contains("\n\t- a\n\t- b"));
    }

    #[test]
    fn test_builtin_styles_resolve_and_run() {
        let store = StyleStore::new();
        for name in store.names() {
            let merge = store.resolve(&StyleRef::from(name)).unwrap();
            // Must not panic on any None/Some combination.
            merge(None, None);
            merge(Some("p"), None);
            merge(None, Some("c"));
            merge(Some("p"), Some("c"));
        }
    }
}
