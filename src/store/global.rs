//! Process-wide style store.
//!
//! A single shared [`StyleStore`] lives for the whole process, seeded with
//! the built-in styles at first use. [`DocInheritor::new`] and
//! [`DocInherit::new`] resolve against it; [`add_style`] and [`remove_style`]
//! mutate it. Callers that want isolated stores construct their own
//! [`StyleStore`] and use the `with_store` constructors instead.
//!
//! [`DocInheritor::new`]: crate::DocInheritor::new
//! [`DocInherit::new`]: crate::DocInherit::new

use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::error::StyleError;
use super::registry::StyleStore;
use super::value::{MergeFn, StyleRef};

static STORE: Lazy<Mutex<StyleStore>> = Lazy::new(|| Mutex::new(StyleStore::new()));

/// Registers a merge style on the process-wide store.
///
/// Overwrites silently if the name is already taken, including built-ins.
///
/// # Errors
///
/// Returns [`StyleError::ProbeFailed`] if the function panics when called
/// with two empty docstrings.
pub fn add_style<F>(name: impl Into<String>, func: F) -> Result<(), StyleError>
where
    F: Fn(Option<&str>, Option<&str>) -> Option<String> + Send + Sync + 'static,
{
    STORE.lock().unwrap().register_fn(name, func)
}

/// Removes a style from the process-wide store.
///
/// Removing an absent name is a no-op; returns `true` if an entry was
/// actually removed.
pub fn remove_style(name: &str) -> bool {
    STORE.lock().unwrap().unregister(name)
}

/// Returns the sorted names of all styles on the process-wide store.
pub fn available_styles() -> Vec<String> {
    STORE
        .lock()
        .unwrap()
        .names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Runs a closure with exclusive access to the process-wide store.
///
/// Useful for bulk registration or inspection without repeated locking.
pub fn with_global<R>(f: impl FnOnce(&mut StyleStore) -> R) -> R {
    let mut guard = STORE.lock().unwrap();
    f(&mut guard)
}

/// Resolves a style reference against the process-wide store.
pub(crate) fn resolve(style: &StyleRef) -> Result<MergeFn, StyleError> {
    STORE.lock().unwrap().resolve(style)
}
