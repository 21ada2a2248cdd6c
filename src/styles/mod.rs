//! Built-in merge styles.
//!
//! Each style is a pure function `(parent, child) -> merged` over optional
//! docstrings. All of them are pre-registered on every
//! [`StyleStore::new`](crate::StyleStore::new) under these names:
//!
//! | Name | Behavior |
//! |------|----------|
//! | `"parent"` | parent's docstring verbatim, child discarded |
//! | `"parent-then-child"` | concatenation, parent first |
//! | `"numpy"` | NumPy sections, child section replaces parent's |
//! | `"numpy-merge"` | NumPy sections, both bodies kept, parent first |
//! | `"google"` | Google sections, child section replaces parent's |
//! | `"google-merge"` | Google sections, both bodies kept, parent first |
//!
//! The functions are also exported directly so they can be composed into
//! custom styles.

mod basic;
mod google;
mod numpy;
pub(crate) mod sections;

pub use basic::{parent, parent_then_child};
pub use google::{google, google_merge};
pub use numpy::{numpy, numpy_merge};

use std::sync::Arc;

use crate::store::StyleStore;

/// Seeds a store with the built-in styles.
pub(crate) fn register_builtins(store: &mut StyleStore) {
    store.insert_builtin("parent", Arc::new(parent));
    store.insert_builtin("parent-then-child", Arc::new(parent_then_child));
    store.insert_builtin("numpy", Arc::new(numpy));
    store.insert_builtin("numpy-merge", Arc::new(numpy_merge));
    store.insert_builtin("google", Arc::new(google));
    store.insert_builtin("google-merge", Arc::new(google_merge));
}
