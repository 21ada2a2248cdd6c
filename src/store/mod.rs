//! Style store for docstring-merge functions.
//!
//! This module provides the registry primitives:
//!
//! - [`MergeFn`]: shared handle to a pure docstring-merge function
//! - [`StyleRef`]: a style as either a registered name or an ad-hoc function
//! - [`StyleStore`]: the registry of named styles
//! - [`StyleError`]: registration and resolution errors
//!
//! A process-wide store is available through [`add_style`], [`remove_style`],
//! [`available_styles`], and [`with_global`].

mod error;
mod global;
mod registry;
mod value;

pub use error::StyleError;
pub use global::{add_style, available_styles, remove_style, with_global};
pub use registry::StyleStore;
pub use value::{MergeFn, StyleRef};

pub(crate) use global::resolve as resolve_global;
