//! Docstring inheritance with pluggable merge styles.
//!
//! This crate merges a "parent" and a "child" docstring according to a
//! selectable style: take the parent's entirely, concatenate, or merge
//! NumPy/Google-style sections. Styles live in a [`StyleStore`] and every
//! entry point also accepts an ad-hoc merge function in place of a name.
//!
//! # Surfaces
//!
//! - [`DocInheritor`] propagates docstrings down a [`ClassTable`]: each
//!   class's doc is merged against its ancestor's, and every overriding
//!   member against the nearest ancestor's same-named member.
//! - [`DocInherit`] merges a single callable's doc against an explicit
//!   parent, leaving the callable itself untouched.
//!
//! # Example
//!
//! ```rust
//! use docmerge::{ClassDef, ClassTable, DocInheritor, MemberDef};
//!
//! let mut table = ClassTable::new()
//!     .add(
//!         ClassDef::new("Base")
//!             .doc("A base widget.")
//!             .member(MemberDef::new("draw").doc("Draws the widget.")),
//!     )
//!     .add(
//!         ClassDef::new("Button")
//!             .parent("Base")
//!             .member(MemberDef::new("draw")),
//!     );
//!
//! // "parent": an undocumented override inherits the ancestor's doc verbatim.
//! DocInheritor::new("parent").unwrap().apply(&mut table).unwrap();
//!
//! let draw = table.get("Button").unwrap().find_member("draw").unwrap();
//! assert_eq!(draw.doc.as_deref(), Some("Draws the widget."));
//! ```
//!
//! # Custom styles
//!
//! ```rust
//! use docmerge::{DocInherit, StyleRef};
//!
//! // One-off style, never registered.
//! let style = StyleRef::func(|p: Option<&str>, c: Option<&str>| {
//!     c.map(str::to_string).or_else(|| p.map(str::to_string))
//! });
//! let inherit = DocInherit::new("Parent doc.", style).unwrap();
//! assert_eq!(inherit.merged(None).as_deref(), Some("Parent doc."));
//! ```
//!
//! # Thread safety
//!
//! The process-wide store behind [`add_style`] and [`remove_style`] is
//! mutex-guarded, but callers doing read-modify-write sequences across
//! calls must synchronize themselves. A [`StyleStore`] you construct is
//! plain owned data.

pub mod inherit;
pub mod store;
pub mod styles;

pub use inherit::{
    ClassDef, ClassTable, DocInherit, DocInheritor, Documented, FnDoc, InheritError, MemberDef,
};
pub use store::{
    add_style, available_styles, remove_style, with_global, MergeFn, StyleError, StyleRef,
    StyleStore,
};
