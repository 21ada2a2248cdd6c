//! Docstring-inheritance surfaces.
//!
//! Two ways to invoke a merge style:
//!
//! - [`DocInheritor`]: a propagation pass over a whole [`ClassTable`],
//!   merging class docs and overriding-member docs down the hierarchy
//! - [`DocInherit`]: merges one callable's doc against an explicit parent
//!
//! Both resolve their style eagerly at construction and share the
//! [`Documented`] trait for extracting parent docstrings from values.

mod class_table;
mod decorator;
mod error;
mod inheritor;

pub use class_table::{ClassDef, ClassTable, MemberDef};
pub use decorator::{DocInherit, Documented, FnDoc};
pub use error::InheritError;
pub use inheritor::DocInheritor;
