//! Class-level docstring propagation.

use crate::store::{resolve_global, MergeFn, StyleError, StyleRef, StyleStore};

use super::class_table::ClassTable;
use super::error::InheritError;

/// Propagates docstrings down a [`ClassTable`].
///
/// Configured once with a merge style and reused across tables. The style
/// is resolved eagerly at construction, so a typo in a style name fails
/// before any class is touched.
///
/// [`apply`](DocInheritor::apply) visits classes in declaration order. For
/// each class with a parent link it merges:
///
/// - the class docstring against the parent's (already propagated) one, and
/// - every overriding member's docstring against the nearest ancestor's
///   same-named member.
///
/// Members that override nothing are left untouched, as are internal
/// `__dunder__` names.
///
/// # Example
///
/// ```rust
/// use docmerge::{ClassDef, ClassTable, DocInheritor, MemberDef};
///
/// let mut table = ClassTable::new()
///     .add(
///         ClassDef::new("Base")
///             .doc("A base widget.")
///             .member(MemberDef::new("draw").doc("Draws the widget.")),
///     )
///     .add(
///         ClassDef::new("Button")
///             .parent("Base")
///             .member(MemberDef::new("draw")),
///     );
///
/// let inheritor = DocInheritor::new("parent").unwrap();
/// inheritor.apply(&mut table).unwrap();
///
/// let button = table.get("Button").unwrap();
/// assert_eq!(button.doc.as_deref(), Some("A base widget."));
/// assert_eq!(
///     button.find_member("draw").unwrap().doc.as_deref(),
///     Some("Draws the widget.")
/// );
/// ```
pub struct DocInheritor {
    merge: MergeFn,
    abstract_base: bool,
}

impl DocInheritor {
    /// Creates an inheritor with a style resolved from the process-wide
    /// store.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] or [`StyleError::ProbeFailed`]
    /// immediately; no table is ever processed with a bad style.
    pub fn new(style: impl Into<StyleRef>) -> Result<Self, StyleError> {
        let merge = resolve_global(&style.into())?;
        Ok(Self {
            merge,
            abstract_base: false,
        })
    }

    /// Creates an inheritor resolving against an explicit store.
    pub fn with_store(style: impl Into<StyleRef>, store: &StyleStore) -> Result<Self, StyleError> {
        let merge = store.resolve(&style.into())?;
        Ok(Self {
            merge,
            abstract_base: false,
        })
    }

    /// Enables abstract-base-class semantics on processed tables: after
    /// [`apply`](DocInheritor::apply), classes with unimplemented abstract
    /// members fail [`ClassTable::check_instantiable`].
    pub fn abstract_base(mut self, flag: bool) -> Self {
        self.abstract_base = flag;
        self
    }

    /// Runs the propagation pass over a table.
    ///
    /// # Errors
    ///
    /// Returns [`InheritError::UnknownParent`] if a class links to a parent
    /// not declared earlier in the table.
    pub fn apply(&self, table: &mut ClassTable) -> Result<(), InheritError> {
        for idx in 0..table.len() {
            let Some(parent_name) = table.class_at(idx).parent.clone() else {
                continue;
            };
            let parent_idx = match table.index_of(&parent_name) {
                Some(at) if at < idx => at,
                _ => {
                    return Err(InheritError::UnknownParent {
                        class: table.class_at(idx).name.clone(),
                        parent: parent_name,
                    })
                }
            };

            // Class docstring: the parent's doc has already been merged up
            // its own chain, so it stands in for the nearest ancestor.
            let parent_doc = table.class_at(parent_idx).doc.clone();
            let child_doc = table.class_at(idx).doc.clone();
            table.class_at_mut(idx).doc = (self.merge)(parent_doc.as_deref(), child_doc.as_deref());

            for m in 0..table.class_at(idx).members.len() {
                let member_name = table.class_at(idx).members[m].name.clone();
                if is_internal(&member_name) {
                    continue;
                }
                // Only overrides are merged; fresh members keep their doc.
                let Some(ancestor_doc) = table.nearest_member_doc(parent_idx, &member_name) else {
                    continue;
                };
                let member_doc = table.class_at(idx).members[m].doc.clone();
                table.class_at_mut(idx).members[m].doc =
                    (self.merge)(ancestor_doc.as_deref(), member_doc.as_deref());
            }
        }
        table.set_abstract_base(self.abstract_base);
        Ok(())
    }
}

/// Internal runtime names (`__init__`-style) are never merged.
fn is_internal(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}
