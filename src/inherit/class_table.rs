//! The class table: declared types with parent links.
//!
//! Docstring propagation runs as an explicit pass over this table (see
//! [`DocInheritor`](crate::DocInheritor)) rather than hooking class creation
//! at runtime. Parents are referenced by name and must be declared before
//! their subclasses, which also rules out cycles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::InheritError;

/// A method or attribute declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub is_abstract: bool,
}

impl MemberDef {
    /// Creates an undocumented, concrete member.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_abstract: false,
        }
    }

    /// Sets the member's docstring, returning the member for chaining.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Marks the member abstract: subclasses must override it before the
    /// class can be instantiated (when abstract-base semantics are enabled).
    pub fn abstract_member(mut self) -> Self {
        self.is_abstract = true;
        self
    }
}

/// A declared class: docstring, members, and an optional parent link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberDef>,
}

impl ClassDef {
    /// Creates a root class with no docstring or members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            parent: None,
            members: Vec::new(),
        }
    }

    /// Sets the class docstring, returning the class for chaining.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Links this class to its parent by name.
    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parent = Some(name.into());
        self
    }

    /// Declares a member on this class.
    pub fn member(mut self, member: MemberDef) -> Self {
        self.members.push(member);
        self
    }

    /// Looks up a member declared directly on this class.
    pub fn find_member(&self, name: &str) -> Option<&MemberDef> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// An ordered arena of class definitions.
///
/// Declaration order matters: a parent must appear before any class that
/// links to it. The table derives serde traits so it can be produced by
/// external tooling (see the JSON integration test).
///
/// # Example
///
/// ```rust
/// use docmerge::{ClassDef, ClassTable, MemberDef};
///
/// let table = ClassTable::new()
///     .add(ClassDef::new("Shape").member(MemberDef::new("area").abstract_member()))
///     .add(ClassDef::new("Circle").parent("Shape").member(MemberDef::new("area")));
///
/// assert!(table.check_instantiable("Circle").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable {
    classes: Vec<ClassDef>,
    /// Set by a [`DocInheritor`](crate::DocInheritor) configured with
    /// abstract-base semantics; until then abstract flags are inert.
    #[serde(default)]
    abstract_base: bool,
}

impl ClassTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class definition, returning the table for chaining.
    pub fn add(mut self, class: ClassDef) -> Self {
        self.classes.push(class);
        self
    }

    /// Looks up a class by name.
    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Returns the classes in declaration order.
    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    /// Checks that a class can be instantiated.
    ///
    /// With abstract-base semantics enabled (via
    /// [`DocInheritor::abstract_base`](crate::DocInheritor::abstract_base)),
    /// a class whose nearest definition of some member is still abstract
    /// cannot be instantiated.
    ///
    /// # Errors
    ///
    /// [`InheritError::UnknownClass`] if the name is not in the table;
    /// [`InheritError::AbstractClass`] listing the unimplemented members.
    pub fn check_instantiable(&self, name: &str) -> Result<(), InheritError> {
        let idx = self
            .index_of(name)
            .ok_or_else(|| InheritError::UnknownClass {
                name: name.to_string(),
            })?;
        if !self.abstract_base {
            return Ok(());
        }
        let members = self.unimplemented_abstract(idx);
        if members.is_empty() {
            Ok(())
        } else {
            Err(InheritError::AbstractClass {
                class: name.to_string(),
                members,
            })
        }
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    pub(crate) fn class_at(&self, idx: usize) -> &ClassDef {
        &self.classes[idx]
    }

    pub(crate) fn class_at_mut(&mut self, idx: usize) -> &mut ClassDef {
        &mut self.classes[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.classes.len()
    }

    pub(crate) fn set_abstract_base(&mut self, flag: bool) {
        self.abstract_base = flag;
    }

    /// Walks the ancestor chain starting at `start` (inclusive) and returns
    /// the doc of the nearest definition of `member`, or `None` if no
    /// ancestor declares it. The walk is bounded by table size as a cycle
    /// guard for hand-built tables.
    pub(crate) fn nearest_member_doc(&self, start: usize, member: &str) -> Option<Option<String>> {
        let mut current = Some(start);
        let mut steps = 0;
        while let Some(idx) = current {
            if let Some(found) = self.classes[idx].find_member(member) {
                return Some(found.doc.clone());
            }
            current = self.classes[idx]
                .parent
                .as_deref()
                .and_then(|p| self.index_of(p));
            steps += 1;
            if steps > self.classes.len() {
                break;
            }
        }
        None
    }

    /// Members whose nearest definition along the chain is abstract.
    fn unimplemented_abstract(&self, idx: usize) -> Vec<String> {
        let mut nearest: HashMap<&str, bool> = HashMap::new();
        let mut current = Some(idx);
        let mut steps = 0;
        while let Some(at) = current {
            for member in &self.classes[at].members {
                // First sighting wins: that is the nearest definition.
                nearest.entry(member.name.as_str()).or_insert(member.is_abstract);
            }
            current = self.classes[at]
                .parent
                .as_deref()
                .and_then(|p| self.index_of(p));
            steps += 1;
            if steps > self.classes.len() {
                break;
            }
        }
        let mut unimplemented: Vec<String> = nearest
            .into_iter()
            .filter(|&(_, is_abstract)| is_abstract)
            .map(|(name, _)| name.to_string())
            .collect();
        unimplemented.sort();
        unimplemented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> ClassTable {
        ClassTable::new()
            .add(
                ClassDef::new("Shape")
                    .doc("A geometric shape.")
                    .member(MemberDef::new("area").doc("Surface area.").abstract_member())
                    .member(MemberDef::new("name").doc("Display name.")),
            )
            .add(
                ClassDef::new("Circle")
                    .parent("Shape")
                    .member(MemberDef::new("area")),
            )
            .add(ClassDef::new("Sphere").parent("Circle"))
    }

    #[test]
    fn test_builders() {
        let table = shapes();
        let shape = table.get("Shape").unwrap();
        assert_eq!(shape.doc.as_deref(), Some("A geometric shape."));
        assert_eq!(shape.members.len(), 2);
        assert!(shape.find_member("area").unwrap().is_abstract);
        assert!(table.get("Missing").is_none());
    }

    #[test]
    fn test_nearest_member_doc_walks_chain() {
        let table = shapes();
        let sphere = table.index_of("Sphere").unwrap();
        // Sphere has no members; nearest "name" is on Shape.
        assert_eq!(
            table.nearest_member_doc(sphere, "name"),
            Some(Some("Display name.".to_string()))
        );
        // Nearest "area" is Circle's undocumented override.
        assert_eq!(table.nearest_member_doc(sphere, "area"), Some(None));
        assert_eq!(table.nearest_member_doc(sphere, "volume"), None);
    }

    #[test]
    fn test_check_instantiable_without_abstract_base() {
        // Abstract flags are inert until an inheritor enables them.
        let table = shapes();
        assert!(table.check_instantiable("Shape").is_ok());
    }

    #[test]
    fn test_check_instantiable_with_abstract_base() {
        let mut table = shapes();
        table.set_abstract_base(true);

        let err = table.check_instantiable("Shape").unwrap_err();
        assert_eq!(
            err,
            InheritError::AbstractClass {
                class: "Shape".to_string(),
                members: vec!["area".to_string()],
            }
        );

        // Circle overrides "area" concretely, so it and its subclass are fine.
        assert!(table.check_instantiable("Circle").is_ok());
        assert!(table.check_instantiable("Sphere").is_ok());
    }

    #[test]
    fn test_check_instantiable_unknown_class() {
        let table = shapes();
        assert_eq!(
            table.check_instantiable("Square").unwrap_err(),
            InheritError::UnknownClass {
                name: "Square".to_string()
            }
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let table = shapes();
        let json = serde_json::to_string(&table).unwrap();
        let back: ClassTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
