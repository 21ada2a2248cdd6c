//! Single-callable docstring merging.

use serde::{Deserialize, Serialize};

use crate::store::{resolve_global, MergeFn, StyleError, StyleRef, StyleStore};

/// Anything a parent docstring can be extracted from.
///
/// Implemented for plain strings and for all the documented records in this
/// crate, so a [`DocInherit`] can take its parent doc from a literal, a
/// [`ClassDef`](crate::ClassDef), another [`FnDoc`], and so on.
pub trait Documented {
    /// The docstring, if any.
    fn doc(&self) -> Option<&str>;
}

impl Documented for str {
    fn doc(&self) -> Option<&str> {
        Some(self)
    }
}

impl Documented for String {
    fn doc(&self) -> Option<&str> {
        Some(self)
    }
}

impl Documented for Option<&str> {
    fn doc(&self) -> Option<&str> {
        *self
    }
}

impl Documented for crate::ClassDef {
    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl Documented for crate::MemberDef {
    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl Documented for FnDoc {
    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// A documented callable: just a name and a docstring.
///
/// The callable itself is none of this crate's business; only its
/// documentation attribute is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl FnDoc {
    /// Creates an undocumented callable record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Sets the docstring, returning the record for chaining.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }
}

/// Merges one callable's docstring against an explicit parent.
///
/// The single-callable counterpart of [`DocInheritor`](crate::DocInheritor):
/// configured with a parent doc and a style, it rewrites the doc of whatever
/// it is applied to and changes nothing else. Style resolution happens at
/// construction, so typos fail before any callable is touched.
///
/// # Example
///
/// ```rust
/// use docmerge::{DocInherit, FnDoc};
///
/// let mut func = FnDoc::new("compute").doc("Extra.");
/// let inherit = DocInherit::new("Base.", "parent-then-child").unwrap();
/// inherit.apply(&mut func);
///
/// assert_eq!(func.doc.as_deref(), Some("Base.\n\nExtra."));
/// assert_eq!(func.name, "compute");
/// ```
pub struct DocInherit {
    parent_doc: Option<String>,
    merge: MergeFn,
}

impl DocInherit {
    /// Creates a merger with a style resolved from the process-wide store.
    ///
    /// `parent` is either a docstring itself or any [`Documented`] value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] or [`StyleError::ProbeFailed`]
    /// immediately.
    pub fn new<P>(parent: &P, style: impl Into<StyleRef>) -> Result<Self, StyleError>
    where
        P: Documented + ?Sized,
    {
        let merge = resolve_global(&style.into())?;
        Ok(Self {
            parent_doc: parent.doc().map(str::to_string),
            merge,
        })
    }

    /// Creates a merger resolving against an explicit store.
    pub fn with_store<P>(
        parent: &P,
        style: impl Into<StyleRef>,
        store: &StyleStore,
    ) -> Result<Self, StyleError>
    where
        P: Documented + ?Sized,
    {
        let merge = store.resolve(&style.into())?;
        Ok(Self {
            parent_doc: parent.doc().map(str::to_string),
            merge,
        })
    }

    /// Returns the merge of the configured parent doc with `child`.
    pub fn merged(&self, child: Option<&str>) -> Option<String> {
        (self.merge)(self.parent_doc.as_deref(), child)
    }

    /// Rewrites the callable's docstring in place; everything else is left
    /// untouched.
    pub fn apply(&self, func: &mut FnDoc) {
        func.doc = self.merged(func.doc.as_deref());
    }
}
