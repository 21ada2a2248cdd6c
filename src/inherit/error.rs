//! Class-table errors.

/// Error from class-table operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InheritError {
    /// The named class is not in the table.
    UnknownClass { name: String },
    /// A class references a parent that is not declared before it.
    UnknownParent { class: String, parent: String },
    /// The class still has unimplemented abstract members.
    AbstractClass {
        class: String,
        members: Vec<String>,
    },
}

impl std::fmt::Display for InheritError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InheritError::UnknownClass { name } => {
                write!(f, "unknown class '{}'", name)
            }
            InheritError::UnknownParent { class, parent } => {
                write!(
                    f,
                    "class '{}' references parent '{}' that is not declared before it",
                    class, parent
                )
            }
            InheritError::AbstractClass { class, members } => {
                write!(
                    f,
                    "cannot instantiate abstract class '{}': unimplemented members: {}",
                    class,
                    members.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for InheritError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_class_display() {
        let err = InheritError::UnknownClass {
            name: "Widget".to_string(),
        };
        assert!(err.to_string().contains("Widget"));
    }

    #[test]
    fn test_unknown_parent_display() {
        let err = InheritError::UnknownParent {
            class: "Button".to_string(),
            parent: "Widget".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Button"));
        assert!(msg.contains("Widget"));
    }

    #[test]
    fn test_abstract_class_display() {
        let err = InheritError::AbstractClass {
            class: "Shape".to_string(),
            members: vec!["area".to_string(), "perimeter".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Shape"));
        assert!(msg.contains("area, perimeter"));
    }
}
