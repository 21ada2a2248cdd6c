//! Style resolution and registration errors.

/// Error returned when a style cannot be registered or resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A candidate merge function panicked on the `("", "")` probe call.
    ///
    /// `name` is the style identifier being registered, or `None` when the
    /// function was supplied directly at a call site.
    ProbeFailed { name: Option<String> },
    /// A style identifier was not found in the store.
    UnknownStyle {
        name: String,
        available: Vec<String>,
    },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::ProbeFailed { name } => {
                match name {
                    Some(name) => write!(f, "merge function for style '{}' ", name)?,
                    None => write!(f, "merge function ")?,
                }
                write!(
                    f,
                    "panicked on the (\"\", \"\") probe call; a merge function must \
                     accept two optional docstrings and return an optional docstring"
                )
            }
            StyleError::UnknownStyle { name, available } => {
                write!(
                    f,
                    "unknown style '{}'. Available: {}",
                    name,
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_failed_display_with_name() {
        let err = StyleError::ProbeFailed {
            name: Some("broken".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("broken"));
        assert!(msg.contains("probe"));
    }

    #[test]
    fn test_probe_failed_display_anonymous() {
        let err = StyleError::ProbeFailed { name: None };
        let msg = err.to_string();
        assert!(msg.starts_with("merge function panicked"));
    }

    #[test]
    fn test_unknown_style_display_lists_available() {
        let err = StyleError::UnknownStyle {
            name: "nmupy".to_string(),
            available: vec!["google".to_string(), "numpy".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("nmupy"));
        assert!(msg.contains("google, numpy"));
    }
}
