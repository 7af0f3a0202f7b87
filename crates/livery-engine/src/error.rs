use std::fmt;

use crate::logging::LogLevel;
use crate::number::ConversionError;

/// A key path could not be resolved against the object graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPathNotFound {
    /// The segment that failed to resolve.
    pub segment: String,
    /// The (remaining) path being resolved when the failure happened.
    pub path: String,
    /// Type name of the object the segment was looked up on.
    pub type_name: &'static str,
}

impl fmt::Display for KeyPathNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not find '{}' (from key path '{}') on {}",
            self.segment, self.path, self.type_name
        )
    }
}

impl std::error::Error for KeyPathNotFound {}

/// Everything that can go wrong while applying a style.
///
/// None of these abort an application: the engine renders them to its
/// [`Logger`](crate::logging::Logger) and moves on to the next entry.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    KeyPathNotFound(KeyPathNotFound),
    Conversion(ConversionError),
    /// No applier recognized the property on the target object.
    UnrecognizedProperty {
        property: String,
        type_name: &'static str,
        value_type: &'static str,
    },
    /// A `superStyle` entry whose value is not a style.
    InvalidSuperStyleValue {
        type_name: &'static str,
        value_type: &'static str,
    },
    /// A terminal entry holding [`Value::Unset`](crate::style::Value::Unset).
    NullTerminalValue {
        property: String,
        type_name: &'static str,
    },
    /// The value's variant does not convert to the property's type.
    TypeMismatch {
        property: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The property's storage does not exist (e.g. a missing title label).
    NullTarget {
        property: String,
        value_type: &'static str,
    },
}

impl StyleError {
    /// Severity the error is reported at: assignment failures are errors,
    /// everything else skips the entry with a warning.
    pub fn level(&self) -> LogLevel {
        match self {
            StyleError::TypeMismatch { .. } | StyleError::NullTarget { .. } => LogLevel::Error,
            _ => LogLevel::Warning,
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::KeyPathNotFound(e) => e.fmt(f),
            StyleError::Conversion(e) => e.fmt(f),
            StyleError::UnrecognizedProperty { property, type_name, value_type } => write!(
                f,
                "unrecognized property '{property}' for {type_name} with value of type {value_type}"
            ),
            StyleError::InvalidSuperStyleValue { type_name, value_type } => write!(
                f,
                "superStyle on {type_name} must be a Style, found {value_type}"
            ),
            StyleError::NullTerminalValue { property, type_name } => {
                write!(f, "unset value for '{property}' on {type_name}")
            }
            StyleError::TypeMismatch { property, expected, found } => write!(
                f,
                "cannot assign a {found} value to '{property}' (expected {expected})"
            ),
            StyleError::NullTarget { property, value_type } => {
                write!(f, "no target to assign {value_type} value for '{property}'")
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::KeyPathNotFound(e) => Some(e),
            StyleError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyPathNotFound> for StyleError {
    fn from(e: KeyPathNotFound) -> Self {
        StyleError::KeyPathNotFound(e)
    }
}

impl From<ConversionError> for StyleError {
    fn from(e: ConversionError) -> Self {
        StyleError::Conversion(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_path_not_found_names_segment_and_type() {
        let err = StyleError::from(KeyPathNotFound {
            segment: "label9".into(),
            path: "label9.textColor".into(),
            type_name: "DemoScreen",
        });
        let msg = err.to_string();
        assert!(msg.contains("'label9'"));
        assert!(msg.contains("DemoScreen"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn only_assignment_failures_are_error_level() {
        let mismatch = StyleError::TypeMismatch {
            property: "font".into(),
            expected: "Font",
            found: "Color",
        };
        let unrecognized = StyleError::UnrecognizedProperty {
            property: "cornerRadius".into(),
            type_name: "Label",
            value_type: "Number",
        };
        assert_eq!(mismatch.level(), LogLevel::Error);
        assert_eq!(unrecognized.level(), LogLevel::Warning);
    }
}
