use std::fmt;

use quick_xml::events::attributes::AttrError;

/// Error returned when a document fails validation.
///
/// A validation error is terminal for the scan that produced it: the first
/// offending construct in document order is reported and no further input
/// is read. The error carries the category of the failure and a detail
/// string identifying the offending name, key or parser diagnostic.
///
/// # Examples
///
/// ```
/// use svg_guard::{ValidationErrorKind, Validator};
///
/// let validator = Validator::new();
/// let err = validator
///     .validate(b"<svg><script>alert(1)</script></svg>")
///     .unwrap_err();
///
/// assert_eq!(err.kind(), ValidationErrorKind::UnknownElement);
/// assert_eq!(err.detail(), "script");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    detail: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub(crate) fn unknown_element(name: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::UnknownElement, name)
    }

    pub(crate) fn unknown_attribute(key: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::UnknownAttribute, key)
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::MalformedInput, detail)
    }

    /// Returns the category of the failure.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the offending element name, attribute key, or parser
    /// diagnostic.
    ///
    /// For [`UnknownElement`](ValidationErrorKind::UnknownElement) this is
    /// the lower-cased tag name as looked up; for
    /// [`UnknownAttribute`](ValidationErrorKind::UnknownAttribute) it is the
    /// full namespace-normalized key.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationErrorKind::UnknownElement => {
                write!(f, "invalid element '{}'", self.detail)
            }
            ValidationErrorKind::UnknownAttribute => {
                write!(f, "invalid attribute '{}'", self.detail)
            }
            ValidationErrorKind::MalformedInput => {
                write!(f, "malformed input: {}", self.detail)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// The category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A start or end tag whose name is not in the element allow-list.
    UnknownElement,
    /// An attribute whose namespace-normalized key is not in the attribute
    /// allow-list.
    UnknownAttribute,
    /// The tokenizer could not produce a well-formed token sequence
    /// (truncated tags, invalid encoding, mismatched nesting, I/O failure).
    MalformedInput,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement => write!(f, "unknown element"),
            Self::UnknownAttribute => write!(f, "unknown attribute"),
            Self::MalformedInput => write!(f, "malformed input"),
        }
    }
}

impl From<quick_xml::Error> for ValidationError {
    fn from(err: quick_xml::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

impl From<AttrError> for ValidationError {
    fn from(err: AttrError) -> Self {
        Self::malformed(err.to_string())
    }
}
