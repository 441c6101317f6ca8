//! Allow-list validation for untrusted SVG documents.
//!
//! This crate is a thin security boundary for services that accept
//! user-supplied vector graphics: it scans a document once, token by token,
//! and rejects it as soon as anything outside a known-safe vocabulary
//! appears. It never rewrites or repairs input, builds no DOM, and renders
//! nothing. The accepted subset cannot smuggle script elements, event
//! handler attributes, or unknown tags past the check, and the underlying
//! tokenizer never expands entity references, so expansion-bomb payloads
//! cost time and memory proportional to their input size only.
//!
//! # Core Types
//!
//! - [`Validator`]: constructs with the default safe vocabulary, exposes
//!   whitelist/blacklist configuration and the `validate*` entry points
//! - [`PolicyStore`]: the owned allow-lists a validator consults
//! - [`ValidationError`] / [`ValidationErrorKind`]: the rejection taxonomy
//!   (unknown element, unknown attribute, malformed input)
//! - [`vocabulary`]: the built-in default element/attribute tables
//!
//! # Examples
//!
//! ```
//! use svg_guard::{ValidationErrorKind, Validator};
//!
//! let validator = Validator::new();
//!
//! // A plain drawing passes.
//! assert!(validator.validate(br#"<svg><circle cx="5" cy="5" r="4"/></svg>"#).is_ok());
//!
//! // Script injection is rejected with the offending name.
//! let err = validator.validate(b"<svg><script>alert(1)</script></svg>").unwrap_err();
//! assert_eq!(err.kind(), ValidationErrorKind::UnknownElement);
//! assert_eq!(err.detail(), "script");
//! ```
//!
//! Validation is all-or-nothing: the first unknown construct in document
//! order rejects the whole document and stops the scan. Every validator
//! instance owns an independent copy of the default vocabulary, so
//! configuring one instance never affects another.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod error;
mod policy;
mod validator;
pub mod vocabulary;

pub use error::{ValidationError, ValidationErrorKind};
pub use policy::PolicyStore;
pub use validator::Validator;
