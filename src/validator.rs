use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::NsReader;

use crate::classify::classify;
use crate::error::ValidationError;
use crate::policy::PolicyStore;

/// Allow-list validator for untrusted SVG documents.
///
/// A validator either accepts a document or rejects it with the first
/// offending construct; it never rewrites input. Construction loads the
/// default safe vocabulary into a policy store owned by this instance, and
/// the whitelist/blacklist operations mutate only that instance.
///
/// Validation takes `&self` and mutation takes `&mut self`, so the borrow
/// checker rules out mutating a policy while a scan is using it.
///
/// # Examples
///
/// ```
/// use svg_guard::Validator;
///
/// let validator = Validator::new();
/// assert!(validator.validate(br#"<svg><path d="M0 0h1v1z"/></svg>"#).is_ok());
/// assert!(validator.validate(b"<svg><script>alert(1)</script></svg>").is_err());
/// ```
///
/// Widening and narrowing the vocabulary:
///
/// ```
/// use svg_guard::Validator;
///
/// let mut validator = Validator::new();
/// validator.whitelist_elements(["script"]);
/// assert!(validator.validate(b"<svg><script>ok()</script></svg>").is_ok());
///
/// validator.blacklist_elements(["path"]);
/// assert!(validator.validate(br#"<svg><path d="M0 0z"/></svg>"#).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: PolicyStore,
}

impl Validator {
    /// Creates a validator with the default safe vocabulary.
    pub fn new() -> Self {
        Self {
            policy: PolicyStore::new(),
        }
    }

    /// Creates a validator over an explicit policy store.
    ///
    /// Combine with [`PolicyStore::empty`] for strict custom policies.
    pub fn with_policy(policy: PolicyStore) -> Self {
        Self { policy }
    }

    /// Read access to this instance's policy store.
    pub fn policy(&self) -> &PolicyStore {
        &self.policy
    }

    /// Adds element names to this instance's allow-list.
    pub fn whitelist_elements<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.policy.whitelist_elements(names);
    }

    /// Adds attribute keys to this instance's allow-list.
    pub fn whitelist_attributes<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.policy.whitelist_attributes(keys);
    }

    /// Removes element names from this instance's allow-list.
    pub fn blacklist_elements<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.policy.blacklist_elements(names);
    }

    /// Removes attribute keys from this instance's allow-list.
    pub fn blacklist_attributes<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.policy.blacklist_attributes(keys);
    }

    /// Validates a document held in memory.
    ///
    /// Returns `Ok(())` when every element and attribute is permitted by
    /// the current allow-lists, or the first rejection in document order.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] with the category and offending name; see the
    /// crate docs for the error taxonomy.
    pub fn validate(&self, input: &[u8]) -> Result<(), ValidationError> {
        tracing::trace!(len = input.len(), "scanning in-memory document");
        self.scan(NsReader::from_reader(input))
    }

    /// Validates a document held in a string.
    pub fn validate_str(&self, input: &str) -> Result<(), ValidationError> {
        self.validate(input.as_bytes())
    }

    /// Validates a document from a buffered reader.
    ///
    /// The scan is a single forward pass; memory stays bounded by the
    /// largest individual token, not the document size.
    pub fn validate_reader<R: BufRead>(&self, reader: R) -> Result<(), ValidationError> {
        tracing::trace!("scanning streamed document");
        self.scan(NsReader::from_reader(reader))
    }

    /// The scan loop: pull a token, classify it, stop on the first
    /// rejection or at clean end-of-input.
    fn scan<R: BufRead>(&self, mut reader: NsReader<R>) -> Result<(), ValidationError> {
        // Mismatched closing tags are malformed input, not inert noise.
        reader.config_mut().check_end_names = true;

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Eof) => {
                    tracing::trace!("document accepted");
                    return Ok(());
                }
                Ok(event) => classify(&reader, &event, &self.policy)?,
                Err(err) => {
                    tracing::debug!(error = %err, "tokenizer failure");
                    return Err(err.into());
                }
            }
            buf.clear();
        }
    }
}
