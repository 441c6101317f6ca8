//! Per-token accept/reject decisions.
//!
//! The classifier is a pure function of one tokenizer event, the reader's
//! current namespace bindings, and a [`PolicyStore`]. It owns the two
//! normalization rules of the crate: tag names are lower-cased before an
//! exact lookup, and attribute names are folded into a namespace-qualified
//! key through a fixed, enumerated URI-to-prefix table.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use quick_xml::NsReader;

use crate::error::ValidationError;
use crate::policy::PolicyStore;

/// The enumerated namespace table. Anything outside it keys by its raw URI
/// and fails lookup unless whitelisted in exactly that form.
const KNOWN_NAMESPACES: &[(&[u8], &str)] = &[
    (b"http://www.w3.org/XML/1998/namespace", "xml"),
    (b"http://www.w3.org/1999/xlink", "xlink"),
    // Namespace declarations themselves (xmlns:foo) resolve to this URI;
    // without the entry the default `xmlns:xlink` key would be unreachable.
    (b"http://www.w3.org/2000/xmlns/", "xmlns"),
];

fn known_prefix(uri: &[u8]) -> Option<&'static str> {
    KNOWN_NAMESPACES
        .iter()
        .find(|(known, _)| *known == uri)
        .map(|(_, prefix)| *prefix)
}

/// Classifies one tokenizer event against the policy.
///
/// Start and end tags are checked against the element allow-list; the
/// attributes of a start tag are each checked against the attribute
/// allow-list. Text, CDATA, comments, processing instructions and
/// declarations (including DOCTYPE) are structurally inert: they are
/// accepted without their content ever being inspected or expanded.
pub(crate) fn classify<R>(
    reader: &NsReader<R>,
    event: &Event<'_>,
    policy: &PolicyStore,
) -> Result<(), ValidationError> {
    match event {
        // Empty is a self-closing tag: one token carrying name and attributes.
        Event::Start(e) | Event::Empty(e) => {
            check_element(reader, e.name(), policy)?;
            check_attributes(reader, e, policy)
        }
        Event::End(e) => check_element(reader, e.name(), policy),
        Event::Text(_)
        | Event::CData(_)
        | Event::Comment(_)
        | Event::PI(_)
        | Event::Decl(_)
        | Event::DocType(_)
        | Event::Eof => Ok(()),
    }
}

/// Checks a tag's local name against the element allow-list.
///
/// The observed name is lower-cased before the exact-match lookup, so
/// `<ScRiPt>` and `<script>` resolve to the same (absent) entry.
fn check_element<R>(
    reader: &NsReader<R>,
    name: QName<'_>,
    policy: &PolicyStore,
) -> Result<(), ValidationError> {
    let local = reader.decoder().decode(name.local_name().into_inner())?;
    let local = local.to_lowercase();
    if policy.contains_element(&local) {
        Ok(())
    } else {
        tracing::debug!(element = %local, "element not in allow-list");
        Err(ValidationError::unknown_element(local))
    }
}

/// Checks every attribute of a start tag, in document order.
///
/// The first key missing from the allow-list rejects the element, and with
/// it the document.
fn check_attributes<R>(
    reader: &NsReader<R>,
    start: &BytesStart<'_>,
    policy: &PolicyStore,
) -> Result<(), ValidationError> {
    for attr in start.attributes() {
        let attr = attr?;
        let key = attribute_key(reader, attr.key)?;
        if !policy.contains_attribute(&key) {
            tracing::debug!(attribute = %key, "attribute not in allow-list");
            return Err(ValidationError::unknown_attribute(key));
        }
    }
    Ok(())
}

/// Computes the normalized lookup key for one attribute.
///
/// - unqualified attribute: the local name;
/// - namespace in the known table: `prefix:local` with the table's prefix;
/// - prefix present but never declared: `prefix:local` as written;
/// - any other bound namespace: `uri:local`, which only matches an
///   explicit whitelist entry in that exact form.
///
/// The full key is lower-cased before lookup.
pub(crate) fn attribute_key<R>(
    reader: &NsReader<R>,
    name: QName<'_>,
) -> Result<String, ValidationError> {
    let decoder = reader.decoder();
    let (resolution, local) = reader.resolve_attribute(name);
    let local = decoder.decode(local.into_inner())?;

    let key = match resolution {
        ResolveResult::Unbound => local.into_owned(),
        ResolveResult::Bound(ns) => match known_prefix(ns.into_inner()) {
            Some(prefix) => format!("{prefix}:{local}"),
            None => format!("{}:{}", decoder.decode(ns.into_inner())?, local),
        },
        ResolveResult::Unknown(prefix) => {
            format!("{}:{}", decoder.decode(&prefix)?, local)
        }
    };

    Ok(key.to_lowercase())
}
