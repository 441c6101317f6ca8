use std::collections::HashSet;

use crate::vocabulary;

/// The mutable allow-lists a validator consults.
///
/// A `PolicyStore` holds two independent sets: permitted element names and
/// permitted attribute keys. Every store owns its sets outright; the
/// built-in default vocabulary is deep-copied at construction, so mutating
/// one store never affects another store or the defaults themselves.
///
/// Entries are normalized to lower case at insertion, and lookups expect
/// the already-normalized form. Membership is exact string equality; there
/// is no prefix or wildcard matching.
///
/// # Examples
///
/// ```
/// use svg_guard::PolicyStore;
///
/// let mut policy = PolicyStore::new();
/// assert!(policy.contains_element("svg"));
/// assert!(!policy.contains_element("script"));
///
/// policy.whitelist_elements(["script"]);
/// assert!(policy.contains_element("script"));
///
/// policy.blacklist_elements(["script"]);
/// assert!(!policy.contains_element("script"));
/// ```
#[derive(Debug, Clone)]
pub struct PolicyStore {
    elements: HashSet<String>,
    attributes: HashSet<String>,
}

impl PolicyStore {
    /// Creates a store preloaded with the default safe vocabulary.
    ///
    /// The default tables are copied; the returned store is fully
    /// independent of every other store.
    pub fn new() -> Self {
        Self {
            elements: vocabulary::default_elements(),
            attributes: vocabulary::default_attributes(),
        }
    }

    /// Creates a store with no permitted elements or attributes.
    ///
    /// Useful as the base of a strict custom policy built up with
    /// [`whitelist_elements`](Self::whitelist_elements) and
    /// [`whitelist_attributes`](Self::whitelist_attributes). A validator
    /// over an empty store rejects every tag.
    pub fn empty() -> Self {
        Self {
            elements: HashSet::new(),
            attributes: HashSet::new(),
        }
    }

    /// Adds element names to the allow-list.
    ///
    /// Names are lower-cased before insertion. Adding an existing entry is
    /// a no-op.
    pub fn whitelist_elements<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.elements.insert(name.as_ref().to_lowercase());
        }
    }

    /// Adds attribute keys to the allow-list.
    ///
    /// Keys are lower-cased before insertion. Namespaced keys use the
    /// `prefix:local` form, e.g. `xlink:arcrole`.
    pub fn whitelist_attributes<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.attributes.insert(key.as_ref().to_lowercase());
        }
    }

    /// Removes element names from the allow-list.
    ///
    /// Removing an absent entry is a no-op.
    pub fn blacklist_elements<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.elements.remove(&name.as_ref().to_lowercase());
        }
    }

    /// Removes attribute keys from the allow-list.
    pub fn blacklist_attributes<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.attributes.remove(&key.as_ref().to_lowercase());
        }
    }

    /// Tests whether an already-normalized element name is permitted.
    pub fn contains_element(&self, name: &str) -> bool {
        self.elements.contains(name)
    }

    /// Tests whether an already-normalized attribute key is permitted.
    pub fn contains_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    /// Number of permitted element names.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of permitted attribute keys.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_loaded() {
        let policy = PolicyStore::new();
        assert!(policy.contains_element("svg"));
        assert!(policy.contains_element("path"));
        assert!(policy.contains_attribute("fill"));
        assert!(policy.contains_attribute("xlink:href"));
        assert!(policy.element_count() > 0);
        assert!(policy.attribute_count() > 0);
    }

    #[test]
    fn empty_store_permits_nothing() {
        let policy = PolicyStore::empty();
        assert_eq!(policy.element_count(), 0);
        assert_eq!(policy.attribute_count(), 0);
        assert!(!policy.contains_element("svg"));
    }

    #[test]
    fn whitelist_lower_cases_at_insertion() {
        let mut policy = PolicyStore::empty();
        policy.whitelist_elements(["FooBar"]);
        assert!(policy.contains_element("foobar"));
        assert!(!policy.contains_element("FooBar"));
    }

    #[test]
    fn whitelist_is_idempotent() {
        let mut policy = PolicyStore::new();
        let before = policy.element_count();
        policy.whitelist_elements(["svg", "svg", "SVG"]);
        assert_eq!(policy.element_count(), before);
    }

    #[test]
    fn blacklist_removes_and_tolerates_absent_entries() {
        let mut policy = PolicyStore::new();
        policy.blacklist_elements(["path"]);
        assert!(!policy.contains_element("path"));

        // Absent entry: no-op, no panic.
        policy.blacklist_elements(["path"]);
        policy.blacklist_attributes(["no-such-key"]);
    }

    #[test]
    fn blacklist_matches_case_insensitively_via_normalization() {
        let mut policy = PolicyStore::new();
        policy.blacklist_elements(["PATH"]);
        assert!(!policy.contains_element("path"));
    }

    #[test]
    fn stores_are_isolated() {
        let mut a = PolicyStore::new();
        let b = PolicyStore::new();

        a.blacklist_elements(["svg"]);
        a.whitelist_elements(["script"]);

        assert!(b.contains_element("svg"));
        assert!(!b.contains_element("script"));

        // Defaults themselves are untouched.
        let c = PolicyStore::new();
        assert!(c.contains_element("svg"));
        assert!(!c.contains_element("script"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whitelist followed by blacklist of the same name
            /// restores non-membership, in any case variation.
            #[test]
            fn proptest_whitelist_blacklist_round_trip(name in "[a-zA-Z][a-zA-Z0-9-]{0,15}") {
                let mut policy = PolicyStore::empty();
                let normalized = name.to_lowercase();

                policy.whitelist_elements([name.as_str()]);
                prop_assert!(policy.contains_element(&normalized));

                policy.blacklist_elements([name.as_str()]);
                prop_assert!(!policy.contains_element(&normalized));
            }

            /// Property: mutating one store never changes another.
            #[test]
            fn proptest_store_isolation(name in "[a-z][a-z0-9-]{0,15}") {
                let mut a = PolicyStore::new();
                let b = PolicyStore::new();

                a.whitelist_elements([name.as_str()]);
                a.whitelist_attributes([name.as_str()]);

                prop_assert_eq!(
                    b.contains_element(&name),
                    PolicyStore::new().contains_element(&name)
                );
                prop_assert_eq!(
                    b.contains_attribute(&name),
                    PolicyStore::new().contains_attribute(&name)
                );
            }
        }
    }
}
