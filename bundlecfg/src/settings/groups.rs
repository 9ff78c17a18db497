//! Decoded view of `with`/`without` values.

use std::collections::BTreeSet;
use std::fmt;

/// Separator used when a group list is stored as a single string.
pub const GROUP_SEPARATOR: char = ':';

/// A set of group names that remembers insertion order.
///
/// Membership and set algebra ignore order; [`GroupSet::encode`] writes
/// members back in the order they were first seen.
///
/// # Examples
///
/// ```
/// use bundlecfg::GroupSet;
///
/// let wanted = GroupSet::decode("dev:ci");
/// let skipped = GroupSet::decode("test:dev");
///
/// assert_eq!(wanted.intersection(&skipped).encode(), "dev");
/// assert_eq!(skipped.difference(&wanted).encode(), "test");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupSet {
    members: BTreeSet<String>,
    order: Vec<String>,
}

impl GroupSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a colon-separated value, skipping empty segments.
    #[must_use]
    pub fn decode(encoded: &str) -> Self {
        encoded
            .split(GROUP_SEPARATOR)
            .filter(|group| !group.is_empty())
            .collect()
    }

    /// Decodes an optional stored value; absent means empty.
    #[must_use]
    pub fn decode_opt(encoded: Option<&str>) -> Self {
        encoded.map(Self::decode).unwrap_or_default()
    }

    /// Adds a group, returning `false` if it was already present.
    pub fn insert(&mut self, group: impl Into<String>) -> bool {
        let group = group.into();
        if self.members.insert(group.clone()) {
            self.order.push(group);
            true
        } else {
            false
        }
    }

    /// Whether the group is a member.
    #[must_use]
    pub fn contains(&self, group: &str) -> bool {
        self.members.contains(group)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Members of `self` that are also in `other`, in `self`'s order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter().filter(|g| other.contains(g)).collect()
    }

    /// Members of `self` that are not in `other`, in `self`'s order.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|g| !other.contains(g)).collect()
    }

    /// Colon-separated encoding used for storage.
    #[must_use]
    pub fn encode(&self) -> String {
        self.order.join(&GROUP_SEPARATOR.to_string())
    }
}

impl PartialEq for GroupSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for GroupSet {}

impl<S: Into<String>> FromIterator<S> for GroupSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for group in iter {
            set.insert(group);
        }
        set
    }
}

/// Space-separated, as groups are typed on the command line.
impl fmt::Display for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_skips_empty_segments() {
        let set = GroupSet::decode(":dev::test:");
        assert_eq!(set.encode(), "dev:test");
        assert!(GroupSet::decode("").is_empty());
        assert!(GroupSet::decode_opt(None).is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let set = GroupSet::decode("dev:test:dev");
        assert_eq!(set.len(), 2);
        assert_eq!(set.encode(), "dev:test");
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(GroupSet::decode("a:b"), GroupSet::decode("b:a"));
        assert_ne!(GroupSet::decode("a:b"), GroupSet::decode("a"));
    }

    #[test]
    fn test_set_algebra_preserves_left_order() {
        let left = GroupSet::decode("ci:dev:docs");
        let right = GroupSet::decode("docs:ci");
        assert_eq!(left.intersection(&right).encode(), "ci:docs");
        assert_eq!(left.difference(&right).encode(), "dev");
    }

    #[test]
    fn test_display_is_space_separated() {
        assert_eq!(GroupSet::decode("dev:test").to_string(), "dev test");
    }
}
