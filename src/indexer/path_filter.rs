//! Substring-based path exclusion.
//!
//! A path is ignored when it contains any member of the [`IgnoreSet`] as a
//! plain substring. Matching is case-sensitive and knows nothing about path
//! separators: ignoring `build` also hides `builder.txt` and `rebuild/`.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Set of substrings that exclude paths from indexing and traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreSet {
    entries: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this set with `substr` added
    ///
    /// Empty strings are not added since they would match every path.
    #[must_use]
    pub fn with(&self, substr: &str) -> Self {
        let mut next = self.clone();
        if !substr.is_empty() {
            next.entries.insert(substr.to_string());
        }
        next
    }

    pub fn contains(&self, substr: &str) -> bool {
        self.entries.contains(substr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff any member is a substring of `path`
    pub fn is_ignored(&self, path: &str) -> bool {
        self.entries.iter().any(|substr| path.contains(substr.as_str()))
    }

    pub fn is_ignored_path(&self, path: &Path) -> bool {
        !self.is_empty() && self.is_ignored(&path.to_string_lossy())
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(Into::into).filter(|s: &String| !s.is_empty()).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_ignores_nothing() {
        let set = IgnoreSet::new();
        assert!(!set.is_ignored("./src/Main.java"));
        assert!(!set.is_ignored_path(Path::new("./build/out.txt")));
    }

    #[test]
    fn test_plain_substring_match() {
        let set = IgnoreSet::new().with("build");
        assert!(set.is_ignored("./build/out.txt"));
        // No separator awareness: this is intended
        assert!(set.is_ignored("./src/builder.txt"));
        assert!(!set.is_ignored("./src/Main.java"));
    }

    #[test]
    fn test_case_sensitive() {
        let set = IgnoreSet::new().with("Build");
        assert!(!set.is_ignored("./build/out.txt"));
    }

    #[test]
    fn test_any_member_matches() {
        let set: IgnoreSet = ["node_modules", "test/"].into_iter().collect();
        assert!(set.is_ignored("./web/node_modules/x.js"));
        assert!(set.is_ignored("./src/test/Foo.java"));
        // Directory path without trailing separator does not contain "test/"
        assert!(!set.is_ignored("./src/test"));
    }

    #[test]
    fn test_with_does_not_mutate_original() {
        let base = IgnoreSet::new();
        let next = base.with("target");
        assert!(base.is_empty());
        assert!(next.contains("target"));
    }

    #[test]
    fn test_empty_substring_rejected() {
        assert!(IgnoreSet::new().with("").is_empty());
        let set: IgnoreSet = ["", "x"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
