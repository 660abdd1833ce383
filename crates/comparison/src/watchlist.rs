//! Caller-owned list of identifiers to check.

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of market hash names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    items: Vec<String>,
}

impl Watchlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier. Empty and already-present identifiers are
    /// ignored.
    ///
    /// Returns true if the identifier was added.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Adds one identifier per line, trimming each and skipping blanks.
    ///
    /// Returns the number of identifiers added.
    pub fn add_many<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for line in lines {
            if self.add(line.as_ref().trim()) {
                added += 1;
            }
        }
        added
    }

    /// Removes an identifier. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns the first `n` identifiers in insertion order.
    #[must_use]
    pub fn take(&self, n: usize) -> &[String] {
        &self.items[..n.min(self.items.len())]
    }
}

impl<S: AsRef<str>> FromIterator<S> for Watchlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_many(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dedupes() {
        let mut list = Watchlist::new();

        assert!(list.add("AK-47 | Redline (Field-Tested)"));
        assert!(!list.add("AK-47 | Redline (Field-Tested)"));
        assert!(!list.add(""));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_many_trims_and_counts() {
        let mut list = Watchlist::new();
        list.add("AWP | Asiimov (Field-Tested)");

        let added = list.add_many(
            "  AK-47 | Redline (Field-Tested)  \n\n   \nAWP | Asiimov (Field-Tested)\nGlock-18 | Fade (Factory New)"
                .lines(),
        );

        assert_eq!(added, 2);
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![
                "AWP | Asiimov (Field-Tested)",
                "AK-47 | Redline (Field-Tested)",
                "Glock-18 | Fade (Factory New)",
            ]
        );
    }

    #[test]
    fn test_remove() {
        let mut list: Watchlist = ["a", "b", "c"].into_iter().collect();

        assert!(list.remove("b"));
        assert!(!list.remove("b"));
        assert!(!list.contains("b"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_take_clamps() {
        let list: Watchlist = ["a", "b", "c"].into_iter().collect();

        assert_eq!(list.take(2), ["a".to_string(), "b".to_string()]);
        assert_eq!(list.take(10).len(), 3);
        assert!(list.take(0).is_empty());
        assert!(Watchlist::new().is_empty());
    }
}
