use std::collections::HashSet;

/// Set of source links that remembers first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link. Returns `false` if it was already present.
    pub fn insert(&mut self, link: &str) -> bool {
        if self.seen.contains(link) {
            return false;
        }
        self.seen.insert(link.to_string());
        self.order.push(link.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order_without_duplicates() {
        let mut sources = SourceSet::new();
        assert!(sources.insert("http://b"));
        assert!(sources.insert("http://a"));
        assert!(!sources.insert("http://b"));
        assert!(sources.insert("http://c"));

        assert_eq!(sources.len(), 3);
        assert_eq!(sources.into_vec(), vec!["http://b", "http://a", "http://c"]);
    }
}
