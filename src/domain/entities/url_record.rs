//! URL record entity representing an alias to target mapping.

/// A persisted mapping from a short alias to a full target URL.
///
/// `id` is assigned by the storage engine on creation and never reused.
/// Records are immutable: changing a mapping means delete + save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new(7, "ex1", "https://example.com");

        assert_eq!(record.id, 7);
        assert_eq!(record.alias, "ex1");
        assert_eq!(record.target, "https://example.com");
    }

    #[test]
    fn test_records_with_same_target_are_distinct() {
        let a = UrlRecord::new(1, "a", "https://example.com");
        let b = UrlRecord::new(2, "b", "https://example.com");

        assert_ne!(a, b);
        assert_eq!(a.target, b.target);
    }
}
