use std::collections::HashMap;

/// FieldStore holds the raw text of every visible form field, keyed by field id
///
/// Missing keys read as empty, mirroring an input that was never typed into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldStore {
    values: HashMap<&'static str, String>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get the raw value of a field
    pub fn get(&self, field_id: &str) -> &str {
        self.values.get(field_id).map(String::as_str).unwrap_or("")
    }

    /// Set the raw value of a field
    pub fn set(&mut self, field_id: &'static str, value: impl Into<String>) {
        self.values.insert(field_id, value.into());
    }

    /// Set the field only when a value is present
    pub fn set_opt(&mut self, field_id: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.set(field_id, value);
        }
    }

    /// Blank a set of fields
    pub fn clear(&mut self, field_ids: &[&'static str]) {
        for id in field_ids {
            self.values.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let store = FieldStore::new();
        assert_eq!(store.get("anything"), "");
        assert!(store.get("anything").is_empty());
    }

    #[test]
    fn test_set_opt_skips_none() {
        let mut store = FieldStore::new();
        store.set("a", "1");
        store.set_opt("a", None);
        store.set_opt("b", Some("2".into()));
        assert_eq!(store.get("a"), "1");
        assert_eq!(store.get("b"), "2");
    }

    #[test]
    fn test_clear_only_named_fields() {
        let mut store = FieldStore::new();
        store.set("a", "1");
        store.set("b", "2");
        store.clear(&["a"]);
        assert!(store.get("a").is_empty());
        assert_eq!(store.get("b"), "2");
    }
}
