use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from dependency name to version specifier
///
/// Iteration follows insertion order, which for a parsed manifest is the
/// order the keys appear in the source document. Specifiers are opaque and
/// only ever compared for equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyMap(IndexMap<String, String>);

impl DependencyMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts a dependency, replacing the specifier of an existing name
    /// while keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.0.insert(name.into(), version.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for DependencyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let map: DependencyMap = [("zeta", "1.0.0"), ("alpha", "2.0.0"), ("mid", "3.0.0")]
            .into_iter()
            .collect();

        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_insert_existing_keeps_position() {
        let mut map = DependencyMap::new();
        map.insert("a", "1.0.0");
        map.insert("b", "1.0.0");
        map.insert("a", "2.0.0");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("2.0.0"));
        assert_eq!(map.names().next(), Some("a"));
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"react": "^18.2.0", "axios": "1.6.0", "lodash": "~4.17.21"}"#;
        let map: DependencyMap = serde_json::from_str(json).unwrap();

        let entries: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("react", "^18.2.0"),
                ("axios", "1.6.0"),
                ("lodash", "~4.17.21")
            ]
        );
    }

    #[test]
    fn test_serialize_as_plain_object() {
        let map: DependencyMap = [("b", "2.0.0"), ("a", "1.0.0")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":"2.0.0","a":"1.0.0"}"#);
    }

    #[test]
    fn test_empty_map() {
        let map = DependencyMap::default();
        assert!(map.is_empty());
        assert!(!map.contains("anything"));
        assert_eq!(map.get("anything"), None);
    }
}
