//! PropertyBag — the key-value store on vertices, edges and graph heads.

use serde::{Deserialize, Serialize};

use super::PropertyValue;

/// A key bound to a value. The key is fixed once bound; only the value
/// can be replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    key: String,
    value: PropertyValue,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

/// Insertion-ordered map of property keys to values.
///
/// Keys are unique and case-sensitive. A missing key (`get` returns `None`)
/// is distinct from a key bound to [`PropertyValue::Null`]. Bags are small,
/// so lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    properties: Vec<Property>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`. An existing key keeps its position and gets
    /// the new value; returns the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, value)),
            None => {
                self.properties.push(Property { key, value });
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.iter().any(|p| p.key == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        let pos = self.properties.iter().position(|p| p.key == key)?;
        Some(self.properties.remove(pos).value)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (k, v) in iter {
            bag.set(k, v);
        }
        bag
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut bag = PropertyBag::new();
        assert_eq!(bag.set("name", "Alice"), None);
        assert_eq!(bag.get("name"), Some(&PropertyValue::from("Alice")));
        assert_eq!(bag.get("Name"), None);
    }

    #[test]
    fn test_absent_key_differs_from_null_value() {
        let mut bag = PropertyBag::new();
        bag.set("missing", PropertyValue::Null);
        assert_eq!(bag.get("missing"), Some(&PropertyValue::Null));
        assert_eq!(bag.get("other"), None);
        assert!(bag.contains_key("missing"));
    }

    #[test]
    fn test_overwrite_keeps_insertion_position() {
        let mut bag: PropertyBag = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(bag.set("a", 10), Some(PropertyValue::Int(1)));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.remove("b"), Some(PropertyValue::Int(2)));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
