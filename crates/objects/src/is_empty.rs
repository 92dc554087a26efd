use serde_json::{Map, Value};

/// Check if an object (map) has no keys.
///
/// # Examples
///
/// ```
/// use serde_json::Map;
/// use kitbag_objects::is_empty;
///
/// let empty = Map::new();
/// let mut not_empty = Map::new();
/// not_empty.insert("a".to_string(), serde_json::json!(1));
///
/// assert!(is_empty(&empty));
/// assert!(!is_empty(&not_empty));
/// ```
pub fn is_empty(obj: &Map<String, Value>) -> bool {
    obj.is_empty()
}

/// Check if a `serde_json::Value` object is empty.
/// Returns true for non-object values (they have no properties).
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_map() {
        let empty = Map::new();
        let mut not_empty = Map::new();
        not_empty.insert("foo".to_string(), json!("bar"));

        assert!(is_empty(&empty));
        assert!(!is_empty(&not_empty));
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&json!({})));
        assert!(!is_empty_value(&json!({"a": 1})));

        // Non-objects have no properties.
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!(42)));
        assert!(is_empty_value(&json!([1, 2, 3])));
    }
}
