use serde_json::Value;

/// Get a nested value by a dot-delimited path, without panicking.
///
/// This is the Rust equivalent of the TypeScript
/// `path.split('.').reduce((current, key) => current?.[key], obj)`:
/// objects are descended by key and arrays by decimal index, and traversal
/// short-circuits to `None` the moment an intermediate is null, missing, or
/// a scalar.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use kitbag_objects::get_nested;
///
/// let doc = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(get_nested(&doc, "a.b.c"), Some(&json!(1)));
/// assert_eq!(get_nested(&json!({}), "a.b.c"), None);
///
/// // Arrays are indexed by decimal path steps.
/// let doc = json!({"items": [{"id": 7}]});
/// assert_eq!(get_nested(&doc, "items.0.id"), Some(&json!(7)));
/// ```
pub fn get_nested<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(key)?,
            Value::Array(arr) => {
                let idx: usize = key.parse().ok()?;
                current = arr.get(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
