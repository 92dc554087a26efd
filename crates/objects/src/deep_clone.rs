use serde_json::{Map, Value};

/// Create a deep clone of a JSON value.
///
/// This is the Rust equivalent of the TypeScript `ObjectUtils.deepClone`:
/// scalars are copied by value, arrays element-wise, and objects key-by-key,
/// so the result shares no structure with the input.
///
/// The upstream implementation recursed without a cycle guard and could blow
/// the stack on self-referential objects. `serde_json::Value` owns its
/// children, so cycles are unrepresentable here and that hazard does not
/// apply. Date objects do not exist in the JSON model; date-like data arrives
/// as numbers or strings and is cloned by value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use kitbag_objects::deep_clone;
///
/// let original = json!({"user": {"tags": ["a", "b"]}});
/// let mut cloned = deep_clone(&original);
///
/// assert_eq!(cloned, original);
///
/// // Mutating the clone leaves the original untouched.
/// cloned["user"]["tags"][0] = json!("z");
/// assert_eq!(original["user"]["tags"][0], json!("a"));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(deep_clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (key, val) in obj {
                new_obj.insert(key.clone(), deep_clone(val));
            }
            Value::Object(new_obj)
        }
    }
}
