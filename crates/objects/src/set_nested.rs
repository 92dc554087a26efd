use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    EmptyPath,
    #[error("missing key `{0}`")]
    MissingKey(String),
    #[error("invalid array index `{0}`")]
    InvalidIndex(String),
    #[error("cannot descend into a non-container value at `{0}`")]
    NotAContainer(String),
}

/// Write a value at a dot-delimited path.
///
/// The companion to [`crate::get_nested`]. Every intermediate step must
/// already exist and be a container; the final step inserts or replaces an
/// object key, or replaces an existing array element. No intermediate
/// containers are created.
///
/// # Errors
///
/// Returns an error when the path is empty, an intermediate key is missing,
/// an array step is not a valid in-bounds index, or a scalar is reached
/// before the last step.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use kitbag_objects::set_nested;
///
/// let mut doc = json!({"a": {"b": 1}});
/// set_nested(&mut doc, "a.b", json!(2)).unwrap();
/// assert_eq!(doc, json!({"a": {"b": 2}}));
///
/// set_nested(&mut doc, "a.c", json!(3)).unwrap();
/// assert_eq!(doc, json!({"a": {"b": 2, "c": 3}}));
/// ```
pub fn set_nested(value: &mut Value, path: &str, new_value: Value) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let keys: Vec<&str> = path.split('.').collect();

    let mut current = value;
    for key in &keys[..keys.len() - 1] {
        current = match current {
            Value::Object(map) => map
                .get_mut(*key)
                .ok_or_else(|| PathError::MissingKey((*key).to_string()))?,
            Value::Array(arr) => {
                let idx: usize = key
                    .parse()
                    .map_err(|_| PathError::InvalidIndex((*key).to_string()))?;
                arr.get_mut(idx)
                    .ok_or_else(|| PathError::InvalidIndex((*key).to_string()))?
            }
            _ => return Err(PathError::NotAContainer((*key).to_string())),
        };
    }

    let last = keys[keys.len() - 1];
    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), new_value);
            Ok(())
        }
        Value::Array(arr) => {
            let idx: usize = last
                .parse()
                .map_err(|_| PathError::InvalidIndex(last.to_string()))?;
            let slot = arr
                .get_mut(idx)
                .ok_or_else(|| PathError::InvalidIndex(last.to_string()))?;
            *slot = new_value;
            Ok(())
        }
        _ => Err(PathError::NotAContainer(last.to_string())),
    }
}
