use serde_json::Value;

/// Flatten a slice of vectors by one level, preserving order.
///
/// This is the Rust equivalent of the TypeScript `ArrayUtils.flatten`
/// (`array.reduce((acc, val) => acc.concat(val), [])`). Deeper nesting is
/// not recursed into.
///
/// # Examples
///
/// ```
/// use kitbag_arrays::flatten;
///
/// assert_eq!(flatten(&[vec![1], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    let total = nested.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for inner in nested {
        out.extend_from_slice(inner);
    }
    out
}

/// Flatten a slice of JSON values by one level.
///
/// Array elements are spliced in, non-array elements are kept as-is. This
/// matches the `concat` semantics of the upstream reduce, where a
/// non-array element is appended unchanged.
pub fn flatten_values(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(arr) => out.extend(arr.iter().cloned()),
            other => out.push(other.clone()),
        }
    }
    out
}
