use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicate values from a slice, keeping first-occurrence order.
///
/// This is the Rust equivalent of the TypeScript `ArrayUtils.unique`
/// (`[...new Set(array)]`): each distinct element is retained once, in the
/// order it first appears.
///
/// # Examples
///
/// ```
/// use kitbag_arrays::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(unique(&["b", "a", "b"]), vec!["b", "a"]);
/// ```
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Remove duplicate JSON values from a slice, keeping first-occurrence order.
///
/// `Value` is not hashable, so duplicates are detected by structural
/// equality.
///
/// Rust divergence: the upstream `Set` compares objects and arrays by
/// reference, so structurally equal objects survive de-duplication there.
/// This variant treats structurally equal values as duplicates.
pub fn unique_values(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unique_integers() {
        assert_eq!(unique(&[1, 2, 2, 3, 3, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_unique_preserves_first_occurrence_order() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_unique_empty() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(unique::<i32>(&[]), empty);
    }

    #[test]
    fn test_unique_no_duplicates() {
        assert_eq!(unique(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_unique_strings() {
        let items = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(unique(&items), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_unique_values_mixed() {
        let items = vec![json!(1), json!("1"), json!(1), json!(null), json!(null)];
        assert_eq!(
            unique_values(&items),
            vec![json!(1), json!("1"), json!(null)]
        );
    }

    #[test]
    fn test_unique_values_structural_equality() {
        let items = vec![json!({"a": 1}), json!({"a": 1}), json!({"a": 2})];
        assert_eq!(unique_values(&items), vec![json!({"a": 1}), json!({"a": 2})]);
    }
}
