/// Split a slice into consecutive chunks of `size` elements.
///
/// The final chunk may be shorter than `size`. A `size` of zero yields an
/// empty result rather than looping forever.
///
/// # Examples
///
/// ```
/// use kitbag_arrays::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(chunk::<i32>(&[], 3), Vec::<Vec<i32>>::new());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_even_split() {
        assert_eq!(chunk(&[1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_uneven_split() {
        assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_size_larger_than_input() {
        assert_eq!(chunk(&[1, 2], 10), vec![vec![1, 2]]);
    }

    #[test]
    fn test_chunk_size_one() {
        assert_eq!(chunk(&[1, 2, 3], 1), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        assert_eq!(chunk::<i32>(&[], 3), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn test_chunk_zero_size() {
        assert_eq!(chunk(&[1, 2, 3], 0), Vec::<Vec<i32>>::new());
    }
}
