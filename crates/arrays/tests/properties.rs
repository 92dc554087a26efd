use kitbag_arrays::{chunk, flatten, unique};
use proptest::prelude::*;

proptest! {
    #[test]
    fn unique_is_idempotent(xs in proptest::collection::vec(any::<i32>(), 0..64)) {
        let once = unique(&xs);
        let twice = unique(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unique_has_no_duplicates(xs in proptest::collection::vec(0i32..16, 0..64)) {
        let out = unique(&xs);
        for (i, x) in out.iter().enumerate() {
            prop_assert!(!out[i + 1..].contains(x));
        }
    }

    #[test]
    fn chunk_concat_round_trips(
        xs in proptest::collection::vec(any::<i32>(), 0..64),
        size in 1usize..16,
    ) {
        let chunks = chunk(&xs, size);
        let rejoined: Vec<i32> = chunks.iter().flatten().copied().collect();
        prop_assert_eq!(rejoined, xs);
    }

    #[test]
    fn chunk_sizes_are_bounded(
        xs in proptest::collection::vec(any::<i32>(), 0..64),
        size in 1usize..16,
    ) {
        let chunks = chunk(&xs, size);
        if let Some((last, rest)) = chunks.split_last() {
            for c in rest {
                prop_assert_eq!(c.len(), size);
            }
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
    }

    #[test]
    fn flatten_matches_manual_concat(
        nested in proptest::collection::vec(
            proptest::collection::vec(any::<i32>(), 0..8),
            0..8,
        )
    ) {
        let flat = flatten(&nested);
        let expected: Vec<i32> = nested.iter().flatten().copied().collect();
        prop_assert_eq!(flat, expected);
    }
}
