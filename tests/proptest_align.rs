//! Property-based tests for the alignment core.
//!
//! Ensures the invariants the rest of the crate relies on hold across
//! random inputs: the opcode partition exactly covers both sequences, the
//! recorded edits reconstruct the second sequence, ratios stay in the
//! unit interval, and alignment is deterministic.

use docdiff::align::{AlignConfig, OpTag, SequenceMatcher};
use docdiff::report::reconstruct;
use proptest::prelude::*;

/// Small alphabet so random sequences share plenty of runs.
fn seq() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..40)
}

proptest! {
    // 1000 cases: the alignment core is fast and these invariants are the
    // foundation everything else builds on.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn ratio_stays_in_unit_interval(a in seq(), b in seq()) {
        let ratio = SequenceMatcher::new(&a, &b).ratio();
        prop_assert!((0.0..=1.0).contains(&ratio), "ratio {} out of range", ratio);
    }

    #[test]
    fn self_alignment_is_identity(a in seq()) {
        let mut matcher = SequenceMatcher::new(&a, &a);
        prop_assert_eq!(matcher.ratio(), 1.0);

        let ops = matcher.opcodes();
        if a.is_empty() {
            prop_assert!(ops.is_empty());
        } else {
            prop_assert_eq!(ops.len(), 1);
            prop_assert_eq!(ops[0].tag, OpTag::Equal);
            prop_assert_eq!((ops[0].a_start, ops[0].a_end), (0, a.len()));
            prop_assert_eq!((ops[0].b_start, ops[0].b_end), (0, a.len()));
        }
    }

    #[test]
    fn opcodes_partition_both_sequences(a in seq(), b in seq()) {
        let ops = SequenceMatcher::new(&a, &b).opcodes();

        let (mut i, mut j) = (0, 0);
        for op in &ops {
            prop_assert_eq!(op.a_start, i, "gap or overlap in seq1 coverage");
            prop_assert_eq!(op.b_start, j, "gap or overlap in seq2 coverage");
            prop_assert!(op.a_end >= op.a_start);
            prop_assert!(op.b_end >= op.b_start);
            i = op.a_end;
            j = op.b_end;
        }
        prop_assert_eq!(i, a.len());
        prop_assert_eq!(j, b.len());
    }

    #[test]
    fn equal_opcodes_reference_equal_ranges(a in seq(), b in seq()) {
        let ops = SequenceMatcher::new(&a, &b).opcodes();
        for op in ops.iter().filter(|op| op.tag == OpTag::Equal) {
            prop_assert_eq!(&a[op.a_start..op.a_end], &b[op.b_start..op.b_end]);
        }
    }

    #[test]
    fn round_trip_reconstructs_second_sequence(a in seq(), b in seq()) {
        let ops = SequenceMatcher::new(&a, &b).opcodes();
        prop_assert_eq!(reconstruct(&ops, &a, &b), b);
    }

    #[test]
    fn matching_blocks_strictly_increase(a in seq(), b in seq()) {
        let mut matcher = SequenceMatcher::new(&a, &b);
        let blocks = matcher.matching_blocks();
        for pair in blocks.windows(2) {
            prop_assert!(pair[0].a + pair[0].size <= pair[1].a);
            prop_assert!(pair[0].b + pair[0].size <= pair[1].b);
        }
        for block in blocks {
            prop_assert_eq!(
                &a[block.a..block.a + block.size],
                &b[block.b..block.b + block.size]
            );
        }
    }

    #[test]
    fn full_ratio_means_equal_sequences(a in seq(), b in seq()) {
        let ratio = SequenceMatcher::new(&a, &b).ratio();
        if (ratio - 1.0).abs() < 1e-12 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn alignment_is_deterministic(a in seq(), b in seq()) {
        let first = SequenceMatcher::new(&a, &b).opcodes();
        let second = SequenceMatcher::new(&a, &b).opcodes();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn popular_filter_preserves_partition_invariant(a in seq(), b in prop::collection::vec(0u8..4, 200..260)) {
        let config = AlignConfig::filtered();
        let ops = SequenceMatcher::with_config(&a, &b, &config).opcodes();

        let (mut i, mut j) = (0, 0);
        for op in &ops {
            prop_assert_eq!(op.a_start, i);
            prop_assert_eq!(op.b_start, j);
            i = op.a_end;
            j = op.b_end;
        }
        prop_assert_eq!(i, a.len());
        prop_assert_eq!(j, b.len());

        prop_assert_eq!(reconstruct(&ops, &a, &b), b);
    }
}
