//! Sequence alignment core.
//!
//! Implements longest-common-contiguous-block alignment between two ordered
//! sequences of comparable elements, the edit-opcode partition derived from
//! the found blocks, and the normalized match ratio. The same matcher is
//! reused at character, token, and line granularity by the scorer.
//!
//! # Algorithm
//!
//! A position index maps each distinct element of the second sequence to
//! its ordered occurrence positions. Within a sub-range, the single longest
//! common contiguous block is found by scanning the first sequence once and
//! carrying, per end position in the second sequence, the length of the run
//! ending there from the previous row. Remaining sub-ranges on either side
//! of the best block are processed from an explicit work-list; recursion
//! depth is never tied to input size.
//!
//! Among equal-length longest matches the one starting earliest in the
//! first sequence wins, then the one starting earliest in the second, so
//! alignment is deterministic and leftmost-biased.

mod config;

pub use config::AlignConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A maximal run of identical elements found in both sequences.
///
/// `seq1[a..a + size] == seq2[b..b + size]`. Blocks returned for one
/// comparison are non-overlapping and strictly increasing in both `a`
/// and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBlock {
    /// Start position in the first sequence
    pub a: usize,
    /// Start position in the second sequence
    pub b: usize,
    /// Number of matching elements
    pub size: usize,
}

/// Edit operation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    /// Ranges are identical
    Equal,
    /// Range in seq1 was replaced by range in seq2
    Replace,
    /// Range in seq1 has no counterpart in seq2
    Delete,
    /// Range in seq2 has no counterpart in seq1
    Insert,
}

impl OpTag {
    /// Lowercase tag name, as used in report output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }
}

impl std::fmt::Display for OpTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One edit instruction with half-open source and target ranges.
///
/// The ordered opcode list for a comparison exactly partitions
/// `[0, len(seq1))` and `[0, len(seq2))`: consecutive ranges abut with no
/// gap or overlap, the first ranges start at 0 and the last end at the
/// sequence lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

/// Block-matching sequence aligner.
///
/// Generic over any element type supporting equality and hashing; used with
/// `char`, `String` tokens, and line slices. The position index over the
/// second sequence is built once at construction.
pub struct SequenceMatcher<'s, T: Eq + Hash> {
    a: &'s [T],
    b: &'s [T],
    b2j: HashMap<&'s T, Vec<usize>>,
    blocks: Option<Vec<MatchBlock>>,
}

impl<'s, T: Eq + Hash> SequenceMatcher<'s, T> {
    /// Create a matcher with the default (exact) alignment policy.
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        Self::with_config(a, b, &AlignConfig::default())
    }

    /// Create a matcher with an explicit alignment policy.
    pub fn with_config(a: &'s [T], b: &'s [T], config: &AlignConfig) -> Self {
        let mut b2j: HashMap<&'s T, Vec<usize>> = HashMap::new();
        for (j, elem) in b.iter().enumerate() {
            b2j.entry(elem).or_default().push(j);
        }

        if let Some(threshold) = config.popular_threshold(b.len()) {
            b2j.retain(|_, positions| positions.len() <= threshold);
        }

        Self {
            a,
            b,
            b2j,
            blocks: None,
        }
    }

    /// Find the single longest common contiguous block within
    /// `a[alo..ahi]` × `b[blo..bhi]`.
    ///
    /// Returns a zero-size block anchored at `(alo, blo)` when the ranges
    /// share no element. Among equal-length candidates the earliest start
    /// in `a` wins, then the earliest start in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let mut best_a = alo;
        let mut best_b = blo;
        let mut best_size = 0;

        // Length of the matching run ending at each b-position, carried
        // from the previous a-position so extension is incremental.
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                    } else {
                        1
                    };
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_a = i + 1 - k;
                        best_b = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Extend over elements missing from the index (dropped by the
        // popular-element filter) so the block stays maximal.
        if best_size > 0 {
            while best_a > alo && best_b > blo && self.a[best_a - 1] == self.b[best_b - 1] {
                best_a -= 1;
                best_b -= 1;
                best_size += 1;
            }
            while best_a + best_size < ahi
                && best_b + best_size < bhi
                && self.a[best_a + best_size] == self.b[best_b + best_size]
            {
                best_size += 1;
            }
        }

        MatchBlock {
            a: best_a,
            b: best_b,
            size: best_size,
        }
    }

    /// Ordered list of maximal matching blocks.
    ///
    /// Sub-ranges are processed from an explicit work-list; memory is
    /// bounded by the number of blocks rather than by recursion depth.
    pub fn matching_blocks(&mut self) -> &[MatchBlock] {
        if self.blocks.is_none() {
            self.blocks = Some(self.compute_matching_blocks());
        }
        self.blocks.as_deref().unwrap_or_default()
    }

    fn compute_matching_blocks(&self) -> Vec<MatchBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut found: Vec<MatchBlock> = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size > 0 {
                if alo < block.a && blo < block.b {
                    queue.push((alo, block.a, blo, block.b));
                }
                if block.a + block.size < ahi && block.b + block.size < bhi {
                    queue.push((block.a + block.size, ahi, block.b + block.size, bhi));
                }
                found.push(block);
            }
        }

        found.sort_unstable_by_key(|blk| (blk.a, blk.b));

        // Collapse adjacent blocks into single maximal runs.
        let mut merged: Vec<MatchBlock> = Vec::with_capacity(found.len());
        for block in found {
            match merged.last_mut() {
                Some(prev)
                    if prev.a + prev.size == block.a && prev.b + prev.size == block.b =>
                {
                    prev.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged
    }

    /// Match ratio in `[0, 1]`: `2*M / T` where `M` is the total matched
    /// element count and `T` the combined sequence length. Two empty
    /// sequences are identical by definition (`T == 0` yields `1.0`).
    pub fn ratio(&mut self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|blk| blk.size).sum();
        2.0 * matched as f64 / total as f64
    }

    /// Derive the ordered edit-opcode partition from the matching blocks.
    ///
    /// Gaps between consecutive blocks become `replace`, `delete`, or
    /// `insert` opcodes; each block becomes one `equal` opcode. The list is
    /// empty only when both sequences are empty.
    pub fn opcodes(&mut self) -> Vec<Opcode> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);

        // Terminal sentinel flushes the trailing gap.
        let sentinel = MatchBlock {
            a: la,
            b: lb,
            size: 0,
        };
        let blocks: Vec<MatchBlock> = self
            .matching_blocks()
            .iter()
            .copied()
            .chain(std::iter::once(sentinel))
            .collect();

        for block in blocks {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                result.push(Opcode {
                    tag,
                    a_start: i,
                    a_end: block.a,
                    b_start: j,
                    b_end: block.b,
                });
            }
            if block.size > 0 {
                result.push(Opcode {
                    tag: OpTag::Equal,
                    a_start: block.a,
                    a_end: block.a + block.size,
                    b_start: block.b,
                    b_end: block.b + block.size,
                });
            }
            i = block.a + block.size;
            j = block.b + block.size;
        }
        result
    }
}

/// Align two sequences and return the matching blocks with their ratio.
pub fn align<T: Eq + Hash>(a: &[T], b: &[T]) -> (Vec<MatchBlock>, f64) {
    let mut matcher = SequenceMatcher::new(a, b);
    let ratio = matcher.ratio();
    (matcher.matching_blocks().to_vec(), ratio)
}

/// Match ratio of two sequences under the default alignment policy.
pub fn ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
