//! Diff reporting.
//!
//! Turns the edit-opcode partition into flat human-readable diff lines and
//! structured [`DiffRecord`]s. Line mode emits one `- `/`+ ` line per
//! removed/added line; full-text mode emits one descriptive line per edit
//! with character offsets.

mod render;

pub use render::{render_json, render_summary, ReportFormat};

use crate::align::{OpTag, Opcode};
use serde::{Deserialize, Serialize};

/// Structured difference entry for one non-`equal` opcode.
///
/// Line ranges are 1-based and inclusive; a range whose start exceeds its
/// end is empty (the opcode touched nothing on that side). Character
/// spans are 0-based half-open offsets into the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiffRecord {
    /// Line-mode record with 1-based inclusive line ranges
    Line {
        #[serde(rename = "type")]
        tag: OpTag,
        doc1_lines: (usize, usize),
        doc2_lines: (usize, usize),
        doc1_content: Vec<String>,
        doc2_content: Vec<String>,
    },
    /// Full-text-mode record with character offsets
    Full {
        #[serde(rename = "type")]
        tag: OpTag,
        doc1_span: (usize, usize),
        doc2_span: (usize, usize),
        doc1_content: String,
        doc2_content: String,
    },
}

impl DiffRecord {
    /// The edit tag of this record.
    #[must_use]
    pub const fn tag(&self) -> OpTag {
        match self {
            Self::Line { tag, .. } | Self::Full { tag, .. } => *tag,
        }
    }
}

/// A rendered diff: flat display lines plus structured records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffReport {
    /// Flat diff lines in opcode order
    pub lines: Vec<String>,
    /// One record per non-`equal` opcode, in opcode order
    pub records: Vec<DiffRecord>,
}

impl DiffReport {
    /// Whether the compared sequences were identical.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build a line-mode report from line-level opcodes.
///
/// For each non-`equal` opcode, every removed line is emitted as
/// `"- <line>"` followed by every added line as `"+ <line>"`, preserving
/// opcode order.
#[must_use]
pub fn line_report(opcodes: &[Opcode], lines1: &[String], lines2: &[String]) -> DiffReport {
    let mut report = DiffReport::default();
    for op in opcodes {
        if op.tag == OpTag::Equal {
            continue;
        }
        let removed = &lines1[op.a_start..op.a_end];
        let added = &lines2[op.b_start..op.b_end];
        report.lines.extend(removed.iter().map(|l| format!("- {l}")));
        report.lines.extend(added.iter().map(|l| format!("+ {l}")));
        report.records.push(DiffRecord::Line {
            tag: op.tag,
            doc1_lines: (op.a_start + 1, op.a_end),
            doc2_lines: (op.b_start + 1, op.b_end),
            doc1_content: removed.to_vec(),
            doc2_content: added.to_vec(),
        });
    }
    report
}

/// Build a full-text-mode report from character-level opcodes.
///
/// `chars1`/`chars2` must be the character sequences the opcodes were
/// computed over. Each non-`equal` opcode yields one descriptive line,
/// `"<TAG> at [i1,i2) in doc1, [j1,j2) in doc2"`, and one record carrying
/// the literal substrings.
#[must_use]
pub fn full_report(opcodes: &[Opcode], chars1: &[char], chars2: &[char]) -> DiffReport {
    let mut report = DiffReport::default();
    for op in opcodes {
        if op.tag == OpTag::Equal {
            continue;
        }
        report.lines.push(format!(
            "{} at [{},{}) in doc1, [{},{}) in doc2",
            op.tag.name().to_uppercase(),
            op.a_start,
            op.a_end,
            op.b_start,
            op.b_end
        ));
        report.records.push(DiffRecord::Full {
            tag: op.tag,
            doc1_span: (op.a_start, op.a_end),
            doc2_span: (op.b_start, op.b_end),
            doc1_content: chars1[op.a_start..op.a_end].iter().collect(),
            doc2_content: chars2[op.b_start..op.b_end].iter().collect(),
        });
    }
    report
}

/// Reconstruct the second sequence from the first plus the recorded edits.
///
/// Concatenates, per opcode in order, `seq1[a_start..a_end]` for `equal`
/// opcodes and `seq2[b_start..b_end]` for all others. The result is
/// guaranteed to equal `seq2` exactly for any opcode list produced by the
/// aligner.
#[must_use]
pub fn reconstruct<T: Clone>(opcodes: &[Opcode], seq1: &[T], seq2: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(seq2.len());
    for op in opcodes {
        match op.tag {
            OpTag::Equal => result.extend_from_slice(&seq1[op.a_start..op.a_end]),
            _ => result.extend_from_slice(&seq2[op.b_start..op.b_end]),
        }
    }
    result
}
