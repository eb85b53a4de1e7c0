//! Minimal edit script between two line sequences.

use similar::{DiffOp, DiffTag, TextDiff};

/// An ordered sequence of deltas transforming one line sequence into another.
///
/// Thin wrapper over [`similar::TextDiff`] computed on pre-split lines, so
/// delta values never carry line terminators. Produced once per evaluation
/// and never mutated. The underlying Myers diff is deterministic: identical
/// inputs yield identical delta boundaries on every run.
pub struct EditScript<'a> {
    diff: TextDiff<'a, 'a, 'a, str>,
}

impl<'a> EditScript<'a> {
    /// Compute the edit script from `old_lines` to `new_lines`.
    ///
    /// Line content is compared byte-for-byte; there is no trimming or
    /// normalization. An empty `old_lines` produces a single insert-all
    /// delta, an empty `new_lines` a single delete-all delta, and identical
    /// sequences produce no deltas at all.
    pub fn compute(old_lines: &'a [&'a str], new_lines: &'a [&'a str]) -> Self {
        Self {
            diff: TextDiff::from_slices(old_lines, new_lines),
        }
    }

    /// Number of deltas (insert/delete/replace operations) in the script.
    pub fn operation_count(&self) -> usize {
        self.diff
            .ops()
            .iter()
            .filter(|op| op.tag() != DiffTag::Equal)
            .count()
    }

    /// Whether the script describes no change at all.
    pub fn is_identity(&self) -> bool {
        self.operation_count() == 0
    }

    /// All diff operations, including unchanged ranges.
    pub fn ops(&self) -> &[DiffOp] {
        self.diff.ops()
    }

    /// Operations grouped into hunks with `context_lines` of surrounding
    /// context. Deltas whose context windows overlap end up in one group.
    pub fn grouped_ops(&self, context_lines: usize) -> Vec<Vec<DiffOp>> {
        self.diff.grouped_ops(context_lines)
    }

    pub(crate) fn text_diff(&self) -> &TextDiff<'a, 'a, 'a, str> {
        &self.diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_yield_empty_script() {
        let lines = ["fn main() {", "    run();", "}"];
        let script = EditScript::compute(&lines, &lines);
        assert!(script.is_identity());
        assert_eq!(script.operation_count(), 0);
    }

    #[test]
    fn test_empty_old_is_single_insert() {
        let new_lines = ["a", "b", "c"];
        let script = EditScript::compute(&[], &new_lines);
        assert_eq!(script.operation_count(), 1);
        let op = script.ops()[0];
        assert_eq!(op.tag(), DiffTag::Insert);
        assert_eq!(op.new_range(), 0..3);
    }

    #[test]
    fn test_empty_new_is_single_delete() {
        let old_lines = ["a", "b", "c"];
        let script = EditScript::compute(&old_lines, &[]);
        assert_eq!(script.operation_count(), 1);
        let op = script.ops()[0];
        assert_eq!(op.tag(), DiffTag::Delete);
        assert_eq!(op.old_range(), 0..3);
    }

    #[test]
    fn test_single_line_change_is_one_delta() {
        let old_lines = ["a", "b", "c"];
        let new_lines = ["a", "B", "c"];
        let script = EditScript::compute(&old_lines, &new_lines);
        assert_eq!(script.operation_count(), 1);
    }

    #[test]
    fn test_no_whitespace_normalization() {
        let old_lines = ["a "];
        let new_lines = ["a"];
        let script = EditScript::compute(&old_lines, &new_lines);
        assert_eq!(script.operation_count(), 1);
    }

    #[test]
    fn test_deterministic_boundaries() {
        let old_lines = ["a", "b", "c", "d", "e"];
        let new_lines = ["a", "x", "c", "y", "e"];
        let first = EditScript::compute(&old_lines, &new_lines);
        let second = EditScript::compute(&old_lines, &new_lines);
        assert_eq!(first.ops(), second.ops());
    }
}
