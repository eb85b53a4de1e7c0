//! Reconstruct the target line sequence from a source and an edit script.

use similar::{ChangeTag, DiffTag};

use crate::differ::EditScript;

/// Apply an edit script to the source lines it was computed from.
///
/// Unchanged ranges are copied out of `old_lines`; inserted lines come from
/// the script's deltas. The result is exactly the target line sequence,
/// which is what the round-trip guarantee on generated patches rests on.
pub fn apply_edit_script(old_lines: &[&str], script: &EditScript<'_>) -> Vec<String> {
    let mut out = Vec::new();
    for op in script.ops() {
        match op.tag() {
            DiffTag::Equal => {
                out.extend(old_lines[op.old_range()].iter().map(|s| s.to_string()));
            }
            DiffTag::Delete => {}
            DiffTag::Insert | DiffTag::Replace => {
                for change in script.text_diff().iter_changes(op) {
                    if change.tag() == ChangeTag::Insert {
                        out.push(change.value().to_string());
                    }
                }
            }
        }
    }
    out
}
