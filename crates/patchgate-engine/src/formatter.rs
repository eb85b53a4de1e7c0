//! Unified-diff rendering of an edit script.

use std::ops::Range;

use similar::ChangeTag;

use crate::config::EngineConfig;
use crate::differ::EditScript;

/// Render an edit script as unified-diff text.
///
/// The document starts with `---`/`+++` header lines naming the two sides
/// (labels come from the config), followed by one `@@` hunk per group of
/// deltas. Deltas whose context windows overlap are merged into a single
/// hunk. Lines are joined with a single `'\n'` and no trailing separator
/// is appended. Only line content is consulted here; byte-length accounting
/// is the caller's concern.
pub fn render_unified(script: &EditScript<'_>, config: &EngineConfig) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("--- {}", config.old_label));
    lines.push(format!("+++ {}", config.new_label));

    for group in script.grouped_ops(config.context_lines) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        lines.push(format!(
            "@@ -{} +{} @@",
            format_range(first.old_range().start..last.old_range().end),
            format_range(first.new_range().start..last.new_range().end),
        ));
        for op in &group {
            for change in script.text_diff().iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                lines.push(format!("{}{}", sign, change.value()));
            }
        }
    }

    lines.join("\n")
}

/// Format a 0-based line range as the 1-based `start,len` form used in hunk
/// headers. An empty range reports the line before the edit position, and a
/// length of one is left implicit, both per unified-diff convention.
fn format_range(range: Range<usize>) -> String {
    let len = range.len();
    let start = if len == 0 { range.start } else { range.start + 1 };
    if len == 1 {
        format!("{}", start)
    } else {
        format!("{},{}", start, len)
    }
}
