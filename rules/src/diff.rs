//! Line diffing between buffer snapshots.
//!
//! The engine never trusts a client's description of what changed: it takes
//! the old and new buffer contents and extracts the added text itself. Both
//! snapshots are immutable borrows for the duration of one call.
//!
//! Lines are compared without their terminators, so a final line that merely
//! gains a trailing newline when text is appended below it does not count as
//! changed. Added text is emitted verbatim from the new buffer.

use similar::{ChangeTag, TextDiff};

/// Concatenate, in document order, the text of every line the new buffer
/// added relative to the old one.
///
/// Removed and unchanged lines are discarded; the result is the sole input
/// to classification downstream.
#[must_use]
pub fn diff_added(old_text: &str, new_text: &str) -> String {
    let old_lines: Vec<&str> = old_text.split_inclusive('\n').collect();
    let new_lines: Vec<&str> = new_text.split_inclusive('\n').collect();
    let old_keys: Vec<&str> = old_lines.iter().map(|line| line_key(line)).collect();
    let new_keys: Vec<&str> = new_lines.iter().map(|line| line_key(line)).collect();

    let diff = TextDiff::from_slices(&old_keys, &new_keys);

    let mut added = String::new();
    for change in diff.iter_all_changes() {
        if change.tag() == ChangeTag::Insert {
            if let Some(index) = change.new_index() {
                added.push_str(new_lines[index]);
            }
        }
    }

    added
}

/// Compute diff stats (added and removed line counts) between old and new
/// content.
#[must_use]
pub fn diff_stats(old_text: &str, new_text: &str) -> (u32, u32) {
    let old_keys: Vec<&str> = old_text.split_inclusive('\n').map(line_key).collect();
    let new_keys: Vec<&str> = new_text.split_inclusive('\n').map(line_key).collect();

    let diff = TextDiff::from_slices(&old_keys, &new_keys);

    let mut additions: u32 = 0;
    let mut deletions: u32 = 0;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => additions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    (additions, deletions)
}

/// A line's identity for diffing: its content without the terminator.
fn line_key(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_buffers_add_nothing() {
        let text = "let a = 1;\nlet b = 2;\n";
        assert_eq!(diff_added(text, text), "");
    }

    #[test]
    fn empty_old_buffer_adds_everything() {
        let text = "for (let i = 0; i < 3; i++) {\n}\n";
        assert_eq!(diff_added("", text), text);
        let unterminated = "let a = 1;\nlet b = 2;";
        assert_eq!(diff_added("", unterminated), unterminated);
    }

    #[test]
    fn added_lines_come_back_in_document_order() {
        let old = "let a = 1;\nlet c = 3;\n";
        let new = "let a = 1;\nlet b = 2;\nlet c = 3;\nlet d = 4;\n";
        assert_eq!(diff_added(old, new), "let b = 2;\nlet d = 4;\n");
    }

    #[test]
    fn removed_lines_are_discarded() {
        let old = "let a = 1;\nlet b = 2;\n";
        let new = "let b = 2;\n";
        assert_eq!(diff_added(old, new), "");
    }

    #[test]
    fn appending_below_an_unterminated_line_adds_only_the_new_line() {
        let old = "let a = 1;";
        let new = "let a = 1;\nlet b = 2;";
        assert_eq!(diff_added(old, new), "let b = 2;");
    }

    #[test]
    fn stats_count_both_directions() {
        let old = "a\nb\nc\n";
        let new = "a\nx\nc\ny\n";
        assert_eq!(diff_stats(old, new), (2, 1));
    }
}
