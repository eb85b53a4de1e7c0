//! Line splitting that round-trips exactly.

/// Split text into lines on `'\n'` only.
///
/// No trimming and no `\r` normalization: joining the result with `'\n'`
/// reproduces the input byte-for-byte, which the differ and the round-trip
/// guarantee both rely on. A trailing newline shows up as a final empty
/// line; the empty text maps to an empty sequence.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_without_trailing_newline() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_with_trailing_newline() {
        // The trailing newline becomes a final empty line
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_preserves_carriage_returns() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_split_join_round_trip() {
        for text in ["", "a", "a\n", "a\nb", "a\nb\n", "\n", "\n\n", "a\r\nb\r\n"] {
            assert_eq!(split_lines(text).join("\n"), text, "input {:?}", text);
        }
    }
}
