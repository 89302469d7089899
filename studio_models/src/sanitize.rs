//! Normalization applied to every piece of user supplied text before it is
//! validated.

/// Strips markup-significant and control characters from `text`.
///
/// - `<` and `>` are removed
/// - control characters (U+0000 to U+001F and U+007F) are removed, line
///   breaks and tabs included
/// - leading and trailing whitespace is trimmed
///
/// The result is a fixed point: `sanitize_text(&sanitize_text(s)) ==
/// sanitize_text(s)`.
pub fn sanitize_text(text: &str) -> String {
    let out = text
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\u{0000}'..='\u{001F}' | '\u{007F}'))
        .collect::<String>();

    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_angle_brackets() {
        assert_eq!(sanitize_text("<script>alert(1)</script>"), "scriptalert(1)/script");
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(sanitize_text("a\u{0000}b\u{0007}c\u{007F}d\te"), "abcde");
    }

    #[test]
    fn removes_line_breaks() {
        assert_eq!(sanitize_text("one\r\n\r\ntwo\n\n\nthree\rfour"), "onetwothreefour");
    }

    #[test]
    fn line_breaks_do_not_separate_words() {
        assert_eq!(sanitize_text("hi\nthere\nyo"), "hithereyo");
        assert_eq!(sanitize_text("one\n\u{0001}\n<> \ntwo"), "one two");
    }

    #[test]
    fn trims() {
        assert_eq!(sanitize_text("  \n Jane Doe \n "), "Jane Doe");
    }

    #[test]
    fn idempotent() {
        for input in [
            "",
            "   ",
            "Jane <b>Doe</b>",
            "Hello\r\n\r\n<>\u{0003}\nWorld",
            "\n\u{0001}\n",
            "  < >  padded  < > ",
            "Maternity — The Total Bump",
        ] {
            let once = sanitize_text(input);
            let twice = sanitize_text(&once);
            assert_eq!(once, twice, "input: {input:?}");
        }
    }
}
