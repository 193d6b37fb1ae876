use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Bold emphasis marker (`**`)
    static ref BOLD_RE: Regex = Regex::new(r"\*\*").unwrap();

    /// 1-6 `#` at line start, whitespace, then the heading text
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+([^\n]+)").unwrap();

    /// `*` or `-` at line start followed by whitespace
    static ref BULLET_RE: Regex = Regex::new(r"(?m)^[ \t]*[*-][ \t]+([^\n]+)").unwrap();

    /// `<digits>.` at line start followed by whitespace
    static ref NUMBERED_RE: Regex = Regex::new(r"(?m)^[ \t]*(\d+\.)[ \t]+([^\n]+)").unwrap();

    /// Two or more line breaks
    static ref BLANK_RUN_RE: Regex = Regex::new(r"\n{2,}").unwrap();

    /// Three or more line breaks
    static ref EXCESS_BREAKS_RE: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Remove every `**` bold marker
pub fn strip_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "").into_owned()
}

/// `## Heading` -> `\n\nHeading\n\n`
pub fn format_headings(text: &str) -> String {
    HEADING_RE.replace_all(text, "\n\n${1}\n\n").into_owned()
}

/// `* item` / `- item` -> `\n- item\n`
pub fn format_bullets(text: &str) -> String {
    BULLET_RE.replace_all(text, "\n- ${1}\n").into_owned()
}

/// `3.   item` -> `\n3. item\n`
///
/// Only the marker on a single line is recognised; nesting and
/// multi-line list items are left as plain text.
pub fn format_numbered(text: &str) -> String {
    NUMBERED_RE.replace_all(text, "\n${1} ${2}\n").into_owned()
}

/// Collapse runs of blank lines down to a single blank line
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

/// Put a blank line between every pair of directly adjacent non-empty lines
pub fn space_paragraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut previous_non_empty = false;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if previous_non_empty && !line.is_empty() {
                out.push('\n');
            }
        }
        out.push_str(line);
        previous_non_empty = !line.is_empty();
    }

    out
}

/// Trim the result, then clamp any remaining 3+ line break run
pub fn finalize(text: &str) -> String {
    EXCESS_BREAKS_RE
        .replace_all(text.trim(), "\n\n")
        .into_owned()
}

/// Normalize loosely-Markdown model output into plain text
///
/// Pipeline (order matters, the spacing passes work on the
/// line structure produced by the marker passes):
/// 1. Strip `**` bold markers
/// 2. Headings -> text padded by blank lines
/// 3. Bullets -> `- ` prefix
/// 4. Numbered items -> `<n>. ` prefix
/// 5. Collapse blank-line runs
/// 6. Separate adjacent lines with a blank line
/// 7. Trim and clamp line-break runs
pub fn format_response_text(text: &str) -> String {
    let text = strip_bold(text);
    let text = format_headings(&text);
    let text = format_bullets(&text);
    let text = format_numbered(&text);
    let text = collapse_blank_lines(&text);
    let text = space_paragraphs(&text);
    finalize(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== step tests ====================

    #[test]
    fn test_strip_bold() {
        assert_eq!(strip_bold("**x**"), "x");
        assert_eq!(strip_bold("a **bold** and **more** text"), "a bold and more text");
        assert_eq!(strip_bold("*italic* stays"), "*italic* stays");
    }

    #[test]
    fn test_format_headings() {
        assert_eq!(format_headings("# Title"), "\n\nTitle\n\n");
        assert_eq!(format_headings("intro\n### Deep"), "intro\n\n\nDeep\n\n");
        assert_eq!(format_headings("###### Six"), "\n\nSix\n\n");
    }

    #[test]
    fn test_format_headings_ignores_non_headings() {
        // seven markers, no whitespace, or mid-line
        assert_eq!(format_headings("####### Seven"), "####### Seven");
        assert_eq!(format_headings("#hashtag"), "#hashtag");
        assert_eq!(format_headings("I like C# a lot"), "I like C# a lot");
    }

    #[test]
    fn test_format_bullets() {
        assert_eq!(format_bullets("* one"), "\n- one\n");
        assert_eq!(format_bullets("- two"), "\n- two\n");
        assert_eq!(format_bullets("  *   indented"), "\n- indented\n");
    }

    #[test]
    fn test_format_bullets_ignores_inline_dashes() {
        assert_eq!(format_bullets("a well-known fact"), "a well-known fact");
        assert_eq!(format_bullets("---"), "---");
        assert_eq!(format_bullets("*emphasis*"), "*emphasis*");
    }

    #[test]
    fn test_format_numbered() {
        assert_eq!(format_numbered("1. first"), "\n1. first\n");
        assert_eq!(format_numbered("12.    twelfth"), "\n12. twelfth\n");
    }

    #[test]
    fn test_format_numbered_ignores_decimals() {
        assert_eq!(format_numbered("pi is 3.14"), "pi is 3.14");
        assert_eq!(format_numbered("3.14 is pi"), "3.14 is pi");
    }

    #[test]
    fn test_mid_line_markers_stay_inline() {
        // markers only count at line start, so inline lists are not split
        assert_eq!(format_numbered("Steps: 1. mix 2. bake"), "Steps: 1. mix 2. bake");
        assert_eq!(format_bullets("pros - fast * cheap"), "pros - fast * cheap");
        assert_eq!(
            format_response_text("Steps: 1. mix 2. bake"),
            "Steps: 1. mix 2. bake"
        );
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn test_space_paragraphs() {
        assert_eq!(space_paragraphs("a\nb"), "a\n\nb");
        assert_eq!(space_paragraphs("a\n\nb"), "a\n\nb");
        // every adjacent pair is separated, not just every other one
        assert_eq!(space_paragraphs("a\nb\nc"), "a\n\nb\n\nc");
        assert_eq!(space_paragraphs("single"), "single");
    }

    #[test]
    fn test_finalize() {
        assert_eq!(finalize("\n\n  text  \n\n"), "text");
        assert_eq!(finalize("a\n\n\n\nb"), "a\n\nb");
    }

    // ==================== pipeline tests ====================

    #[test]
    fn test_golden_document() {
        let input = "# Title\n* item one\n* item two\n1. first\n2. second";
        assert_eq!(
            format_response_text(input),
            "Title\n\n- item one\n\n- item two\n\n1. first\n\n2. second"
        );
    }

    #[test]
    fn test_typical_model_output() {
        let input = "## **Photosynthesis**\n\nPlants convert light.\nThey need water.\n\n\n\n**Key steps:**\n* Light reactions\n* Calvin cycle\n";
        assert_eq!(
            format_response_text(input),
            "Photosynthesis\n\nPlants convert light.\n\nThey need water.\n\nKey steps:\n\n- Light reactions\n\n- Calvin cycle"
        );
    }

    #[test]
    fn test_bold_markers_removed() {
        let out = format_response_text("**x**");
        assert!(out.contains('x'));
        assert!(!out.contains("**"));
    }

    #[test]
    fn test_never_three_consecutive_newlines() {
        let inputs = [
            "# A\n\n\n\n## B\n\n\n* c\n\n\n\n1. d",
            "\n\n\n\nlead\n\n\n\n\ntrail\n\n\n",
            "- a\n- b\n- c\n# d\n1. e\n2. f\n\n\n\ng",
            "line\n \n \nline",
        ];
        for input in inputs {
            let out = format_response_text(input);
            assert!(!out.contains("\n\n\n"), "triple break in {:?}", out);
        }
    }

    #[test]
    fn test_idempotent_on_marker_free_input() {
        let inputs = [
            "plain paragraph",
            "first line\nsecond line\nthird line",
            "  padded  \n\n\n\nwith gaps\n",
            "numbers like 3.14 and well-known words",
        ];
        for input in inputs {
            let once = format_response_text(input);
            assert_eq!(format_response_text(&once), once);
        }
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = format_response_text("# Title\n* item one\n* item two\n1. first\n2. second");
        assert_eq!(format_response_text(&once), once);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(format_response_text(""), "");
        assert_eq!(format_response_text("  \n\n \t"), "");
    }
}
