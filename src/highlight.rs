use crate::escape::escape_text;
use similar::{DiffTag, TextDiff};

/// Character-level diff of a modified line pair.
///
/// Returns the old and new line as HTML fragments: unchanged runs are
/// escaped as-is, changed runs are wrapped in a `<span>` carrying
/// `highlight_class`. The class must already be attribute-safe. A side
/// with no characters in a changed region gets no span at all.
pub fn line_diff(old: &str, new: &str, highlight_class: &str) -> (String, String) {
    let diff = TextDiff::from_chars(old, new);
    let mut old_html = String::new();
    let mut new_html = String::new();

    for op in diff.ops() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        let old_part = diff.old_slices()[old_range].concat();
        let new_part = diff.new_slices()[new_range].concat();

        if tag == DiffTag::Equal {
            old_html.push_str(&escape_text(&old_part));
            new_html.push_str(&escape_text(&new_part));
        } else {
            push_highlight(&mut old_html, &old_part, highlight_class);
            push_highlight(&mut new_html, &new_part, highlight_class);
        }
    }

    (old_html, new_html)
}

fn push_highlight(out: &mut String, content: &str, class: &str) {
    if content.is_empty() {
        return;
    }
    out.push_str(&format!(
        r#"<span class="{class}">{}</span>"#,
        escape_text(content)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_prefix_stays_unhighlighted() {
        let (old, new) = line_diff("foobar", "foobaz", "hl");
        assert_eq!(old, r#"fooba<span class="hl">r</span>"#);
        assert_eq!(new, r#"fooba<span class="hl">z</span>"#);
    }

    #[test]
    fn nothing_in_common_is_fully_highlighted() {
        let (old, new) = line_diff("foo", "bar", "hl");
        assert_eq!(old, r#"<span class="hl">foo</span>"#);
        assert_eq!(new, r#"<span class="hl">bar</span>"#);
    }

    #[test]
    fn pure_insertion_adds_nothing_to_old_side() {
        let (old, new) = line_diff("ab", "aXb", "hl");
        assert_eq!(old, "ab");
        assert_eq!(new, r#"a<span class="hl">X</span>b"#);
    }

    #[test]
    fn identical_lines_have_no_spans() {
        let (old, new) = line_diff("same text", "same text", "hl");
        assert_eq!(old, "same&nbsp;text");
        assert_eq!(new, "same&nbsp;text");
    }

    #[test]
    fn highlighted_content_is_escaped() {
        let (old, new) = line_diff("a<b", "a>b", "hl");
        assert_eq!(old, r#"a<span class="hl">&lt;</span>b"#);
        assert_eq!(new, r#"a<span class="hl">&gt;</span>b"#);
    }

    #[test]
    fn multibyte_characters_are_aligned_per_char() {
        let (old, new) = line_diff("héllo", "hallo", "hl");
        assert_eq!(old, r#"h<span class="hl">é</span>llo"#);
        assert_eq!(new, r#"h<span class="hl">a</span>llo"#);
    }
}
