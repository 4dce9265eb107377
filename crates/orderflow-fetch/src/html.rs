//! Best-effort HTML-to-text sanitizer for product descriptions.

use std::sync::OnceLock;

use regex::Regex;

static TAG_RE: OnceLock<Regex> = OnceLock::new();

/// Strips HTML tags and decodes a fixed set of named entities.
///
/// This is a display sanitizer, not an HTML parser: tags are removed by
/// pattern match, only `&nbsp;` `&amp;` `&lt;` `&gt;` `&quot;` `&#39;` are
/// decoded, and anything else passes through intact. The result is trimmed.
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

    tag_re
        .replace_all(html, "")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_amp() {
        assert_eq!(strip_html_tags("<p>A &amp; B</p>"), "A & B");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(strip_html_tags(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html_tags("waterproof tattoo"), "waterproof tattoo");
    }

    #[test]
    fn nested_tags_and_attributes_are_removed() {
        assert_eq!(
            strip_html_tags(r#"<div class="desc"><strong>Bold</strong> move</div>"#),
            "Bold move"
        );
    }

    #[test]
    fn decodes_fixed_entity_set() {
        assert_eq!(
            strip_html_tags("&lt;tag&gt; &quot;q&quot; it&#39;s a&nbsp;b"),
            "<tag> \"q\" it's a b"
        );
    }

    #[test]
    fn unknown_entities_are_left_intact() {
        assert_eq!(strip_html_tags("caf&eacute; &copy;"), "caf&eacute; &copy;");
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(strip_html_tags("  <p> padded </p>  "), "padded");
    }

    #[test]
    fn multiline_markup_collapses_to_text() {
        let html = "<h1>Title</h1>\n<p>Body &amp; soul</p>";
        assert_eq!(strip_html_tags(html), "Title\nBody & soul");
    }
}
