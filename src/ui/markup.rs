use std::sync::OnceLock;

use regex::Regex;

/// Renders server-supplied text that may carry inline HTML as plain text.
/// Text without tags or entities is returned unchanged.
pub fn plain_text(text: &str) -> String {
    if !looks_like_markup(text) {
        return text.to_string();
    }

    let normalized = expand_anchor_tags(text);
    html2text::from_read(normalized.as_bytes(), 1000)
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn looks_like_markup(text: &str) -> bool {
    static MARKUP_RE: OnceLock<Regex> = OnceLock::new();
    let pattern = MARKUP_RE.get_or_init(|| {
        Regex::new(r"(?s)<[a-zA-Z/!][^>]*>|&[a-zA-Z]+;|&#[0-9]+;")
            .expect("invalid markup regex")
    });
    pattern.is_match(text)
}

fn expand_anchor_tags(html: &str) -> String {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    let regex = LINK_RE.get_or_init(|| {
        Regex::new(r#"(?is)<a\s+[^>]*?href=["']([^"']+)["'][^>]*>(.*?)</a>"#)
            .expect("invalid anchor regex")
    });

    regex
        .replace_all(html, |caps: &regex::Captures| {
            let url = caps.get(1).map(|m| m.as_str()).unwrap_or_default().trim();
            let text = caps.get(2).map(|m| m.as_str()).unwrap_or_default().trim();

            if text.is_empty() || url.eq_ignore_ascii_case(text) {
                url.to_string()
            } else {
                format!("{text} ({url})")
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_description_is_untouched() {
        assert_eq!(plain_text("Learn chess & strategy"), "Learn chess & strategy");
    }

    #[test]
    fn tags_are_stripped() {
        let text = plain_text("<p>Learn chess</p>");
        assert!(text.contains("Learn chess"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn script_tags_do_not_survive() {
        let text = plain_text("Chess<script>alert(1)</script>");
        assert!(!text.contains("<script>"));
    }

    #[test]
    fn anchor_keeps_url() {
        let text = plain_text(r#"See <a href="https://example.com">the rules</a>."#);
        assert!(text.contains("the rules (https://example.com)"));
    }
}
