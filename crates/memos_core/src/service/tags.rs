//! Tag marker extraction.
//!
//! A tag is `#` followed by a run of characters that are neither whitespace
//! nor another `#`. Output keeps first-appearance order and original case.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([^\s#]+)").expect("valid tag regex"));

/// Returns the tags found in one memo body, in order, without duplicates.
pub fn extract_tags(content: &str) -> Vec<String> {
    collect_tags(std::iter::once(content))
}

/// Returns the tags found across many memo bodies.
///
/// Tags are trimmed, empty values are dropped, and each tag appears once at
/// the position of its first occurrence.
pub fn collect_tags<'a>(contents: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for content in contents {
        for caps in TAG_RE.captures_iter(content) {
            let Some(tag) = caps.get(1).map(|m| m.as_str().trim()) else {
                continue;
            };
            if tag.is_empty() || !seen.insert(tag.to_string()) {
                continue;
            }
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{collect_tags, extract_tags};

    #[test]
    fn extracts_in_first_appearance_order() {
        assert_eq!(
            extract_tags("hello #world and #foo"),
            vec!["world".to_string(), "foo".to_string()]
        );
    }

    #[test]
    fn dedupes_across_memos_and_keeps_case() {
        let tags = collect_tags(["#Work note", "more #work and #Work", "#"]);
        assert_eq!(tags, vec!["Work".to_string(), "work".to_string()]);
    }

    #[test]
    fn adjacent_markers_split() {
        assert_eq!(
            extract_tags("#a#b"),
            vec!["a".to_string(), "b".to_string()]
        );
    }
}
