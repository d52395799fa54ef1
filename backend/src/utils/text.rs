// src/utils/text.rs

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Turns a topic key such as `content_ops` into `Content Ops`.
///
/// Every letter that follows a non-letter starts a new word, so
/// `e-commerce` becomes `E-Commerce` and `3d_assets` becomes `3D Assets`.
pub fn title_case(topic: &str) -> String {
    let mut out = String::with_capacity(topic.len());
    let mut prev_is_alpha = false;
    for ch in topic.replace('_', " ").chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }
    out
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// First `max` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  headless   cms\nnotes "), 3);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("content_ops"), "Content Ops");
        assert_eq!(title_case("dam"), "Dam");
        assert_eq!(title_case("e-commerce"), "E-Commerce");
        assert_eq!(title_case("3d_assets"), "3D Assets");
        assert_eq!(title_case("API_gateway"), "Api Gateway");
        assert_eq!(title_case("API_design"), "Api Design");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("great for developers, covers search"), "Great for developers, covers search");
        assert_eq!(capitalize("Covers DAM"), "Covers dam");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
