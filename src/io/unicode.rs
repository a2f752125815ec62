//! Unicode utilities for text processing.
//!
//! Helpers for character-offset arithmetic, grapheme-safe truncation,
//! and the sentence boundary rule used by the semantic strategy.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of every character boundary in `s`, including `s.len()`.
///
/// Entry `i` is the byte position of the `i`-th character, so a slice
/// covering characters `a..b` is `&s[offsets[a]..offsets[b]]`. This is
/// what lets offset-based chunking count in characters while slicing at
/// valid byte boundaries.
#[must_use]
pub fn char_byte_offsets(s: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    offsets.push(s.len());
    offsets
}

/// Truncates a string at a grapheme cluster boundary.
///
/// Grapheme clusters are user-perceived characters, which may consist
/// of multiple Unicode code points (e.g., emoji with skin tone
/// modifiers), so this never cuts a visible character in half.
///
/// # Arguments
///
/// * `s` - The string to truncate.
/// * `max_graphemes` - Maximum number of grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max_graphemes: usize) -> &str {
    let mut end_byte = 0;

    for (count, grapheme) in s.graphemes(true).enumerate() {
        if count >= max_graphemes {
            break;
        }
        end_byte += grapheme.len();
    }

    &s[..end_byte]
}

/// Splits text into sentences.
///
/// A split point follows `.`, `!` or `?` when the next byte is
/// whitespace (or end of text); the whitespace run is consumed as the
/// separator and not retained in either sentence.
///
/// # Examples
///
/// ```
/// use textchunk_rs::io::split_sentences;
///
/// let sentences = split_sentences("Hi there. How are you?");
/// assert_eq!(sentences, vec!["Hi there.", "How are you?"]);
/// ```
#[must_use]
pub fn split_sentences(s: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let bytes = s.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?')
            && (i + 1 >= bytes.len() || bytes[i + 1].is_ascii_whitespace())
        {
            let end = i + 1;
            if end > start {
                sentences.push(&s[start..end]);
            }
            // Consume the separating whitespace run
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            start = i;
            continue;
        }
        i += 1;
    }

    if start < s.len() {
        sentences.push(&s[start..]);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_byte_offsets_ascii() {
        let offsets = char_byte_offsets("abc");
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_char_byte_offsets_multibyte() {
        // 'a' = 1 byte, '世' = 3 bytes, 'b' = 1 byte
        let offsets = char_byte_offsets("a世b");
        assert_eq!(offsets, vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_char_byte_offsets_empty() {
        assert_eq!(char_byte_offsets(""), vec![0]);
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("Hello", 3), "Hel");
        assert_eq!(truncate_graphemes("世界!", 2), "世界");
        assert_eq!(truncate_graphemes("Hello", 10), "Hello");
    }

    #[test]
    fn test_split_sentences() {
        let text = "Hello world. How are you? I am fine!";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_split_sentences_no_final_punct() {
        let text = "First sentence. Second part";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["First sentence.", "Second part"]);
    }

    #[test]
    fn test_split_sentences_no_punct_at_all() {
        let text = "no terminal punctuation here";
        assert_eq!(split_sentences(text), vec![text]);
    }

    #[test]
    fn test_split_sentences_punct_without_whitespace() {
        // "3.14" must not split: the '.' is not followed by whitespace
        let text = "Pi is 3.14 exactly. Or not.";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["Pi is 3.14 exactly.", "Or not."]);
    }

    #[test]
    fn test_split_sentences_consumes_whitespace_run() {
        let text = "One.   Two.";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["One.", "Two."]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
    }
}
