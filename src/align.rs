use tracing::{debug, trace};

use crate::model::Span;

/// Byte to character offset conversion for positions that only move forward.
struct CharCursor<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> CharCursor<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte, "char cursor moved backwards");
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Locates each word of `words` in `text`, left to right.
///
/// Every word is matched literally (no pattern syntax). Among its
/// non-overlapping occurrences in `text`, the first one starting at or after
/// the end of the previous match is taken. Words with no such occurrence get
/// [`Span::INVALID`] and leave the search position where it was.
///
/// Returned offsets are character indices, one span per word.
pub fn align<S: AsRef<str>>(words: &[S], text: &str) -> Vec<Span> {
    let mut spans = Vec::with_capacity(words.len());
    let mut cursor = CharCursor::new(text);
    let mut base = 0;
    let mut misses = 0usize;

    for word in words {
        let word = word.as_ref();
        let found = text
            .match_indices(word)
            .map(|(start, matched)| (start, start + matched.len()))
            .find(|&(start, _)| start >= base);
        match found {
            Some((start_byte, end_byte)) => {
                let start = cursor.advance_to(start_byte);
                let end = cursor.advance_to(end_byte);
                spans.push(Span::new(start, end));
                base = end_byte;
            }
            None => {
                trace!(word, base, "word not found after cursor");
                misses += 1;
                spans.push(Span::INVALID);
            }
        }
    }

    debug!(words = words.len(), misses, "aligned words to text");
    spans
}

#[cfg(test)]
mod align_tests {
    use super::align;
    use crate::Span;

    fn spans(pairs: &[(i64, i64)]) -> Vec<Span> {
        pairs
            .iter()
            .map(|&(start, end)| Span { start, end })
            .collect()
    }

    #[test]
    fn aligns_words_in_order() {
        let text = "OpenAI is in San Francisco.";
        let result = align(&["OpenAI", "San", "Francisco"], text);
        assert_eq!(result, spans(&[(0, 6), (13, 16), (17, 26)]));
    }

    #[test]
    fn empty_words_give_empty_result() {
        let words: [&str; 0] = [];
        assert!(align(&words, "anything").is_empty());
    }

    #[test]
    fn repeated_word_does_not_rematch_consumed_text() {
        let text = "the cat and the dog";
        let result = align(&["the", "cat", "the", "dog"], text);
        assert_eq!(result, spans(&[(0, 3), (4, 7), (12, 15), (16, 19)]));
    }

    #[test]
    fn miss_keeps_cursor_in_place() {
        let text = "alpha beta gamma";
        let result = align(&["alpha", "delta", "beta"], text);
        assert_eq!(result, spans(&[(0, 5), (-1, -1), (6, 10)]));
    }

    #[test]
    fn word_before_cursor_is_a_miss() {
        let text = "beta alpha";
        let result = align(&["alpha", "beta"], text);
        assert_eq!(result, spans(&[(5, 10), (-1, -1)]));
    }

    #[test]
    fn metacharacters_are_literal() {
        let text = "cost is $5.00 (approx.) a+b";
        let result = align(&["$5.00", "(approx.)", "a+b"], text);
        assert_eq!(result, spans(&[(8, 13), (14, 23), (24, 27)]));
        let dot = align(&["."], "abc");
        assert_eq!(dot, vec![Span::INVALID]);
    }

    #[test]
    fn offsets_are_characters_not_bytes() {
        let text = "Zoë lives in Köln.";
        let result = align(&["Zoë", "Köln"], text);
        assert_eq!(result, spans(&[(0, 3), (13, 17)]));
        let chars: Vec<char> = text.chars().collect();
        let word: String = chars[13..17].iter().collect();
        assert_eq!(word, "Köln");
    }

    #[test]
    fn empty_word_is_zero_width_at_cursor() {
        let result = align(&["ab", "", "cd"], "ab cd");
        assert_eq!(result, spans(&[(0, 2), (2, 2), (3, 5)]));
        assert!(!result[1].is_valid());
    }

    #[test]
    fn overlapping_occurrence_behind_cursor_is_skipped() {
        // Non-overlapping scan of "aa" over "aaa" only yields 0..2.
        let result = align(&["a", "aa"], "aaa");
        assert_eq!(result, spans(&[(0, 1), (-1, -1)]));
    }
}
