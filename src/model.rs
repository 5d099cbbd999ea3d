use serde::Serialize;

/// Character span of a word inside the original text.
///
/// Offsets are character indices (Rust `str.chars()` index space), not byte
/// offsets. A word that could not be located carries [`Span::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Inclusive start offset, or `-1`.
    pub start: i64,
    /// Exclusive end offset, or `-1`.
    pub end: i64,
}

impl Span {
    /// Sentinel emitted for words that were not found in the text.
    pub const INVALID: Span = Span { start: -1, end: -1 };

    /// Creates a span from character offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start as i64,
            end: end as i64,
        }
    }

    /// Returns `true` for a located, non-empty span.
    ///
    /// Besides the sentinel, a zero-width match (an empty word) and a merged
    /// run whose last word was not found (`end < start`) are invalid too.
    pub fn is_valid(&self) -> bool {
        self.start >= 0 && self.end > self.start
    }
}

/// One token-label record produced by an upstream tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Token surface form.
    pub word: String,
    /// Entity label, or `"O"`.
    pub tag: String,
}

impl Annotation {
    /// Creates an annotation from a word and its tag.
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl<W: Into<String>, T: Into<String>> From<(W, T)> for Annotation {
    fn from((word, tag): (W, T)) -> Self {
        Annotation::new(word, tag)
    }
}

/// Highlighted region handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// Entity label, always present in the palette when rendered.
    pub label: String,
}

/// Renderer-ready document: the raw text plus its highlighted entities.
///
/// `ents` is sorted by `start` and never contains `"O"` or unmatched words.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StructuredDocument {
    /// Original untokenized text.
    pub text: String,
    /// Entities in left-to-right order.
    pub ents: Vec<Entity>,
    /// Optional heading shown above the text.
    pub title: String,
}

impl StructuredDocument {
    /// Serializes the document as compact JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parallel tag/word/span sequences after adjacent runs were collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Merged {
    /// One tag per run.
    pub tags: Vec<String>,
    /// Run words joined with a single space.
    pub words: Vec<String>,
    /// Span from the first word's start to the last word's end.
    pub spans: Vec<Span>,
}

impl Merged {
    /// Number of runs.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` when there are no runs.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Merged fragments carrying `tag`, in text order.
    pub fn words_tagged(&self, tag: &str) -> Vec<&str> {
        self.tags
            .iter()
            .zip(&self.words)
            .filter(|(candidate, _)| candidate.as_str() == tag)
            .map(|(_, word)| word.as_str())
            .collect()
    }
}
