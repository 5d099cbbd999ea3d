use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Merged, Span};

/// The run currently being accumulated.
struct Run {
    tag: String,
    word: String,
    span: Span,
}

impl Run {
    fn start(tag: &str, word: &str, span: Span) -> Self {
        Self {
            tag: tag.to_string(),
            word: word.to_string(),
            span,
        }
    }

    fn extend(&mut self, word: &str, span: Span) {
        self.word.push(' ');
        self.word.push_str(word);
        self.span.end = span.end;
    }

    fn flush_into(self, merged: &mut Merged) {
        merged.tags.push(self.tag);
        merged.words.push(self.word);
        merged.spans.push(self.span);
    }
}

/// Collapses consecutive entries that share a tag.
///
/// Words of a run are joined with a single space and its span runs from the
/// first entry's start to the last entry's end. Spans are expected in text
/// order; nothing is re-sorted. Tags are compared verbatim, so callers that
/// want some labels merged together map them to a shared label first.
pub fn merge<T, W>(tags: &[T], words: &[W], spans: &[Span]) -> Result<Merged>
where
    T: AsRef<str>,
    W: AsRef<str>,
{
    if tags.is_empty() {
        return Err(Error::Input("merge needs at least one entry".to_string()));
    }
    if tags.len() != words.len() || tags.len() != spans.len() {
        return Err(Error::Input(format!(
            "merge needs equal lengths, got {} tags, {} words, {} spans",
            tags.len(),
            words.len(),
            spans.len()
        )));
    }

    let mut merged = Merged::default();
    let mut run = Run::start(tags[0].as_ref(), words[0].as_ref(), spans[0]);

    for ((tag, word), span) in tags.iter().zip(words).zip(spans).skip(1) {
        let (tag, word): (&str, &str) = (tag.as_ref(), word.as_ref());
        if tag == run.tag {
            run.extend(word, *span);
        } else {
            run.flush_into(&mut merged);
            run = Run::start(tag, word, *span);
        }
    }
    run.flush_into(&mut merged);

    debug!(input = tags.len(), runs = merged.len(), "merged adjacent tags");
    Ok(merged)
}
