use tracing::debug;

use crate::constants::NO_ENTITY_TAG;
use crate::error::{Error, Result};
use crate::model::{Entity, Span, StructuredDocument};

/// Builds the renderer-facing document.
///
/// Entries tagged `"O"` and entries whose span is invalid are dropped; the
/// remaining ones keep their relative order. An unmatched word therefore
/// just goes unhighlighted.
pub fn structure<T: AsRef<str>>(
    text: &str,
    tags: &[T],
    spans: &[Span],
    title: &str,
) -> Result<StructuredDocument> {
    if tags.len() != spans.len() {
        return Err(Error::Alignment(format!(
            "{} tags but {} spans",
            tags.len(),
            spans.len()
        )));
    }

    let ents: Vec<Entity> = tags
        .iter()
        .zip(spans)
        .filter(|&(tag, span)| tag.as_ref() != NO_ENTITY_TAG && span.is_valid())
        .map(|(tag, span)| Entity {
            start: span.start as usize,
            end: span.end as usize,
            label: tag.as_ref().to_string(),
        })
        .collect();

    debug!(
        entries = tags.len(),
        entities = ents.len(),
        "structured document"
    );

    Ok(StructuredDocument {
        text: text.to_string(),
        ents,
        title: title.to_string(),
    })
}
