use std::fs;
use std::iter;
use std::path::Path;

use html_escape::encode_text;
use regex::{Captures, Regex};
use tracing::debug;

use crate::constants::{WRAPPER_CLOSE, WRAPPER_OPEN};
use crate::error::{Error, Result};
use crate::model::StructuredDocument;
use crate::palette::RenderOptions;

const PLACEHOLDER_PATTERN: &str = r"\{(bg|text|label)\}";

/// Turns a structured document into markup.
///
/// Implementations must be stateless with respect to documents so a single
/// renderer can be shared across threads.
pub trait Renderer: Send + Sync {
    /// Renders `doc` using the palette's colors and template.
    fn render(&self, doc: &StructuredDocument, options: &RenderOptions<'_>) -> Result<String>;
}

/// displaCy-style "ent" renderer producing an HTML fragment.
///
/// Plain text is HTML-escaped with newlines turned into `<br>`. The title is
/// inserted as-is and may carry markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &StructuredDocument, options: &RenderOptions<'_>) -> Result<String> {
        let placeholder = Regex::new(PLACEHOLDER_PATTERN)?;
        let text = doc.text.as_str();
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(iter::once(text.len()))
            .collect();
        let byte_at = |offset: usize| {
            boundaries.get(offset).copied().ok_or_else(|| {
                Error::Alignment(format!(
                    "offset {offset} is past the end of a {} character text",
                    boundaries.len() - 1
                ))
            })
        };

        let mut markup = String::from(WRAPPER_OPEN);
        if !doc.title.is_empty() {
            markup.push_str("<h2 style=\"margin: 0\">");
            markup.push_str(&doc.title);
            markup.push_str("</h2>");
        }

        let mut cursor = 0;
        for entity in &doc.ents {
            let start = byte_at(entity.start)?;
            let end = byte_at(entity.end)?;
            if start < cursor || end < start {
                return Err(Error::Alignment(format!(
                    "entity {}..{} overlaps or precedes the previous one",
                    entity.start, entity.end
                )));
            }
            let color = options.color(&entity.label)?;

            push_plain(&mut markup, &text[cursor..start]);
            let fragment = encode_text(&text[start..end]);
            let label = encode_text(&entity.label);
            let filled = placeholder.replace_all(options.template, |caps: &Captures<'_>| {
                match &caps[1] {
                    "bg" => color.to_string(),
                    "text" => fragment.to_string(),
                    _ => label.to_string(),
                }
            });
            markup.push_str(&filled);
            cursor = end;
        }
        push_plain(&mut markup, &text[cursor..]);
        markup.push_str(WRAPPER_CLOSE);

        debug!(
            entities = doc.ents.len(),
            bytes = markup.len(),
            "rendered document"
        );
        Ok(markup)
    }
}

fn push_plain(markup: &mut String, text: &str) {
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            markup.push_str("<br>");
        }
        markup.push_str(&encode_text(line));
    }
}

/// Writes rendered markup to `path` as UTF-8, replacing any existing file.
pub fn save(markup: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, markup)?;
    debug!(path = %path.display(), bytes = markup.len(), "saved rendered markup");
    Ok(())
}
