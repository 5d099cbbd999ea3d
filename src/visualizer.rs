use tracing::debug;

use crate::align::align;
use crate::annotate::extract;
use crate::error::Result;
use crate::merge::merge;
use crate::model::{Annotation, StructuredDocument};
use crate::palette::LabelPalette;
use crate::render::{save, HtmlRenderer, Renderer};
use crate::structure::structure;
use crate::types::VisualizeOptions;

/// End-to-end pipeline from tagger output to rendered markup.
///
/// Holds one immutable [`LabelPalette`] and a renderer. Each call works on
/// its own document only, so a `Visualizer` can be shared between threads.
pub struct Visualizer {
    palette: LabelPalette,
    renderer: Box<dyn Renderer>,
}

impl Visualizer {
    /// Creates a visualizer that renders HTML with [`HtmlRenderer`].
    pub fn new(palette: LabelPalette) -> Self {
        Self::with_renderer(palette, HtmlRenderer)
    }

    /// Creates a visualizer with a custom renderer.
    pub fn with_renderer(palette: LabelPalette, renderer: impl Renderer + 'static) -> Self {
        Self {
            palette,
            renderer: Box::new(renderer),
        }
    }

    /// Palette used for label substitution and colors.
    pub fn palette(&self) -> &LabelPalette {
        &self.palette
    }

    /// Extracts, aligns, optionally merges and structures one document.
    pub fn prepare(
        &self,
        text: &str,
        annotations: &[Annotation],
        options: &VisualizeOptions,
    ) -> Result<StructuredDocument> {
        let (tags, words) = extract(
            annotations,
            options.split,
            &options.keep,
            self.palette.default_label(),
        );
        let spans = align(&words, text);

        if options.split || tags.is_empty() {
            return structure(text, &tags, &spans, &options.title);
        }

        let merged = merge(&tags, &words, &spans)?;
        debug!(
            tokens = tags.len(),
            runs = merged.len(),
            "merged annotations before structuring"
        );
        structure(text, &merged.tags, &merged.spans, &options.title)
    }

    /// Runs [`Self::prepare`] and renders the result.
    ///
    /// When `options.save_path` is set the markup is also written there.
    pub fn visualize(
        &self,
        text: &str,
        annotations: &[Annotation],
        options: &VisualizeOptions,
    ) -> Result<String> {
        let doc = self.prepare(text, annotations, options)?;
        let markup = self.renderer.render(&doc, &self.palette.options())?;
        if let Some(path) = &options.save_path {
            save(&markup, path)?;
        }
        Ok(markup)
    }
}
