#![deny(missing_docs)]

//! Turn token-level entity annotations into highlight spans over raw text.
//!
//! A tagger hands back `word -> label` records. This crate recovers where
//! each word sits in the original text, optionally collapses runs of equal
//! labels, and produces a `{text, ents, title}` document plus a color palette
//! that any span-highlighting renderer can consume.
//!
//! ## Quick Start
//! ```
//! use flexspan::{parse_annotations, LabelPalette, PaletteConfig, VisualizeOptions, Visualizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PaletteConfig::default().with_default_label("Misc").with_alpha("95");
//!     let palette = LabelPalette::build(&["ORG", "LOC", "PERSON"], Some(&[100, 80, 50][..]), &config)?;
//!     let visualizer = Visualizer::new(palette);
//!
//!     let text = "Elon Musk founded OpenAI in California.";
//!     let annotations = parse_annotations(
//!         r#"[{"Elon":"PERSON"},{"Musk":"PERSON"},{"founded":"O"},
//!             {"OpenAI":"ORG"},{"in":"O"},{"California":"LOC"}]"#,
//!     )?;
//!     let options = VisualizeOptions::default()
//!         .with_split(false)
//!         .with_keep(["O", "PERSON", "ORG", "LOC"]);
//!
//!     let doc = visualizer.prepare(text, &annotations, &options)?;
//!     assert_eq!(doc.ents.len(), 3);
//!     let _html = visualizer.visualize(text, &annotations, &options)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Building Blocks
//! The pipeline steps are public on their own:
//!
//! 1. [`extract`] splits annotations into tags and words, mapping tags that
//!    are not kept to the default label when merging.
//! 2. [`align`] finds each word's span with a cursor that only moves forward.
//! 3. [`merge`] collapses adjacent entries with equal tags.
//! 4. [`structure`] drops `"O"` entries and words that were not found.
//! 5. A [`Renderer`] turns the result into markup; [`save`] writes it out.
//!
//! ## Offset Rules
//! Offsets are character indices (based on `str.chars()`), not byte indices.
//! Words that cannot be located get [`Span::INVALID`] and are never
//! highlighted.
//!
//! ## Environment Variables
//! - `FLEXSPAN_DEFAULT_LABEL`: default label used by [`PaletteConfig::default`].
//! - `FLEXSPAN_ALPHA`: alpha suffix used by [`PaletteConfig::default`].

mod align;
mod annotate;
mod config;
mod constants;
mod error;
mod merge;
mod model;
mod palette;
mod render;
mod structure;
mod types;
mod visualizer;

pub use align::align;
pub use annotate::{extract, parse_annotations};
pub use config::PaletteConfig;
pub use constants::*;
pub use error::{Error, Result};
pub use merge::merge;
pub use model::{Annotation, Entity, Merged, Span, StructuredDocument};
pub use palette::{LabelPalette, RenderOptions};
pub use render::{save, HtmlRenderer, Renderer};
pub use structure::structure;
pub use types::VisualizeOptions;
pub use visualizer::Visualizer;

#[cfg(test)]
mod test_support;
