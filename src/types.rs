use std::path::{Path, PathBuf};

use crate::constants::NO_ENTITY_TAG;

/// Options for [`crate::Visualizer::visualize`] and [`crate::Visualizer::prepare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeOptions {
    /// Keep every token separate. When `false`, non-kept tags are mapped to
    /// the palette's default label and adjacent runs are merged.
    pub split: bool,
    /// Tags that are never replaced by the default label.
    pub keep: Vec<String>,
    /// Heading rendered above the text.
    pub title: String,
    /// Where to write the rendered markup, if anywhere.
    pub save_path: Option<PathBuf>,
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        Self {
            split: true,
            keep: vec![NO_ENTITY_TAG.to_string()],
            title: String::new(),
            save_path: None,
        }
    }
}

impl VisualizeOptions {
    /// Sets whether tokens stay separate.
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Sets the tags never replaced by the default label.
    pub fn with_keep<I, S>(mut self, keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep = keep.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Writes rendered markup to `save_path`.
    pub fn with_save_path(mut self, save_path: impl AsRef<Path>) -> Self {
        self.save_path = Some(save_path.as_ref().to_path_buf());
        self
    }
}
