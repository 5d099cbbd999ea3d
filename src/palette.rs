use std::collections::BTreeMap;

use tracing::debug;

use crate::config::PaletteConfig;
use crate::constants::NO_ENTITY_TAG;
use crate::error::{Error, Result};

/// Label ordering and colors for one visualization session.
///
/// Built once and read-only afterwards; share it by reference across
/// documents (it is `Send + Sync`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPalette {
    default_label: String,
    labels: Vec<String>,
    colors: BTreeMap<String, String>,
    template: String,
}

/// Configuration handed to a [`crate::Renderer`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Labels in palette order, default label first.
    pub ents: &'a [String],
    /// Label to `#rrggbbaa` color.
    pub colors: &'a BTreeMap<String, String>,
    /// Entity markup template.
    pub template: &'a str,
}

impl<'a> RenderOptions<'a> {
    /// Looks up the color for `label`.
    pub fn color(&self, label: &str) -> Result<&'a str> {
        self.colors
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }
}

impl LabelPalette {
    /// Orders `labels` (by `frequencies` when given), prepends the default
    /// label and assigns cyclic colors.
    ///
    /// Frequency ties keep their input order. The default label is prepended
    /// even if `labels` already contains it; in that case the color of its
    /// last position wins.
    pub fn build<S: AsRef<str>>(
        labels: &[S],
        frequencies: Option<&[u64]>,
        config: &PaletteConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut ordered: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        if let Some(frequencies) = frequencies {
            if frequencies.len() != labels.len() {
                return Err(Error::Config(format!(
                    "got {} labels but {} frequencies",
                    labels.len(),
                    frequencies.len()
                )));
            }
            let mut order: Vec<usize> = (0..labels.len()).collect();
            order.sort_by(|&left, &right| frequencies[right].cmp(&frequencies[left]));
            ordered = order.into_iter().map(|index| ordered[index]).collect();
        }

        let mut all_labels = Vec::with_capacity(ordered.len() + 1);
        all_labels.push(config.default_label.clone());
        all_labels.extend(ordered.into_iter().map(str::to_string));

        let colors = all_labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let base = &config.colors[index % config.colors.len()];
                (label.clone(), format!("{base}{}", config.alpha))
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            labels = all_labels.len(),
            colors = config.colors.len(),
            default_label = %config.default_label,
            "built label palette"
        );

        Ok(Self {
            default_label: config.default_label.clone(),
            labels: all_labels,
            colors,
            template: config.template.clone(),
        })
    }

    /// Derives the label vocabulary and counts from observed tags.
    ///
    /// The `"O"` tag is skipped. Unique labels are sorted lexicographically
    /// before the frequency ordering, so ties come out alphabetically.
    pub fn from_tags<I, S>(tags: I, config: &PaletteConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for tag in tags {
            let tag = tag.as_ref();
            if tag == NO_ENTITY_TAG {
                continue;
            }
            *counts.entry(tag.to_string()).or_default() += 1;
        }
        let (labels, frequencies): (Vec<String>, Vec<u64>) = counts.into_iter().unzip();
        Self::build(labels.as_slice(), Some(frequencies.as_slice()), config)
    }

    /// Label used for merged, non-kept tags.
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Ordered labels, default label first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label to color map.
    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    /// Color assigned to `label`.
    pub fn color(&self, label: &str) -> Result<&str> {
        self.options().color(label)
    }

    /// Borrowed view used by renderers.
    pub fn options(&self) -> RenderOptions<'_> {
        RenderOptions {
            ents: &self.labels,
            colors: &self.colors,
            template: &self.template,
        }
    }
}
