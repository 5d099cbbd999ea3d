use std::env;

use crate::constants::{
    DEFAULT_ALPHA, DEFAULT_COLORS, DEFAULT_LABEL, ENTITY_TEMPLATE, ENV_ALPHA, ENV_DEFAULT_LABEL,
};
use crate::error::{Error, Result};

/// Settings consumed by [`crate::LabelPalette::build`].
///
/// `Default` reads `FLEXSPAN_DEFAULT_LABEL` and `FLEXSPAN_ALPHA` when set;
/// the `with_*` builders always take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Label placed first in the palette and used for merged tags.
    pub default_label: String,
    /// Two hex digit alpha suffix appended to each color.
    pub alpha: String,
    /// Color cycle as `#rrggbb` strings.
    pub colors: Vec<String>,
    /// Entity markup template handed to renderers.
    pub template: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_label: env::var(ENV_DEFAULT_LABEL)
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            alpha: env::var(ENV_ALPHA)
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_ALPHA.to_string()),
            colors: DEFAULT_COLORS.iter().map(|color| color.to_string()).collect(),
            template: ENTITY_TEMPLATE.to_string(),
        }
    }
}

impl PaletteConfig {
    /// Sets the label prepended to the palette.
    pub fn with_default_label(mut self, default_label: impl Into<String>) -> Self {
        self.default_label = default_label.into();
        self
    }

    /// Sets the alpha suffix (`00`..`ff`).
    pub fn with_alpha(mut self, alpha: impl Into<String>) -> Self {
        self.alpha = alpha.into();
        self
    }

    /// Replaces the color cycle.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the entity markup template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.alpha.len() != 2 || !is_hex(&self.alpha) {
            return Err(Error::Config(format!(
                "alpha must be exactly two hex digits, got {:?}",
                self.alpha
            )));
        }
        if self.colors.is_empty() {
            return Err(Error::Config(
                "color cycle must contain at least one color".to_string(),
            ));
        }
        for color in &self.colors {
            let valid = color
                .strip_prefix('#')
                .is_some_and(|digits| digits.len() == 6 && is_hex(digits));
            if !valid {
                return Err(Error::Config(format!(
                    "color must look like #rrggbb, got {color:?}"
                )));
            }
        }
        Ok(())
    }
}

fn is_hex(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_hexdigit())
}
