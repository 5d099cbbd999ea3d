//! Default values shared by the palette, structurer and renderer.

/// Tag that marks a token as "no entity". Never highlighted.
pub const NO_ENTITY_TAG: &str = "O";

/// Label prepended to every palette and used for merged, non-kept tags.
pub const DEFAULT_LABEL: &str = "Misc";

/// Alpha suffix appended to every palette color (`00`..`ff`).
pub const DEFAULT_ALPHA: &str = "95";

/// Color cycle used when no custom colors are configured.
pub const DEFAULT_COLORS: [&str; 13] = [
    "#f8e71c", "#e4e7d2", "#7aecec", "#bfeeb7", "#feca74", "#ff9561", "#aa9cfc", "#c887fb",
    "#9cc9cc", "#ffeb80", "#ff8197", "#f0d0ff", "#bfe1d9",
];

/// Environment variable overriding [`DEFAULT_LABEL`].
pub const ENV_DEFAULT_LABEL: &str = "FLEXSPAN_DEFAULT_LABEL";

/// Environment variable overriding [`DEFAULT_ALPHA`].
pub const ENV_ALPHA: &str = "FLEXSPAN_ALPHA";

/// Markup for one highlighted entity.
///
/// Placeholders: `{bg}` (palette color), `{text}` (escaped entity text) and
/// `{label}` (escaped label).
pub const ENTITY_TEMPLATE: &str = r#"
<mark class="entity" style="background: {bg}; padding: 0.2em 0.35em; margin: 0 0.25em; line-height: 1; border-radius: 0.4em;">
    {text}
    <span style="font-size: 0.8em; font-weight: bold; font-family: arial; line-height: 1; border-radius: 0.35em; vertical-align: middle; margin-left: 0.5rem;">{label}</span>
</mark>
"#;

pub(crate) const WRAPPER_OPEN: &str =
    r#"<div class="entities" style="line-height: 2.5; direction: ltr">"#;
pub(crate) const WRAPPER_CLOSE: &str = "</div>";
