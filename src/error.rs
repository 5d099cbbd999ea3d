use thiserror::Error;

/// Error type returned by flexspan public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// Palette configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Tag/word/span sequences were empty or of mismatched lengths.
    #[error("invalid input: {0}")]
    Input(String),
    /// Spans do not line up with the tags or the text they point into.
    #[error("alignment error: {0}")]
    Alignment(String),
    /// A label has no entry in the palette's color map.
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    /// The renderer's placeholder pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
    /// Annotation JSON could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing rendered markup failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod error_tests {
    use super::Error;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            Error::Config("alpha must be two hex digits".to_string()).to_string(),
            "invalid configuration: alpha must be two hex digits"
        );
        assert_eq!(
            Error::Input("tags must not be empty".to_string()).to_string(),
            "invalid input: tags must not be empty"
        );
        assert_eq!(
            Error::Alignment("2 tags but 3 spans".to_string()).to_string(),
            "alignment error: 2 tags but 3 spans"
        );
        assert_eq!(
            Error::UnknownLabel("GPE".to_string()).to_string(),
            "unknown label: GPE"
        );
    }

    #[test]
    fn json_error_converts_to_crate_error() {
        let json = serde_json::from_str::<serde_json::Value>("[{").expect_err("expected bad json");
        let error: Error = json.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(error.to_string().starts_with("json error:"));
    }

    #[test]
    fn io_error_converts_to_crate_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.to_string(), "io error: missing dir");
    }
}
