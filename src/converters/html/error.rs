use thiserror::Error;

/// Errors that can occur while generating the exported HTML document.
#[derive(Error, Debug)]
pub enum HtmlConversionError {
    #[error("Formatting error during HTML generation: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// A specialized Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlConversionError>;
