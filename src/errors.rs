use thiserror::Error;

/// Errors raised by the deck core.
///
/// None of these are fatal to the host; callers either surface them to the
/// user or fold them into an [`ExportResult`](crate::export::ExportResult).
#[derive(Error, Debug)]
pub enum DeckError {
    /// One or more selected files did not carry an `image/*` MIME type.
    #[error("Please select only image files. {count} non-image file(s) detected.")]
    NotAnImage { count: usize },

    /// An editor operation referenced a slide id missing from the catalog.
    #[error("Unknown slide id: {0}")]
    UnknownSlide(u32),

    /// A file upload targeted a slide that only takes image URLs.
    #[error("Slide {0} does not accept file uploads")]
    UploadNotAllowed(u32),

    /// The HTML document could not be generated.
    #[error("Document generation failed: {0}")]
    Conversion(#[from] crate::converters::html::error::HtmlConversionError),

    /// The artifact sink could not deliver the exported document.
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// Configuration was present but invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a text export into its buffer failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, DeckError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
