//! Classification of pasted image URLs, and the user-facing text derived from it.
//!
//! Everything here is a pure function of the input string. The same
//! classification drives inline guidance while editing, the fallback message
//! when an image fails to load, and the placeholder written into exports.

use serde::Serialize;

/// File extensions accepted as "likely direct image" links.
pub const IMAGE_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg"];

const SEARCH_PATH_MARKER: &str = "google.com/search";
const IMAGE_SEARCH_MODE: &str = "tbm=isch";

pub const SEARCH_RESULTS_GUIDANCE: &str = "This is a Google Images search results page, not a direct image URL. \
To use an image: (1) Open this link in a new tab, (2) Click on an image you like, \
(3) Right-click the image and select \"Copy image address\", (4) Paste that URL here. \
Direct image URLs typically end in .jpg, .png, or .webp. \
Alternatively, use the upload option below for Slide 11.";

pub const NOT_DIRECT_GUIDANCE: &str = "This URL may not be a direct image link. \
For best results, use a URL that points directly to an image file (typically ending in .jpg, .png, or .webp). \
If the image fails to load, try right-clicking the image and selecting \"Copy image address\".";

const SEARCH_RESULTS_LOAD_ERROR: &str =
    "Cannot display Google Images search page. Please use a direct image URL (see guidance above).";

const GENERIC_LOAD_ERROR: &str = "Failed to load image. The URL may not point to a valid image file, \
or the image may be blocked by CORS policy. Try using a direct image URL ending in .jpg, .png, or .webp.";

const SEARCH_RESULTS_PLACEHOLDER: &str = "[Image not embedded: Google Images search URL provided instead of direct image link. \
Please replace with a direct image URL ending in .jpg, .png, or .webp]";

const GENERIC_PLACEHOLDER: &str =
    "[Image failed to load. Please verify the URL points to a valid image file.]";

/// What kind of link a URL string appears to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UrlKind {
    /// Empty or whitespace-only input.
    Empty,
    /// A search-engine image results page rather than an image.
    SearchResults,
    /// Path ends in a known image extension.
    LikelyDirectImage,
    /// Anything else. May or may not load.
    Unrecognized,
}

/// Result of [`classify_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlClassification {
    pub kind: UrlKind,
    /// Inline guidance for the editor, if any.
    pub guidance_message: Option<&'static str>,
}

impl UrlClassification {
    pub fn is_search_results(&self) -> bool {
        self.kind == UrlKind::SearchResults
    }

    pub fn is_likely_direct_image(&self) -> bool {
        self.kind == UrlKind::LikelyDirectImage
    }
}

/// Classifies a URL string. Matching is case-insensitive and ignores
/// surrounding whitespace. Search pages take precedence over extension checks.
pub fn classify_url(url: &str) -> UrlClassification {
    let normalized = url.trim().to_lowercase();

    let kind = if normalized.is_empty() {
        UrlKind::Empty
    } else if normalized.contains(SEARCH_PATH_MARKER) && normalized.contains(IMAGE_SEARCH_MODE) {
        UrlKind::SearchResults
    } else if has_image_extension(&normalized) {
        UrlKind::LikelyDirectImage
    } else {
        UrlKind::Unrecognized
    };

    let guidance_message = match kind {
        UrlKind::SearchResults => Some(SEARCH_RESULTS_GUIDANCE),
        UrlKind::Unrecognized => Some(NOT_DIRECT_GUIDANCE),
        UrlKind::Empty | UrlKind::LikelyDirectImage => None,
    };

    UrlClassification {
        kind,
        guidance_message,
    }
}

/// Checks the path portion (query string and fragment stripped) for an image extension.
fn has_image_extension(normalized: &str) -> bool {
    let path = normalized
        .split(['?', '#'])
        .next()
        .unwrap_or(normalized);
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Message shown in place of an image that failed to load in a slide view.
pub fn image_load_error_message(url: &str) -> &'static str {
    if classify_url(url).is_search_results() {
        SEARCH_RESULTS_LOAD_ERROR
    } else {
        GENERIC_LOAD_ERROR
    }
}

/// Text written into exported documents where an image cannot be shown.
pub fn export_placeholder_text(url: &str) -> &'static str {
    if classify_url(url).is_search_results() {
        SEARCH_RESULTS_PLACEHOLDER
    } else {
        GENERIC_PLACEHOLDER
    }
}
