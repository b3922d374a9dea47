//! What a slide view should show for an assigned image.

use crate::classifier::{classify_url, image_load_error_message};
use crate::models::{slide::Slide, slide_image::SlideImage};
use serde::Serialize;

const SEARCH_PAGE_HEADING: &str = "Google Images Search URL";
const SEARCH_PAGE_NOTICE: &str = "This is a search results page, not a direct image. \
Please use a direct image URL or upload an image.";

/// Render instructions for one slide image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ImagePreview {
    /// Shown up front instead of trying to load a search results page.
    SearchPagePlaceholder {
        heading: &'static str,
        message: &'static str,
    },
    /// Attempt to display the image.
    #[serde(rename_all = "camelCase")]
    Image {
        src: String,
        alt: String,
        caption: Option<String>,
        /// Message to show if loading fails.
        load_error_message: &'static str,
    },
}

/// Decides how a slide view presents `image`.
///
/// Unlike the export, only search pages are pre-empted here; any other URL is
/// tried and falls back to `load_error_message` on failure.
pub fn preview_slide_image(image: &SlideImage, slide: &Slide) -> ImagePreview {
    if !image.has_upload() && classify_url(&image.url).is_search_results() {
        return ImagePreview::SearchPagePlaceholder {
            heading: SEARCH_PAGE_HEADING,
            message: SEARCH_PAGE_NOTICE,
        };
    }

    let alt = if image.caption.is_empty() {
        slide.title.clone()
    } else {
        image.caption.clone()
    };
    ImagePreview::Image {
        src: image.display_source().to_string(),
        alt,
        caption: (!image.caption.is_empty()).then(|| image.caption.clone()),
        load_error_message: image_load_error_message(&image.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::SlideCatalog;

    #[test]
    fn search_page_is_pre_empted_unless_uploaded() {
        let catalog = SlideCatalog::default();
        let slide = catalog.find(3).unwrap();
        let search = SlideImage::from_url("https://www.google.com/search?tbm=isch&q=x");
        assert!(matches!(
            preview_slide_image(&search, slide),
            ImagePreview::SearchPagePlaceholder { .. }
        ));

        let uploaded = search.with_upload("data:image/png;base64,AA", "a.png");
        match preview_slide_image(&uploaded, slide) {
            ImagePreview::Image { src, alt, caption, .. } => {
                assert_eq!(src, "data:image/png;base64,AA");
                assert_eq!(alt, "Problem Definition");
                assert_eq!(caption, None);
            }
            other => panic!("unexpected preview {:?}", other),
        }
    }

    #[test]
    fn unknown_url_is_attempted_with_generic_error() {
        let catalog = SlideCatalog::default();
        let image = SlideImage::from_url("https://example.com/page").with_caption("c");
        match preview_slide_image(&image, catalog.find(2).unwrap()) {
            ImagePreview::Image {
                src,
                alt,
                caption,
                load_error_message,
            } => {
                assert_eq!(src, "https://example.com/page");
                assert_eq!(alt, "c");
                assert_eq!(caption.as_deref(), Some("c"));
                assert!(load_error_message.starts_with("Failed to load image."));
            }
            other => panic!("unexpected preview {:?}", other),
        }
    }
}
