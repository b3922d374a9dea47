//! Converts the slide deck into a single printable HTML document.
//!
//! The document is self-contained: inline CSS, one `960x540` block per slide
//! in ascending id order, and an instructions header explaining how to turn
//! it into a slideshow file by hand. Output is deterministic for a given
//! catalog, image map and options.

mod constants;
mod elements;
pub mod error;
mod structure;
mod utils;

pub use constants::{SLIDE_HEIGHT_PX, SLIDE_OPEN_TAG, SLIDE_WIDTH_PX};
pub use elements::{image_embedding, ImageEmbedding};
pub use error::{HtmlConversionError, Result};
pub use utils::escape_html;

use crate::config::{DeckConfig, DEFAULT_ACCENT_COLOR, DEFAULT_DOCUMENT_TITLE};
use crate::models::{catalog::SlideCatalog, slide_image::SlideImage};
use std::collections::BTreeMap;

/// Presentation settings for the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub document_title: String,
    pub accent_color: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

impl From<&DeckConfig> for HtmlOptions {
    fn from(config: &DeckConfig) -> Self {
        Self {
            document_title: config.document_title.clone(),
            accent_color: config.accent_color.clone(),
        }
    }
}

/// Renders every slide in `catalog`, attaching images from `slide_images`.
///
/// Images keyed by ids missing from the catalog are ignored, as are images on
/// title slides.
pub fn convert_deck_to_html(
    catalog: &SlideCatalog,
    slide_images: &BTreeMap<u32, SlideImage>,
    options: &HtmlOptions,
) -> Result<String> {
    let mut html = String::with_capacity(16 * 1024);
    structure::write_document(&mut html, catalog, slide_images, options)?;
    log::debug!(
        "Generated HTML for {} slide(s), {} bytes",
        catalog.len(),
        html.len()
    );
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(images: &BTreeMap<u32, SlideImage>) -> String {
        convert_deck_to_html(&SlideCatalog::default(), images, &HtmlOptions::default()).unwrap()
    }

    #[test]
    fn empty_map_renders_every_slide_without_panels() {
        let html = render(&BTreeMap::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches(SLIDE_OPEN_TAG).count(), 11);
        assert_eq!(html.matches(r#"class="image-panel""#).count(), 0);
        assert!(html.contains(&format!("width: {}px;", SLIDE_WIDTH_PX)));
        assert!(html.contains(&format!("height: {}px;", SLIDE_HEIGHT_PX)));
        assert!(html.contains("Instructions to Create PowerPoint"));
        assert!(!html.contains(super::constants::ACCENT_MARKER));
    }

    #[test]
    fn slides_appear_in_ascending_id_order() {
        let html = render(&BTreeMap::new());
        let positions: Vec<usize> = SlideCatalog::default()
            .iter()
            .map(|s| {
                html.find(&format!(r#"<div class="page-number">{}</div>"#, s.id))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn title_slide_never_gets_an_image() {
        let images = BTreeMap::from([(1, SlideImage::from_url("https://x.com/a.png"))]);
        let html = render(&images);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn output_is_deterministic() {
        let images = BTreeMap::from([
            (3, SlideImage::from_url("https://x.com/a.png").with_caption("a")),
            (9, SlideImage::from_url("https://x.com/page")),
        ]);
        assert_eq!(render(&images), render(&images));
    }

    #[test]
    fn accent_color_is_applied() {
        let options = HtmlOptions {
            accent_color: "#10b981".to_string(),
            ..Default::default()
        };
        let html =
            convert_deck_to_html(&SlideCatalog::default(), &BTreeMap::new(), &options).unwrap();
        assert!(html.contains("background: #10b981;"));
        assert!(!html.contains("#2563eb"));
    }

    #[test]
    fn ampersands_in_catalog_text_are_escaped() {
        let html = render(&BTreeMap::new());
        assert!(html.contains("Study of safety &amp; health issues"));
        assert!(html.contains("Field Labourers&#39; Daily Challenges"));
    }
}
