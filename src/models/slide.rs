use serde::{Deserialize, Serialize};

/// Layout variant of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    /// Centered title with the bullets stacked underneath. Never carries an image.
    Title,
    /// Header plus a bullet list, with an optional image panel on the right.
    Content,
}

/// One fixed unit of presentation content.
///
/// Slides are loaded once from the catalog and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Positive, unique identifier. Catalog order follows ascending ids.
    pub id: u32,

    pub title: String,

    /// Bullet lines in display order.
    pub bullets: Vec<String>,

    #[serde(rename = "type")]
    pub slide_type: SlideType,
}

impl Slide {
    pub fn is_title(&self) -> bool {
        self.slide_type == SlideType::Title
    }
}
