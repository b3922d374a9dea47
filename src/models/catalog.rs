//! The fixed slide catalog loaded at startup.

use super::slide::{Slide, SlideType};
use serde::{Deserialize, Serialize};

/// Number of slides in the built-in deck.
pub const SLIDE_COUNT: usize = 11;

/// Ordered, read-only collection of slides.
///
/// Slides are kept sorted by ascending id. Nothing in the crate mutates a
/// catalog after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideCatalog {
    slides: Vec<Slide>,
}

impl SlideCatalog {
    /// Builds a catalog from arbitrary slides, ordering them by id.
    pub fn from_slides(mut slides: Vec<Slide>) -> Self {
        slides.sort_by_key(|s| s.id);
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slide with the given id.
    pub fn find(&self, id: u32) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Title for a slide id, or `Slide {id}` when the id is not in the catalog.
    pub fn title_of(&self, id: u32) -> String {
        self.find(id)
            .map(|s| s.title.clone())
            .unwrap_or_else(|| format!("Slide {}", id))
    }
}

impl Default for SlideCatalog {
    fn default() -> Self {
        kisan_sahayak()
    }
}

fn slide(id: u32, title: &str, bullets: &[&str], slide_type: SlideType) -> Slide {
    Slide {
        id,
        title: title.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
        slide_type,
    }
}

/// The built-in "Kisan Sahayak" deck.
pub fn kisan_sahayak() -> SlideCatalog {
    use SlideType::{Content, Title};

    SlideCatalog::from_slides(vec![
        slide(
            1,
            "Kisan Sahayak: Tackling Field Labourers' Daily Challenges",
            &[
                "IDTL Lab Project",
                "Team Members: [Names]",
                "Department / College",
                "Guided by: Dr. Priyanka",
            ],
            Title,
        ),
        slide(
            2,
            "Research Done",
            &[
                "Field study of daily labour conditions",
                "Interaction with agricultural workers",
                "Study of safety & health issues",
                "Awareness gaps in government schemes",
                "Observation of work productivity challenges",
            ],
            Content,
        ),
        slide(
            3,
            "Problem Definition",
            &[
                "Workers lack awareness of welfare schemes",
                "Outdated farming practices reduce productivity",
                "Poor sanitation & unsafe work conditions",
                "No emergency contact support",
                "Weather uncertainty affects planning",
            ],
            Content,
        ),
        slide(
            4,
            "Empathy Findings",
            &[
                "Workers struggle to access reliable information",
                "Language & literacy barriers exist",
                "Continuous work with little safety awareness",
                "Need for simple training & guidance",
                "Desire for secure and dignified work",
            ],
            Content,
        ),
        slide(
            5,
            "Proposed Solution",
            &[
                "Awareness sessions in local language",
                "Modern farming skill programs",
                "Emergency contact & buddy system",
                "Hygiene & safety education",
                "Visual learning materials",
            ],
            Content,
        ),
        slide(
            6,
            "Prototype Suggested",
            &[
                "Mobile-friendly website: Kisan Sahayak",
                "Designed for field labourers",
                "Easy navigation interface",
                "Local language support",
                "Low-literacy friendly design",
            ],
            Content,
        ),
        slide(
            7,
            "Prototype Features",
            &[
                "Government scheme information",
                "Health & first-aid guidance",
                "Farming techniques & tips",
                "Emergency contact access",
                "Audio & visual learning content",
            ],
            Content,
        ),
        slide(
            8,
            "Justification",
            &[
                "Scalable digital platform",
                "Accessible via smartphones",
                "Easy to update information",
                "Cost-effective solution",
                "Wider reach than offline methods",
            ],
            Content,
        ),
        slide(
            9,
            "Future Scope",
            &[
                "Dedicated mobile app version",
                "Real-time weather alerts",
                "Community training integration",
                "Multi-language expansion",
                "Partnership with NGOs",
            ],
            Content,
        ),
        slide(
            10,
            "Conclusion",
            &[
                "Improves worker safety",
                "Increases awareness",
                "Enhances productivity",
                "Promotes dignity of labour",
                "Sustainable long-term impact",
            ],
            Content,
        ),
        slide(
            11,
            "Prototype Access",
            &[
                "Live prototype demonstration",
                "Platform: Mobile website",
                "Scan QR / Click link",
            ],
            Content,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_has_eleven_ordered_slides() {
        let catalog = SlideCatalog::default();
        assert_eq!(catalog.len(), SLIDE_COUNT);
        let ids: Vec<u32> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());
        assert!(catalog.get(0).unwrap().is_title());
        assert!(catalog.iter().skip(1).all(|s| !s.is_title()));
    }

    #[test]
    fn from_slides_sorts_by_id() {
        let catalog = SlideCatalog::from_slides(vec![
            slide(2, "b", &[], SlideType::Content),
            slide(1, "a", &[], SlideType::Title),
        ]);
        assert_eq!(catalog.get(0).unwrap().title, "a");
        assert_eq!(catalog.title_of(2), "b");
        assert_eq!(catalog.title_of(9), "Slide 9");
    }
}
