use crate::converters::html::{image_embedding, ImageEmbedding};
use crate::errors::Result;
use crate::models::{catalog::SlideCatalog, slide::Slide, slide_image::SlideImage};
use std::collections::BTreeMap;
use std::fmt::Write;

// --- Slide Rendering ---

/// Describes the image reference for one slide as a Markdown line.
/// Uploaded data is referenced by filename rather than inlined.
fn image_line(slide: &Slide, image: &SlideImage) -> String {
    let alt = if image.caption.is_empty() {
        slide.title.as_str()
    } else {
        image.caption.as_str()
    };
    match image_embedding(image) {
        ImageEmbedding::Embedded { .. } if image.has_upload() => format!(
            "_Image: uploaded file {}_",
            image.original_filename.as_deref().unwrap_or("(unnamed)")
        ),
        ImageEmbedding::Embedded { src } => format!("![{}]({})", alt, src),
        ImageEmbedding::Placeholder { text } => {
            format!("> {} (URL provided: {})", text, image.url)
        }
    }
}

fn write_slide(out: &mut String, slide: &Slide, image: Option<&SlideImage>) -> std::fmt::Result {
    writeln!(out, "## Slide {}: {}\n", slide.id, slide.title)?;
    if slide.is_title() {
        for line in &slide.bullets {
            writeln!(out, "{}  ", line)?;
        }
        return Ok(());
    }
    for bullet in &slide.bullets {
        writeln!(out, "- {}", bullet)?;
    }
    if let Some(image) = image {
        writeln!(out)?;
        writeln!(out, "{}", image_line(slide, image))?;
        if !image.caption.is_empty() {
            writeln!(out, "\n_{}_", image.caption)?;
        }
    }
    Ok(())
}

// --- Public API Function ---

/// Writes the deck as a Markdown outline, for pasting slide content by hand.
///
/// Slides are separated by `---` and appear in catalog order. Images on
/// title slides are ignored, as in the HTML export. Write failures surface as
/// [`DeckError::Format`](crate::errors::DeckError::Format).
pub fn deck_to_markdown(
    catalog: &SlideCatalog,
    slide_images: &BTreeMap<u32, SlideImage>,
    document_title: &str,
) -> Result<String> {
    let mut full_text = String::new();
    writeln!(full_text, "# {}\n", document_title)?;

    for (index, slide) in catalog.iter().enumerate() {
        if index > 0 {
            writeln!(full_text, "\n---\n")?;
        }
        write_slide(&mut full_text, slide, slide_images.get(&slide.id))?;
    }

    Ok(full_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_lists_every_slide_with_images() {
        let images = BTreeMap::from([
            (2, SlideImage::from_url("https://x.com/a.png").with_caption("Field visit")),
            (3, SlideImage::from_url("https://www.google.com/search?tbm=isch&q=x")),
            (
                4,
                SlideImage::default().with_upload("data:image/png;base64,AA", "worker.png"),
            ),
        ]);
        let md = deck_to_markdown(&SlideCatalog::default(), &images, "Deck").unwrap();

        assert!(md.starts_with("# Deck\n"));
        assert_eq!(md.matches("## Slide ").count(), 11);
        assert_eq!(md.matches("\n---\n").count(), 10);
        assert!(md.contains("## Slide 1: Kisan Sahayak"));
        assert!(md.contains("- Field study of daily labour conditions"));
        assert!(md.contains("![Field visit](https://x.com/a.png)"));
        assert!(md.contains("_Field visit_"));
        assert!(md.contains("> [Image not embedded: Google Images search URL"));
        assert!(md.contains("_Image: uploaded file worker.png_"));
        assert!(!md.contains("base64"));
    }

    #[test]
    fn write_failures_map_to_format_error() {
        let err: crate::errors::DeckError = std::fmt::Error.into();
        assert!(matches!(err, crate::errors::DeckError::Format(_)));
        assert_eq!(err.to_string(), "Formatting error: an error occurred when formatting an argument");
    }
}
