//! Rendering of individual slides and their image panels.

use super::{
    error::Result,
    utils::{escape_html, image_fallback_handler},
};
use crate::classifier::{classify_url, export_placeholder_text};
use crate::models::{slide::Slide, slide_image::SlideImage};
use std::fmt::Write;

/// How an assigned image ends up in the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEmbedding<'a> {
    /// An `<img>` loading `src`, with a load-failure fallback.
    Embedded { src: &'a str },
    /// A static box with guidance text. The URL is never loaded.
    Placeholder { text: &'static str },
}

impl ImageEmbedding<'_> {
    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageEmbedding::Embedded { .. })
    }
}

/// Uploaded data, or a URL that looks like a direct image, is embedded.
/// Anything else becomes a placeholder.
pub fn image_embedding(image: &SlideImage) -> ImageEmbedding<'_> {
    match &image.uploaded_data {
        Some(data) => ImageEmbedding::Embedded { src: data },
        None if classify_url(&image.url).is_likely_direct_image() => {
            ImageEmbedding::Embedded { src: &image.url }
        }
        None => ImageEmbedding::Placeholder {
            text: export_placeholder_text(&image.url),
        },
    }
}

/// Centered title, divider and stacked subtitle lines. No image.
pub(crate) fn write_title_slide(out: &mut String, slide: &Slide) -> Result<()> {
    writeln!(out, r#"    <div class="layout-title">"#)?;
    writeln!(out, "      <h1>{}</h1>", escape_html(&slide.title))?;
    writeln!(out, r#"      <div class="divider"></div>"#)?;
    writeln!(out, r#"      <div class="subtitle">"#)?;
    for line in &slide.bullets {
        writeln!(out, "        <p>{}</p>", escape_html(line))?;
    }
    writeln!(out, "      </div>")?;
    writeln!(out, "    </div>")?;
    Ok(())
}

/// Header plus a bullet list, with the image panel on the right when assigned.
pub(crate) fn write_content_slide(
    out: &mut String,
    slide: &Slide,
    image: Option<&SlideImage>,
) -> Result<()> {
    writeln!(out, r#"    <div class="layout-content">"#)?;
    writeln!(out, r#"      <div class="content-header">"#)?;
    writeln!(out, "        <h2>{}</h2>", escape_html(&slide.title))?;
    writeln!(out, "      </div>")?;
    writeln!(out, r#"      <div class="content-body">"#)?;
    writeln!(out, r#"        <ul class="bullets">"#)?;
    for bullet in &slide.bullets {
        writeln!(
            out,
            r#"          <li><span class="bullet">•</span> {}</li>"#,
            escape_html(bullet)
        )?;
    }
    writeln!(out, "        </ul>")?;
    if let Some(image) = image {
        write_image_panel(out, slide, image)?;
    }
    writeln!(out, "      </div>")?;
    writeln!(out, "    </div>")?;
    Ok(())
}

fn write_image_panel(out: &mut String, slide: &Slide, image: &SlideImage) -> Result<()> {
    match &image.original_filename {
        Some(filename) => writeln!(
            out,
            r#"        <div class="image-panel" data-filename="{}">"#,
            escape_html(filename)
        )?,
        None => writeln!(out, r#"        <div class="image-panel">"#)?,
    }
    match image_embedding(image) {
        ImageEmbedding::Embedded { src } => {
            let alt = if image.caption.is_empty() {
                &slide.title
            } else {
                &image.caption
            };
            writeln!(
                out,
                r#"          <img src="{}" alt="{}" onerror="{}" />"#,
                escape_html(src),
                escape_html(alt),
                image_fallback_handler(export_placeholder_text(&image.url))
            )?;
        }
        ImageEmbedding::Placeholder { text } => {
            writeln!(out, r#"          <div class="image-placeholder">"#)?;
            writeln!(out, "            <p>{}</p>", escape_html(text))?;
            writeln!(
                out,
                r#"            <p class="placeholder-url">URL provided: {}</p>"#,
                escape_html(&image.url)
            )?;
            writeln!(out, "          </div>")?;
        }
    }
    if !image.caption.is_empty() {
        writeln!(
            out,
            r#"          <p class="caption">{}</p>"#,
            escape_html(&image.caption)
        )?;
    }
    writeln!(out, "        </div>")?;
    Ok(())
}
