//! Document skeleton: head, stylesheet, instructions and the slide loop.

use super::{
    constants::{ACCENT_MARKER, INSTRUCTIONS, SLIDE_OPEN_TAG, STYLESHEET},
    elements::{write_content_slide, write_title_slide},
    error::Result,
    utils::escape_html,
    HtmlOptions,
};
use crate::models::{catalog::SlideCatalog, slide::SlideType, slide_image::SlideImage};
use std::{collections::BTreeMap, fmt::Write};

pub(crate) fn write_document(
    out: &mut String,
    catalog: &SlideCatalog,
    slide_images: &BTreeMap<u32, SlideImage>,
    options: &HtmlOptions,
) -> Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"  <meta charset="UTF-8">"#)?;
    writeln!(
        out,
        r#"  <meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(out, "  <title>{}</title>", escape_html(&options.document_title))?;
    writeln!(out, "  <style>{}  </style>", stylesheet(&options.accent_color))?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    out.push_str(INSTRUCTIONS);

    for slide in catalog.iter() {
        writeln!(out)?;
        writeln!(out, "  {}", SLIDE_OPEN_TAG)?;
        match slide.slide_type {
            SlideType::Title => write_title_slide(out, slide)?,
            SlideType::Content => {
                write_content_slide(out, slide, slide_images.get(&slide.id))?
            }
        }
        writeln!(out, r#"    <div class="page-number">{}</div>"#, slide.id)?;
        writeln!(out, "  </div>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

/// The stylesheet with the accent colour substituted. The colour is escaped
/// so a bad config value cannot break out of the `<style>` element.
fn stylesheet(accent_color: &str) -> String {
    STYLESHEET.replace(ACCENT_MARKER, &escape_html(accent_color))
}
