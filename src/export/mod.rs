//! Exporting the deck as a downloadable HTML document.
//!
//! Export runs in three steps: collect pre-flight warnings for images that
//! cannot be embedded, generate the document, and hand it to an
//! [`ArtifactSink`]. Every failure is folded into the returned
//! [`ExportResult`]; nothing here panics or aborts the host.

pub mod sink;

pub use sink::{Artifact, ArtifactSink, FileSink, MemorySink, HTML_MIME_TYPE};

use crate::config::DeckConfig;
use crate::converters::html::{convert_deck_to_html, image_embedding, HtmlOptions, ImageEmbedding};
use crate::errors::Result;
use crate::models::{catalog::SlideCatalog, slide_image::SlideImage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Advisory notice for a slide whose image will show as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportWarning {
    pub slide_id: u32,
    pub slide_title: String,
    pub message: String,
}

/// Outcome of an export, shaped for a notification layer.
///
/// Serializes as `{"success":true,"warnings":[...]}` or
/// `{"success":false,"error":"...","warnings":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub warnings: Vec<ExportWarning>,
}

impl ExportResult {
    pub fn succeeded(warnings: Vec<ExportWarning>) -> Self {
        Self {
            success: true,
            error: None,
            warnings,
        }
    }

    pub fn failed(error: impl Into<String>, warnings: Vec<ExportWarning>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            warnings,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Generated document plus the warnings collected before generating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeck {
    pub html: String,
    pub warnings: Vec<ExportWarning>,
}

/// Lists content slides whose assigned image will be rendered as a placeholder.
pub fn collect_warnings(
    catalog: &SlideCatalog,
    slide_images: &BTreeMap<u32, SlideImage>,
) -> Vec<ExportWarning> {
    catalog
        .iter()
        .filter(|slide| !slide.is_title())
        .filter_map(|slide| {
            let image = slide_images.get(&slide.id)?;
            match image_embedding(image) {
                ImageEmbedding::Embedded { .. } => None,
                ImageEmbedding::Placeholder { .. } => Some(ExportWarning {
                    slide_id: slide.id,
                    slide_title: slide.title.clone(),
                    message: format!(
                        "Slide {} image cannot be embedded: {}",
                        slide.id,
                        describe_url(&image.url)
                    ),
                }),
            }
        })
        .collect()
}

fn describe_url(url: &str) -> String {
    if url.trim().is_empty() {
        "no URL or upload provided".to_string()
    } else {
        format!("{} is not a direct image link", url)
    }
}

/// Renders and delivers the deck for a given catalog and configuration.
#[derive(Debug, Clone)]
pub struct DeckExporter {
    catalog: SlideCatalog,
    options: HtmlOptions,
    output_filename: String,
}

impl Default for DeckExporter {
    fn default() -> Self {
        Self::new(SlideCatalog::default(), &DeckConfig::default())
    }
}

impl DeckExporter {
    pub fn new(catalog: SlideCatalog, config: &DeckConfig) -> Self {
        Self {
            catalog,
            options: HtmlOptions::from(config),
            output_filename: config.output_filename.clone(),
        }
    }

    pub fn catalog(&self) -> &SlideCatalog {
        &self.catalog
    }

    pub fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn preflight(&self, slide_images: &BTreeMap<u32, SlideImage>) -> Vec<ExportWarning> {
        let warnings = collect_warnings(&self.catalog, slide_images);
        for warning in &warnings {
            log::warn!("{}", warning.message);
        }
        warnings
    }

    /// Builds the document without delivering it.
    pub fn render(&self, slide_images: &BTreeMap<u32, SlideImage>) -> Result<RenderedDeck> {
        let warnings = self.preflight(slide_images);
        let html = convert_deck_to_html(&self.catalog, slide_images, &self.options)?;
        Ok(RenderedDeck { html, warnings })
    }

    /// Renders the deck and delivers it to `sink` under the configured name.
    pub fn export(
        &self,
        slide_images: &BTreeMap<u32, SlideImage>,
        sink: &mut dyn ArtifactSink,
    ) -> ExportResult {
        let warnings = self.preflight(slide_images);
        let html = match convert_deck_to_html(&self.catalog, slide_images, &self.options) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Export failed while generating the document: {}", e);
                return ExportResult::failed(e.to_string(), warnings);
            }
        };

        match sink.deliver(&self.output_filename, HTML_MIME_TYPE, &html) {
            Ok(()) => {
                log::info!(
                    "Exported {} with {} warning(s)",
                    self.output_filename,
                    warnings.len()
                );
                ExportResult::succeeded(warnings)
            }
            Err(e) => {
                log::error!("Export failed while delivering {}: {}", self.output_filename, e);
                ExportResult::failed(e.to_string(), warnings)
            }
        }
    }
}

/// Exports the built-in deck with default settings.
pub fn export_deck(
    slide_images: &BTreeMap<u32, SlideImage>,
    sink: &mut dyn ArtifactSink,
) -> ExportResult {
    DeckExporter::default().export(slide_images, sink)
}
