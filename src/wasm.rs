//! Browser bindings. The host page owns the Blob download; these functions
//! only produce strings.

use crate::classifier::classify_url;
use crate::export::{collect_warnings, DeckExporter, ExportResult};
use crate::models::slide_image::SlideImage;
use crate::state::defaults::default_slide_images;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Installs the console logger and, when enabled, the panic hook.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second call finds the logger already set; that is fine.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Classifies `url` and returns the classification as JSON.
#[wasm_bindgen]
pub fn classify_image_url(url: &str) -> Result<String, JsValue> {
    serde_json::to_string(&classify_url(url)).map_err(to_js_error)
}

/// The built-in seed image map as JSON.
#[wasm_bindgen]
pub fn default_slide_images_json() -> Result<String, JsValue> {
    serde_json::to_string(&default_slide_images()).map_err(to_js_error)
}

/// Export outcome handed to the page: the [`ExportResult`] fields, plus the
/// document when rendering succeeded.
#[derive(Debug, Serialize)]
struct BrowserExport {
    #[serde(flatten)]
    result: ExportResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
}

impl BrowserExport {
    fn failed(error: impl Into<String>, warnings: Vec<crate::export::ExportWarning>) -> Self {
        Self {
            result: ExportResult::failed(error, warnings),
            html: None,
        }
    }
}

fn render_browser_export(slide_images_json: &str) -> BrowserExport {
    let images: BTreeMap<u32, SlideImage> = match serde_json::from_str(slide_images_json) {
        Ok(images) => images,
        Err(e) => {
            log::warn!("Rejected slide image map: {}", e);
            return BrowserExport::failed(e.to_string(), Vec::new());
        }
    };
    let exporter = DeckExporter::default();
    match exporter.render(&images) {
        Ok(rendered) => BrowserExport {
            result: ExportResult::succeeded(rendered.warnings),
            html: Some(rendered.html),
        },
        Err(e) => {
            log::error!("Deck rendering failed: {}", e);
            BrowserExport::failed(e.to_string(), collect_warnings(exporter.catalog(), &images))
        }
    }
}

/// Renders the default deck for a JSON image map (`{"5": {"url": ...}}`).
///
/// Returns `{"success":true,"warnings":[...],"html":"..."}`, or
/// `{"success":false,"error":"...","warnings":[...]}` when the map cannot be
/// parsed or rendered. Download is left to the page.
#[wasm_bindgen]
pub fn export_deck_html(slide_images_json: &str) -> Result<String, JsValue> {
    serde_json::to_string(&render_browser_export(slide_images_json)).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn export_json(input: &str) -> Value {
        let text = serde_json::to_string(&render_browser_export(input)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn export_reports_search_url_warning_alongside_html() {
        let out = export_json(
            r#"{"5": {"url": "https://www.google.com/search?tbm=isch&q=workers"}}"#,
        );
        assert_eq!(out["success"], true);
        assert!(out.get("error").is_none());
        let warnings = out["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["slideId"], 5);
        assert!(out["html"].as_str().unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn export_with_direct_image_has_no_warnings() {
        let out = export_json(r#"{"5": {"url": "https://x.com/a.png"}}"#);
        assert_eq!(out["success"], true);
        assert!(out["warnings"].as_array().unwrap().is_empty());
        assert!(out["html"].as_str().unwrap().contains("https://x.com/a.png"));
    }

    #[test]
    fn unparseable_map_is_a_failed_result() {
        let out = export_json("{not json");
        assert_eq!(out["success"], false);
        assert!(!out["error"].as_str().unwrap().is_empty());
        assert!(out["warnings"].as_array().unwrap().is_empty());
        assert!(out.get("html").is_none());
    }
}
