use serde::{Deserialize, Serialize};

/// The image and caption attached to a single slide.
///
/// Store operations always replace a whole `SlideImage`; there are no partial
/// field patches. An entry is only meaningful when [`SlideImage::is_meaningful`]
/// holds, which the editing surface checks before committing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideImage {
    /// Remote image URL. May be empty when only an upload is present.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub caption: String,

    /// Encoded upload payload, a `data:image/...;base64,` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
}

impl SlideImage {
    /// Creates an entry that only points at a remote URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_upload(mut self, data: impl Into<String>, filename: impl Into<String>) -> Self {
        self.uploaded_data = Some(data.into());
        self.original_filename = Some(filename.into());
        self
    }

    pub fn has_upload(&self) -> bool {
        self.uploaded_data.is_some()
    }

    /// True when there is something to display: a non-blank URL or uploaded data.
    pub fn is_meaningful(&self) -> bool {
        !self.url.trim().is_empty() || self.has_upload()
    }

    /// The source a renderer should load, preferring uploaded data over the URL.
    pub fn display_source(&self) -> &str {
        self.uploaded_data.as_deref().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_is_preferred_as_display_source() {
        let image = SlideImage::from_url("https://example.com/a.png")
            .with_upload("data:image/png;base64,AAAA", "a.png");
        assert_eq!(image.display_source(), "data:image/png;base64,AAAA");
        assert_eq!(
            SlideImage::from_url("https://example.com/a.png").display_source(),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn blank_url_without_upload_is_not_meaningful() {
        assert!(!SlideImage::from_url("   ").is_meaningful());
        assert!(!SlideImage::default().with_caption("c").is_meaningful());
        assert!(SlideImage::default()
            .with_upload("data:image/png;base64,AAAA", "a.png")
            .is_meaningful());
    }

    #[test]
    fn serializes_with_camel_case_and_skips_missing_upload() {
        let json = serde_json::to_string(&SlideImage::from_url("u").with_caption("c")).unwrap();
        assert_eq!(json, r#"{"url":"u","caption":"c"}"#);

        let parsed: SlideImage = serde_json::from_str(
            r#"{"uploadedData":"data:image/png;base64,AA","originalFilename":"x.png"}"#,
        )
        .unwrap();
        assert_eq!(parsed.url, "");
        assert_eq!(parsed.original_filename.as_deref(), Some("x.png"));
    }
}
