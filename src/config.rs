//! Runtime configuration for the deck core.

use crate::errors::{DeckError, Result};
use crate::models::slide_image::SlideImage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable naming a JSON config file, read by [`DeckConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "DECK_CONFIG";

pub const DEFAULT_OUTPUT_FILENAME: &str = "Kisan_Sahayak_Presentation.html";
pub const DEFAULT_DOCUMENT_TITLE: &str = "Kisan Sahayak Presentation";
pub const DEFAULT_ACCENT_COLOR: &str = "#2563eb";

/// Settings for seeding the store and shaping the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckConfig {
    /// File name given to the exported artifact.
    pub output_filename: String,

    /// `<title>` of the exported document.
    pub document_title: String,

    /// `#rrggbb` accent used for dividers, bullets and headers.
    pub accent_color: String,

    /// Whether a fresh store starts with the built-in placeholder images.
    pub seed_default_images: bool,

    /// Explicit seed map. Takes precedence over the built-in one when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_images: Option<BTreeMap<u32, SlideImage>>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            seed_default_images: true,
            seed_images: None,
        }
    }
}

impl DeckConfig {
    /// Parses and validates a JSON config. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading deck config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by `DECK_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(path),
            Err(_) => {
                log::debug!("{} not set, using default deck config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let filename = self.output_filename.trim();
        if filename.is_empty() {
            return Err(DeckError::InvalidConfig(
                "outputFilename must not be empty".to_string(),
            ));
        }
        if !filename.to_lowercase().ends_with(".html") {
            return Err(DeckError::InvalidConfig(format!(
                "outputFilename must end in .html, got {:?}",
                self.output_filename
            )));
        }
        if !is_hex_color(&self.accent_color) {
            return Err(DeckError::InvalidConfig(format!(
                "accentColor must be a #rrggbb value, got {:?}",
                self.accent_color
            )));
        }
        Ok(())
    }

    /// The image map a new store should start with.
    pub fn initial_images(&self) -> BTreeMap<u32, SlideImage> {
        match &self.seed_images {
            Some(images) => images.clone(),
            None if self.seed_default_images => crate::state::defaults::default_slide_images(),
            None => BTreeMap::new(),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = DeckConfig::from_json_str(r##"{"accentColor":"#10b981"}"##).unwrap();
        assert_eq!(config.accent_color, "#10b981");
        assert_eq!(config.output_filename, DEFAULT_OUTPUT_FILENAME);
        assert!(config.seed_default_images);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            DeckConfig::from_json_str(r#"{"outputFilename":"deck.pdf"}"#),
            Err(DeckError::InvalidConfig(_))
        ));
        assert!(matches!(
            DeckConfig::from_json_str(r#"{"outputFilename":"  "}"#),
            Err(DeckError::InvalidConfig(_))
        ));
        assert!(matches!(
            DeckConfig::from_json_str(r#"{"accentColor":"blue"}"#),
            Err(DeckError::InvalidConfig(_))
        ));
    }

    #[test]
    fn initial_images_respects_seed_settings() {
        assert_eq!(DeckConfig::default().initial_images().len(), 10);

        let empty = DeckConfig {
            seed_default_images: false,
            ..Default::default()
        };
        assert!(empty.initial_images().is_empty());

        let config = DeckConfig::from_json_str(
            r#"{"seedImages":{"4":{"url":"https://x.com/a.png","caption":"c"}}}"#,
        )
        .unwrap();
        let images = config.initial_images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[&4].caption, "c");
    }
}
