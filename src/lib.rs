pub mod classifier;
pub mod config;
pub mod converters;
pub mod errors;
pub mod export;
pub mod models;
pub mod preview;
pub mod state;
pub mod upload;
pub mod wasm;

pub use classifier::{classify_url, UrlClassification, UrlKind};
pub use config::DeckConfig;
pub use errors::{DeckError, Result};
pub use export::{export_deck, DeckExporter, ExportResult, ExportWarning};
pub use models::{
    catalog::SlideCatalog,
    slide::{Slide, SlideType},
    slide_image::SlideImage,
};
pub use state::{DeckState, ImageForm, BULK_SLIDE_ORDER};
