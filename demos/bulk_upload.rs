use std::path::{Path, PathBuf};

use deck_tools::converters::markdown::deck_to_markdown;
use deck_tools::export::{export_deck, MemorySink};
use deck_tools::upload::{read_upload_batch, UploadedFile};
use deck_tools::{DeckState, SlideCatalog};

/// Guesses a MIME type from the file extension, the way a browser file input would.
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

async fn read_file(path: PathBuf) -> std::io::Result<UploadedFile> {
    let bytes = tokio::fs::read(&path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(UploadedFile::new(filename, mime_for(&path), bytes))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("Usage: cargo run --example bulk_upload -- <image>...");
        return Ok(());
    }

    let encoded = read_upload_batch(paths.into_iter().map(read_file)).await?;

    let catalog = SlideCatalog::default();
    let mut state = DeckState::default();
    let plan = state.assign_uploads(encoded);

    for (slide_id, upload) in &plan.mapping {
        println!("{} -> Slide {}: {}", upload.filename, slide_id, catalog.title_of(*slide_id));
    }
    for upload in &plan.unused {
        println!("{} -> Unused (more than 10 images)", upload.filename);
    }
    if !plan.missing_slides.is_empty() {
        println!("Slides still missing images: {:?}", plan.missing_slides);
    }

    let mut sink = MemorySink::new();
    let result = export_deck(state.slide_images(), &mut sink);
    log::info!("Export result: {}", serde_json::to_string(&result)?);

    println!(
        "{}",
        deck_to_markdown(&catalog, state.slide_images(), "Kisan Sahayak Presentation")?
    );
    Ok(())
}
