use std::env;

use deck_tools::export::FileSink;
use deck_tools::{DeckConfig, DeckExporter, DeckState, SlideCatalog, SlideImage};

fn main() -> anyhow::Result<()> {
    // Initialize the logger; RUST_LOG overrides the default level.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Pick up DECK_CONFIG from a local .env if present.
    let _ = dotenvy::dotenv();
    let config = DeckConfig::from_env()?;
    log::info!("Using output file {}", config.output_filename);

    let catalog = SlideCatalog::default();
    let mut state = DeckState::from_config(&config);

    // Optional: `cargo run --example export_deck -- <slide_id> <image_url> [caption]`
    let args: Vec<String> = env::args().skip(1).collect();
    if let [slide_id, url, rest @ ..] = args.as_slice() {
        let slide_id: u32 = slide_id.parse()?;
        let caption = rest.first().cloned().unwrap_or_default();
        state.set_slide_image(slide_id, SlideImage::from_url(url.as_str()).with_caption(caption));
        if let Some(guidance) = deck_tools::classify_url(url).guidance_message {
            log::warn!("Slide {}: {}", slide_id, guidance);
        }
    }

    let out_dir = env::current_dir()?;
    let mut sink = FileSink::new(&out_dir);
    let exporter = DeckExporter::new(catalog, &config);
    let result = exporter.export(state.slide_images(), &mut sink);

    println!("{}", serde_json::to_string_pretty(&result)?);
    if !result.success {
        anyhow::bail!(
            "export failed: {}",
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }
    log::info!(
        "Deck written to {}",
        sink.path_for(exporter.output_filename()).display()
    );
    Ok(())
}
