pub mod html;
pub mod markdown;

pub use html::convert_deck_to_html;
pub use markdown::deck_to_markdown;
