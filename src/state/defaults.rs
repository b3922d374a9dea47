use crate::models::slide_image::SlideImage;
use std::collections::BTreeMap;

/// Placeholder search queries for slides 1 to 10. Slide 11 is left unset.
///
/// These are image *search* pages on purpose, so the editor prompts the user
/// to replace each one with a direct link or an upload.
const DEFAULT_QUERIES: [(u32, &str); 10] = [
    (1, "farmer+using+smartphone+in+field"),
    (2, "agriculture+field+research+workers"),
    (3, "manual+farming+labour+hard+work"),
    (4, "farmer+portrait+rural+worker"),
    (5, "community+training+agriculture+workshop"),
    (6, "smartphone+app+in+hand+outdoor"),
    (7, "farmer+using+mobile+phone+in+field"),
    (8, "successful+agriculture+growth+farm"),
    (9, "smart+farming+technology+drone"),
    (10, "happy+farmer+harvest+success"),
];

/// Built-in seed map used when the config does not override it.
pub fn default_slide_images() -> BTreeMap<u32, SlideImage> {
    DEFAULT_QUERIES
        .iter()
        .map(|(id, query)| {
            (
                *id,
                SlideImage::from_url(format!(
                    "https://www.google.com/search?tbm=isch&q={}",
                    query
                )),
            )
        })
        .collect()
}
