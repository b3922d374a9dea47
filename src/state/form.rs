//! Per-slide image editing, layered over [`DeckState`].

use super::store::DeckState;
use crate::classifier::classify_url;
use crate::errors::{DeckError, Result};
use crate::models::{catalog::SlideCatalog, slide_image::SlideImage};
use crate::upload::UploadedFile;

/// Slides that accept file uploads. Slide 1 is URL-only.
const UPLOAD_SLIDES: std::ops::RangeInclusive<u32> = 2..=11;

/// Local edit buffer for one slide's image fields.
///
/// Edits stay local until [`ImageForm::save`]; uploads and removals commit
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageForm {
    slide_id: u32,
    pub url: String,
    pub caption: String,
    uploaded_data: Option<String>,
    original_filename: Option<String>,
}

impl ImageForm {
    /// Opens a form for `slide_id`, pre-filled from the store.
    pub fn load(slide_id: u32, catalog: &SlideCatalog, state: &DeckState) -> Result<Self> {
        if catalog.find(slide_id).is_none() {
            return Err(DeckError::UnknownSlide(slide_id));
        }
        let mut form = Self {
            slide_id,
            url: String::new(),
            caption: String::new(),
            uploaded_data: None,
            original_filename: None,
        };
        form.sync(state);
        Ok(form)
    }

    /// Re-reads the fields from the store, dropping local edits.
    pub fn sync(&mut self, state: &DeckState) {
        let current = state.slide_image(self.slide_id).cloned().unwrap_or_default();
        self.url = current.url;
        self.caption = current.caption;
        self.uploaded_data = current.uploaded_data;
        self.original_filename = current.original_filename;
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn uploaded_data(&self) -> Option<&str> {
        self.uploaded_data.as_deref()
    }

    pub fn original_filename(&self) -> Option<&str> {
        self.original_filename.as_deref()
    }

    pub fn allows_upload(&self) -> bool {
        UPLOAD_SLIDES.contains(&self.slide_id)
    }

    /// Live guidance for the URL currently typed in.
    pub fn guidance(&self) -> Option<&'static str> {
        classify_url(&self.url).guidance_message
    }

    /// Whether a save would commit a meaningful entry.
    pub fn can_save(&self) -> bool {
        self.to_image().is_meaningful()
    }

    fn to_image(&self) -> SlideImage {
        SlideImage {
            url: self.url.trim().to_string(),
            caption: self.caption.trim().to_string(),
            uploaded_data: self.uploaded_data.clone(),
            original_filename: self.original_filename.clone(),
        }
    }

    /// Commits the trimmed fields. Returns `false` without touching the
    /// store when there is neither a URL nor an upload.
    pub fn save(&self, state: &mut DeckState) -> bool {
        if !self.can_save() {
            return false;
        }
        state.set_slide_image(self.slide_id, self.to_image());
        true
    }

    /// Validates and encodes `file`, then saves it with the current fields.
    ///
    /// Slides outside the upload range are rejected before the file is read.
    pub fn attach_upload(&mut self, file: &UploadedFile, state: &mut DeckState) -> Result<()> {
        if !self.allows_upload() {
            return Err(DeckError::UploadNotAllowed(self.slide_id));
        }
        let encoded = file.encode()?;
        self.uploaded_data = Some(encoded.data);
        self.original_filename = Some(encoded.filename);
        state.set_slide_image(self.slide_id, self.to_image());
        Ok(())
    }

    /// Drops the upload but keeps the URL and caption in the store.
    pub fn remove_upload(&mut self, state: &mut DeckState) {
        self.uploaded_data = None;
        self.original_filename = None;
        state.set_slide_image(self.slide_id, self.to_image());
    }

    /// Deletes the slide's image entirely and clears the form.
    pub fn remove(&mut self, state: &mut DeckState) {
        state.remove_slide_image(self.slide_id);
        self.url.clear();
        self.caption.clear();
        self.uploaded_data = None;
        self.original_filename = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{NOT_DIRECT_GUIDANCE, SEARCH_RESULTS_GUIDANCE};

    #[test]
    fn load_rejects_unknown_slide() {
        let state = DeckState::empty();
        assert!(matches!(
            ImageForm::load(12, &SlideCatalog::default(), &state),
            Err(DeckError::UnknownSlide(12))
        ));
    }

    #[test]
    fn save_trims_and_requires_content() {
        let catalog = SlideCatalog::default();
        let mut state = DeckState::empty();
        let mut form = ImageForm::load(4, &catalog, &state).unwrap();

        form.caption = "only a caption".to_string();
        form.url = "   ".to_string();
        assert!(!form.save(&mut state));
        assert!(state.slide_image(4).is_none());

        form.url = "  https://x.com/a.png ".to_string();
        form.caption = " c ".to_string();
        assert!(form.save(&mut state));
        let saved = state.slide_image(4).unwrap();
        assert_eq!(saved.url, "https://x.com/a.png");
        assert_eq!(saved.caption, "c");
    }

    #[test]
    fn guidance_tracks_typed_url() {
        let catalog = SlideCatalog::default();
        let state = DeckState::default();
        let mut form = ImageForm::load(2, &catalog, &state).unwrap();
        assert_eq!(form.guidance(), Some(SEARCH_RESULTS_GUIDANCE));
        form.url = "https://example.com/page".to_string();
        assert_eq!(form.guidance(), Some(NOT_DIRECT_GUIDANCE));
        form.url.clear();
        assert_eq!(form.guidance(), None);
    }

    #[test]
    fn upload_auto_saves_and_can_be_removed() {
        let catalog = SlideCatalog::default();
        let mut state = DeckState::empty();
        let mut form = ImageForm::load(6, &catalog, &state).unwrap();
        form.url = "https://x.com/a.png".to_string();

        let file = UploadedFile::new("photo.png", "image/png", vec![1, 2, 3]);
        form.attach_upload(&file, &mut state).unwrap();
        let saved = state.slide_image(6).unwrap();
        assert_eq!(saved.original_filename.as_deref(), Some("photo.png"));
        assert_eq!(saved.uploaded_data.as_deref(), Some("data:image/png;base64,AQID"));

        form.remove_upload(&mut state);
        let saved = state.slide_image(6).unwrap();
        assert!(!saved.has_upload());
        assert_eq!(saved.url, "https://x.com/a.png");

        form.remove(&mut state);
        assert!(state.slide_image(6).is_none());
        assert!(form.url.is_empty());
    }

    #[test]
    fn non_image_upload_leaves_store_untouched() {
        let catalog = SlideCatalog::default();
        let mut state = DeckState::empty();
        let mut form = ImageForm::load(6, &catalog, &state).unwrap();
        let file = UploadedFile::new("notes.txt", "text/plain", b"x".to_vec());
        assert!(matches!(
            form.attach_upload(&file, &mut state),
            Err(DeckError::NotAnImage { count: 1 })
        ));
        assert!(state.slide_images().is_empty());
        assert!(form.uploaded_data().is_none());
    }

    #[test]
    fn only_slides_two_to_eleven_take_uploads() {
        let catalog = SlideCatalog::default();
        let state = DeckState::empty();
        assert!(!ImageForm::load(1, &catalog, &state).unwrap().allows_upload());
        assert!(ImageForm::load(2, &catalog, &state).unwrap().allows_upload());
        assert!(ImageForm::load(11, &catalog, &state).unwrap().allows_upload());
    }

    #[test]
    fn title_slide_rejects_upload_without_mutation() {
        let catalog = SlideCatalog::default();
        let mut state = DeckState::default();
        let before = state.slide_images().clone();
        let mut form = ImageForm::load(1, &catalog, &state).unwrap();

        let file = UploadedFile::new("cover.png", "image/png", vec![1, 2, 3]);
        assert!(matches!(
            form.attach_upload(&file, &mut state),
            Err(DeckError::UploadNotAllowed(1))
        ));
        assert_eq!(state.slide_images(), &before);
        assert!(form.uploaded_data().is_none());
        assert!(form.original_filename().is_none());
    }

    #[test]
    fn can_save_agrees_with_meaningful_entry() {
        let catalog = SlideCatalog::default();
        let state = DeckState::empty();
        let mut form = ImageForm::load(7, &catalog, &state).unwrap();

        for (url, caption) in [("", ""), ("  ", "caption"), ("\t\n", "")] {
            form.url = url.to_string();
            form.caption = caption.to_string();
            assert_eq!(form.can_save(), form.to_image().is_meaningful());
            assert!(!form.can_save());
        }

        form.url = " https://x.com/a.png ".to_string();
        assert!(form.can_save());
        assert!(form.to_image().is_meaningful());
    }
}
