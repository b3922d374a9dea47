//! The single authoritative holder of navigation position and slide images.

use super::bulk::{plan_bulk_assignment, BulkAssignment};
use super::listener::{DeckChange, DeckListener, ListenerId, Listeners};
use crate::config::DeckConfig;
use crate::models::{catalog::SlideCatalog, slide::Slide, slide_image::SlideImage};
use crate::upload::EncodedUpload;
use std::collections::BTreeMap;

/// Mutable deck state shared by every view.
///
/// Construct one explicitly and pass it to whatever needs it. All mutations
/// are synchronous and notify registered listeners after they complete.
#[derive(Debug)]
pub struct DeckState {
    current_slide_index: usize,
    slide_images: BTreeMap<u32, SlideImage>,
    listeners: Listeners,
}

impl Default for DeckState {
    /// A store seeded with the built-in placeholder images.
    fn default() -> Self {
        Self::from_config(&DeckConfig::default())
    }
}

impl DeckState {
    /// A store with no image assignments.
    pub fn empty() -> Self {
        Self::with_images(BTreeMap::new())
    }

    pub fn with_images(slide_images: BTreeMap<u32, SlideImage>) -> Self {
        Self {
            current_slide_index: 0,
            slide_images,
            listeners: Listeners::default(),
        }
    }

    pub fn from_config(config: &DeckConfig) -> Self {
        Self::with_images(config.initial_images())
    }

    pub fn current_slide_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn slide_images(&self) -> &BTreeMap<u32, SlideImage> {
        &self.slide_images
    }

    pub fn slide_image(&self, slide_id: u32) -> Option<&SlideImage> {
        self.slide_images.get(&slide_id)
    }

    /// Registers a listener. It is called after every subsequent mutation.
    pub fn subscribe(&mut self, listener: impl DeckListener + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Returns whether a listener was registered under `id`.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Sets the active slide index.
    ///
    /// The index is not range-checked; callers clamp against the catalog
    /// length. Use [`DeckState::select_slide`] for a clamped variant.
    pub fn set_current_slide(&mut self, index: usize) {
        self.current_slide_index = index;
        self.listeners.notify(&DeckChange::CurrentSlide(index));
    }

    /// Replaces (or creates) the image for `slide_id`. The id is not validated.
    pub fn set_slide_image(&mut self, slide_id: u32, image: SlideImage) {
        log::debug!("Setting image for slide {}", slide_id);
        self.slide_images.insert(slide_id, image);
        self.listeners.notify(&DeckChange::ImageSet(slide_id));
    }

    /// Deletes the image for `slide_id`. A missing entry is a silent no-op.
    pub fn remove_slide_image(&mut self, slide_id: u32) {
        if self.slide_images.remove(&slide_id).is_some() {
            log::debug!("Removed image for slide {}", slide_id);
            self.listeners.notify(&DeckChange::ImageRemoved(slide_id));
        }
    }

    /// Merges uploads into existing entries in one batch.
    ///
    /// Existing `url` and `caption` survive; upload data and filename are
    /// overwritten.
    pub fn set_bulk_slide_images(&mut self, mapping: BTreeMap<u32, EncodedUpload>) {
        if mapping.is_empty() {
            return;
        }
        let touched: Vec<u32> = mapping.keys().copied().collect();
        for (slide_id, upload) in mapping {
            let entry = self.slide_images.entry(slide_id).or_default();
            entry.uploaded_data = Some(upload.data);
            entry.original_filename = Some(upload.filename);
        }
        log::info!("Bulk-assigned images to slides {:?}", touched);
        self.listeners.notify(&DeckChange::BulkAssigned(touched));
    }

    /// Plans a bulk assignment for `uploads`, applies it, and returns the plan.
    pub fn assign_uploads(&mut self, uploads: Vec<EncodedUpload>) -> BulkAssignment {
        let plan = plan_bulk_assignment(uploads);
        self.set_bulk_slide_images(plan.mapping.clone());
        plan
    }

    // --- Navigation ---

    pub fn can_go_previous(&self) -> bool {
        self.current_slide_index > 0
    }

    pub fn can_go_next(&self, catalog: &SlideCatalog) -> bool {
        self.current_slide_index + 1 < catalog.len()
    }

    /// Moves back one slide. Does nothing on the first slide.
    pub fn go_previous(&mut self) {
        if self.can_go_previous() {
            self.set_current_slide(self.current_slide_index - 1);
        }
    }

    /// Moves forward one slide. Does nothing on the last slide.
    pub fn go_next(&mut self, catalog: &SlideCatalog) {
        if self.can_go_next(catalog) {
            self.set_current_slide(self.current_slide_index + 1);
        }
    }

    /// Sets the current slide, clamped into the catalog's range.
    pub fn select_slide(&mut self, index: usize, catalog: &SlideCatalog) {
        let last = catalog.len().saturating_sub(1);
        self.set_current_slide(index.min(last));
    }

    /// The slide at the current index, or `None` if the index is out of range.
    pub fn current_slide<'a>(&self, catalog: &'a SlideCatalog) -> Option<&'a Slide> {
        catalog.get(self.current_slide_index)
    }
}
