//! Assignment of a batch of uploads to slides in a fixed order.

use crate::upload::EncodedUpload;
use serde::Serialize;
use std::collections::BTreeMap;

/// Target slide id for each upload position. The first upload goes to slide 3,
/// the second to slide 9, and so on. Slide 1 is never a bulk target.
pub const BULK_SLIDE_ORDER: [u32; 10] = [3, 9, 10, 2, 7, 6, 4, 11, 5, 8];

/// Outcome of mapping an upload batch onto [`BULK_SLIDE_ORDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignment {
    /// Slide id to the upload assigned to it.
    pub mapping: BTreeMap<u32, EncodedUpload>,

    /// Uploads past the last target slot, in upload order.
    pub unused: Vec<EncodedUpload>,

    /// Target slides that received nothing because the batch was short.
    pub missing_slides: Vec<u32>,
}

impl BulkAssignment {
    /// Slide id for the upload at `position`, if it has a slot.
    pub fn slot_for(position: usize) -> Option<u32> {
        BULK_SLIDE_ORDER.get(position).copied()
    }
}

/// Pairs uploads with slide ids by position.
pub fn plan_bulk_assignment(uploads: Vec<EncodedUpload>) -> BulkAssignment {
    let assigned = uploads.len().min(BULK_SLIDE_ORDER.len());
    let mut uploads = uploads.into_iter();

    let mapping = BULK_SLIDE_ORDER
        .iter()
        .copied()
        .zip(uploads.by_ref())
        .collect();
    let unused: Vec<EncodedUpload> = uploads.collect();
    let missing_slides = BULK_SLIDE_ORDER[assigned..].to_vec();

    if !unused.is_empty() {
        log::warn!(
            "{} image(s) will not be used (only {} slides take bulk images)",
            unused.len(),
            BULK_SLIDE_ORDER.len()
        );
    }

    BulkAssignment {
        mapping,
        unused,
        missing_slides,
    }
}
