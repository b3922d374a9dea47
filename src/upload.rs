//! Reading user-selected image files into encoded payloads.
//!
//! The core never decodes images. The only validation is the `image/` MIME
//! prefix, and the only transformation is base64 data-URL encoding.

use crate::errors::{DeckError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A raw file handed over by the upload input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Encodes the file as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Validates and encodes a single file.
    pub fn encode(&self) -> Result<EncodedUpload> {
        if !self.is_image() {
            log::warn!("Rejected non-image upload {:?} ({})", self.filename, self.mime_type);
            return Err(DeckError::NotAnImage { count: 1 });
        }
        Ok(EncodedUpload {
            data: self.to_data_url(),
            filename: self.filename.clone(),
        })
    }
}

/// An upload after encoding, ready to merge into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedUpload {
    pub data: String,
    pub filename: String,
}

/// Rejects the whole batch when any file is not an image.
pub fn validate_upload_batch(files: &[UploadedFile]) -> Result<()> {
    let count = files.iter().filter(|f| !f.is_image()).count();
    if count > 0 {
        log::warn!("Rejected upload batch: {} non-image file(s)", count);
        return Err(DeckError::NotAnImage { count });
    }
    Ok(())
}

/// Encodes an already-read batch, in selection order. All or nothing.
pub fn encode_upload_batch(files: &[UploadedFile]) -> Result<Vec<EncodedUpload>> {
    validate_upload_batch(files)?;
    files.iter().map(UploadedFile::encode).collect()
}

/// Awaits every pending read, then validates and encodes the batch.
///
/// Reads run concurrently and are joined all-or-nothing: the first failed
/// read fails the batch and nothing is returned for merging.
pub async fn read_upload_batch<I, F>(reads: I) -> Result<Vec<EncodedUpload>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = std::io::Result<UploadedFile>>,
{
    let files = try_join_all(reads).await?;
    log::debug!("Read {} uploaded file(s)", files.len());
    encode_upload_batch(&files)
}
