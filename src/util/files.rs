//! Client-side file constraints and browser file plumbing.
//!
//! Uploads are checked here before any network call: the declared MIME
//! type must be an image and the size must not exceed 10 MiB. The checks
//! operate on plain values so they are testable natively; the `web_sys`
//! glue (object URLs, blob construction) is hydrate-gated.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use thiserror::Error;

/// Largest accepted upload: 10 MiB exactly.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Local rejection of a picked file. Never sent to the network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FileError {
    #[error("Please upload an image file")]
    NotAnImage,
    #[error("Image must be smaller than 10MB")]
    TooLarge,
}

/// Validate a picked file's declared type and size.
pub fn validate_image(mime: &str, size: u64) -> Result<(), FileError> {
    if !mime.starts_with("image/") {
        return Err(FileError::NotAnImage);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(FileError::TooLarge);
    }
    Ok(())
}

/// Split a `data:<mime>;base64,<payload>` URL into MIME type and bytes.
/// Used to re-encode a composition result as an uploadable room photo.
pub fn parse_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    use base64::Engine;

    let rest = url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    Some((mime.to_owned(), bytes))
}

/// Most recently picked raw file for an upload slot. `web_sys::File` only
/// exists in the browser; on the server the slot is always empty.
#[derive(Clone, Debug, Default)]
pub struct FileSlot {
    #[cfg(feature = "hydrate")]
    file: Option<web_sys::File>,
}

impl FileSlot {
    #[cfg(feature = "hydrate")]
    pub fn set(&mut self, file: web_sys::File) {
        self.file = Some(file);
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.file = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.file.is_none()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            true
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn get(&self) -> Option<web_sys::File> {
        self.file.clone()
    }
}

/// Object URL for previewing a picked file without reading it into memory.
#[cfg(feature = "hydrate")]
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Build a typed `Blob` from raw bytes, for re-uploading decoded images.
#[cfg(feature = "hydrate")]
pub fn bytes_to_blob(bytes: &[u8], mime: &str) -> Option<web_sys::Blob> {
    let array = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options).ok()
}
