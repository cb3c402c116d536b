//! Image references attached to posts.
//!
//! Acquisition happens outside the core. By the time an image reaches a
//! post it is an opaque string: either a remote URL or a handle minted by
//! the host for a locally picked file. Reachability is never checked.

use pinwall_shared::constants::MAX_IMAGE_SIZE;
use pinwall_shared::Rejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    /// Process-local handle for an uploaded file.
    Local(String),
}

impl ImageSource {
    /// The string stored in `Post::image_url`. Blank references yield `None`.
    pub fn into_reference(self) -> Option<String> {
        let reference = match self {
            ImageSource::Remote(url) => url,
            ImageSource::Local(handle) => handle,
        };
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Gate a picked file before the host turns it into a local handle.
pub fn validate_upload(content_type: &str, size: u64) -> Result<(), Rejection> {
    if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(Rejection::NotAnImage);
    }
    if size > MAX_IMAGE_SIZE {
        return Err(Rejection::ImageTooLarge {
            size,
            max: MAX_IMAGE_SIZE,
        });
    }
    Ok(())
}
