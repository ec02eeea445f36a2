use image::RgbaImage;

use crate::foundation::error::{PreviewError, PreviewResult};

/// Decode encoded image bytes into a straight-alpha RGBA8 buffer.
///
/// Sources without an alpha channel become fully opaque. Any format the
/// `image` crate recognizes is accepted here; restricting uploads to
/// JPEG/PNG is the upload handler's concern.
pub fn decode_image(bytes: &[u8]) -> PreviewResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PreviewError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
