use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::Result;

/// Lossy quality for stored thumbnails — small footprint, still viewable.
pub const JPEG_QUALITY: u8 = 60;

/// Compress a decoded thumbnail into the blob stored on the item row.
pub fn encode(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut Cursor::new(&mut buf), JPEG_QUALITY)
        .encode_image(&img.to_rgb8())?;
    Ok(buf)
}
