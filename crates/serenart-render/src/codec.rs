//! Lossless PNG encoding of exported rasters, and decoding of base images.

use thiserror::Error;
use tiny_skia::Pixmap;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("PNG decoding failed: {0}")]
    Decode(String),
}

/// Encode a raster as PNG bytes.
///
/// # Errors
/// Returns `CodecError::Encode` if the PNG encoder rejects the image.
pub fn encode_png(raster: &Pixmap) -> Result<Vec<u8>, CodecError> {
    raster
        .encode_png()
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode PNG bytes into a raster.
///
/// # Errors
/// Returns `CodecError::Decode` for malformed or unsupported PNG data.
pub fn decode_png(bytes: &[u8]) -> Result<Pixmap, CodecError> {
    Pixmap::decode_png(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::skia_color;
    use crate::surface::sample;
    use serenart_core::Color;

    #[test]
    fn png_preserves_pixels() {
        let mut raster = Pixmap::new(8, 4).unwrap();
        raster.fill(skia_color(Color::rgb(0xF0, 0x62, 0x92)));

        let bytes = encode_png(&raster).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let back = decode_png(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (8, 4));
        assert_eq!(sample(&back, 3, 2), Some(Color::rgb(0xF0, 0x62, 0x92)));
    }

    #[test]
    fn garbage_is_decode_error() {
        assert!(matches!(decode_png(b"not a png"), Err(CodecError::Decode(_))));
    }
}
