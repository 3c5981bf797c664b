pub mod codec;
pub mod paint;
pub mod surface;

pub use codec::{CodecError, decode_png, encode_png};
pub use surface::{CompositingSurface, sample};

// Re-export the raster type so callers don't need a direct tiny-skia dependency
pub use tiny_skia::Pixmap;
