use crate::error::PnmError;
use crate::info::ImageInfo;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). They are checked against the
/// header, before any sample is read or any raster storage is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes of decoded raster storage.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a parsed header. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, info: &ImageInfo) -> Result<(), PnmError> {
        let (width, height) = (u64::from(info.width), u64::from(info.height));
        let pixels = width * height;

        exceeds("width", width, self.max_width)?;
        exceeds("height", height, self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;

        let bytes_per_pixel = info.magic.channel_model().bytes_per_pixel() as u64;
        exceeds(
            "raster bytes",
            pixels.saturating_mul(bytes_per_pixel),
            self.max_memory_bytes,
        )
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), PnmError> {
    match limit {
        Some(max) if value > max => Err(PnmError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
