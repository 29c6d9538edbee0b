//! In-memory rasters: one typed struct per channel model, unified by [`Raster`].

mod bitmap;
mod graymap;
mod pixmap;

pub use bitmap::Bitmap;
pub use graymap::Graymap;
pub use pixmap::Pixmap;

use alloc::format;

use crate::error::PnmError;
use crate::magic::MagicNumber;
use crate::pixel::{ChannelModel, Rgb8};

/// A decoded image of any channel model.
///
/// Codec, transform and conversion calls dispatch on the variant; the
/// variant always agrees with [`Raster::magic_number`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Raster {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

/// One pixel value of a [`Raster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    Bit(bool),
    Gray(u8),
    Rgb(Rgb8),
}

impl Raster {
    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Raster::Bitmap(b) => b.size(),
            Raster::Graymap(g) => g.size(),
            Raster::Pixmap(p) => p.size(),
        }
    }

    pub fn magic_number(&self) -> MagicNumber {
        match self {
            Raster::Bitmap(b) => b.magic_number(),
            Raster::Graymap(g) => g.magic_number(),
            Raster::Pixmap(p) => p.magic_number(),
        }
    }

    pub fn channel_model(&self) -> ChannelModel {
        self.magic_number().channel_model()
    }

    /// Change the encoding. The channel model must stay the same.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmError> {
        match self {
            Raster::Bitmap(b) => b.set_magic_number(magic),
            Raster::Graymap(g) => g.set_magic_number(magic),
            Raster::Pixmap(p) => p.set_magic_number(magic),
        }
    }

    /// `None` for bitmaps, which carry no max value.
    pub fn max_value(&self) -> Option<u8> {
        match self {
            Raster::Bitmap(_) => None,
            Raster::Graymap(g) => Some(g.max_value()),
            Raster::Pixmap(p) => Some(p.max_value()),
        }
    }

    /// Graymaps clamp, pixmaps rescale. Bitmaps have no max value.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), PnmError> {
        match self {
            Raster::Bitmap(_) => Err(PnmError::UnsupportedVariant(
                "bitmaps have no max value".into(),
            )),
            Raster::Graymap(g) => g.set_max_value(max_value),
            Raster::Pixmap(p) => p.set_max_value(max_value),
        }
    }

    pub fn at(&self, x: u32, y: u32) -> Option<Sample> {
        match self {
            Raster::Bitmap(b) => b.at(x, y).map(Sample::Bit),
            Raster::Graymap(g) => g.at(x, y).map(Sample::Gray),
            Raster::Pixmap(p) => p.at(x, y).map(Sample::Rgb),
        }
    }

    /// Write one sample. Returns `Ok(false)` when `(x, y)` is outside the raster.
    pub fn set(&mut self, x: u32, y: u32, sample: Sample) -> Result<bool, PnmError> {
        match (self, sample) {
            (Raster::Bitmap(b), Sample::Bit(v)) => Ok(b.set(x, y, v)),
            (Raster::Graymap(g), Sample::Gray(v)) => Ok(g.set(x, y, v)),
            (Raster::Pixmap(p), Sample::Rgb(v)) => Ok(p.set(x, y, v)),
            (raster, sample) => Err(PnmError::UnsupportedVariant(format!(
                "cannot store {sample:?} in a {:?} raster",
                raster.channel_model()
            ))),
        }
    }

    pub fn invert(&mut self) {
        match self {
            Raster::Bitmap(b) => b.invert(),
            Raster::Graymap(g) => g.invert(),
            Raster::Pixmap(p) => p.invert(),
        }
    }

    pub fn flip(&mut self) {
        match self {
            Raster::Bitmap(b) => b.flip(),
            Raster::Graymap(g) => g.flip(),
            Raster::Pixmap(p) => p.flip(),
        }
    }

    pub fn flop(&mut self) {
        match self {
            Raster::Bitmap(b) => b.flop(),
            Raster::Graymap(g) => g.flop(),
            Raster::Pixmap(p) => p.flop(),
        }
    }

    /// Rotate graymaps and pixmaps 90 degrees clockwise.
    ///
    /// Bitmaps are rejected; convert first if a rotated bitmap is needed.
    pub fn rotate_90_cw(&mut self) -> Result<(), PnmError> {
        match self {
            Raster::Bitmap(_) => Err(PnmError::UnsupportedVariant(
                "rotation is not defined for bitmaps".into(),
            )),
            Raster::Graymap(g) => {
                g.rotate_90_cw();
                Ok(())
            }
            Raster::Pixmap(p) => {
                p.rotate_90_cw();
                Ok(())
            }
        }
    }

    /// Pixmap to graymap conversion. A graymap converts to a copy of itself.
    pub fn to_graymap(&self) -> Result<Graymap, PnmError> {
        match self {
            Raster::Bitmap(_) => Err(PnmError::UnsupportedVariant(
                "no bitmap to graymap conversion".into(),
            )),
            Raster::Graymap(g) => Ok(g.clone()),
            Raster::Pixmap(p) => Ok(p.to_graymap()),
        }
    }

    /// Threshold into a bitmap. A bitmap converts to a copy of itself.
    pub fn to_bitmap(&self) -> Bitmap {
        match self {
            Raster::Bitmap(b) => b.clone(),
            Raster::Graymap(g) => g.to_bitmap(),
            Raster::Pixmap(p) => p.to_bitmap(),
        }
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Raster::Bitmap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            Raster::Graymap(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            Raster::Pixmap(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        match self {
            Raster::Pixmap(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Bitmap> for Raster {
    fn from(b: Bitmap) -> Self {
        Raster::Bitmap(b)
    }
}

impl From<Graymap> for Raster {
    fn from(g: Graymap) -> Self {
        Raster::Graymap(g)
    }
}

impl From<Pixmap> for Raster {
    fn from(p: Pixmap) -> Self {
        Raster::Pixmap(p)
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), PnmError> {
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

pub(crate) fn check_magic(magic: MagicNumber, model: ChannelModel) -> Result<(), PnmError> {
    if magic.channel_model() != model {
        return Err(PnmError::UnsupportedVariant(format!(
            "{magic} is not a {model:?} format"
        )));
    }
    Ok(())
}

pub(crate) fn check_max_value(max_value: u8) -> Result<(), PnmError> {
    if max_value == 0 {
        return Err(PnmError::InvalidData("max value must be positive".into()));
    }
    Ok(())
}
