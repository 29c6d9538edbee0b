use log::debug;

use crate::error::PnmError;
use crate::grid::Grid;
use crate::magic::MagicNumber;
use crate::pixel::{ChannelModel, Rgb8};

use super::{Bitmap, Graymap, check_dimensions, check_magic, check_max_value};

/// Three-channel 8-bit color raster (P3/P6). Drawing primitives live in [`crate::draw`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    grid: Grid<Rgb8>,
    magic: MagicNumber,
    max_value: u8,
}

impl Pixmap {
    /// A black pixmap.
    pub fn new(
        width: u32,
        height: u32,
        magic: MagicNumber,
        max_value: u8,
    ) -> Result<Self, PnmError> {
        check_dimensions(width, height)?;
        check_magic(magic, ChannelModel::Color)?;
        check_max_value(max_value)?;
        Ok(Self {
            grid: Grid::filled(width, height, Rgb8::new(0, 0, 0)),
            magic,
            max_value,
        })
    }

    pub(crate) fn from_grid(grid: Grid<Rgb8>, magic: MagicNumber, max_value: u8) -> Self {
        debug_assert_eq!(magic.channel_model(), ChannelModel::Color);
        Self {
            grid,
            magic,
            max_value,
        }
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    pub fn at(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, value: Rgb8) -> bool {
        self.grid.set(x, y, value)
    }

    pub fn grid(&self) -> &Grid<Rgb8> {
        &self.grid
    }

    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    /// Switch between P3 and P6.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmError> {
        check_magic(magic, ChannelModel::Color)?;
        self.magic = magic;
        Ok(())
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Store a new max value and rescale every channel by `new / old`,
    /// truncating toward zero.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), PnmError> {
        check_max_value(max_value)?;
        let old = u32::from(self.max_value);
        let new = u32::from(max_value);
        // samples above the old max would overshoot; keep them within the new bound
        let rescale = |c: u8| ((u32::from(c) * new / old).min(new)) as u8;
        for px in self.grid.as_mut_slice() {
            *px = Rgb8::new(rescale(px.r), rescale(px.g), rescale(px.b));
        }
        self.max_value = max_value;
        Ok(())
    }

    /// Complement each channel against the max value.
    pub fn invert(&mut self) {
        let max = self.max_value;
        for px in self.grid.as_mut_slice() {
            *px = Rgb8::new(
                max.wrapping_sub(px.r),
                max.wrapping_sub(px.g),
                max.wrapping_sub(px.b),
            );
        }
    }

    pub fn flip(&mut self) {
        self.grid.flip();
    }

    pub fn flop(&mut self) {
        self.grid.flop();
    }

    pub fn rotate_90_cw(&mut self) {
        self.grid = self.grid.rotate_90_cw();
    }

    /// Average the channels into a graymap with the same max value and encoding.
    pub fn to_graymap(&self) -> Graymap {
        let magic = self.magic.with_channel_model(ChannelModel::Gray);
        debug!("pixmap {} -> graymap {magic}", self.magic);
        Graymap::from_grid(self.grid.map(mean), magic, self.max_value)
    }

    /// Threshold into a bitmap with the same encoding: a pixel is set when
    /// its channel mean is strictly less than `max_value / 2`.
    ///
    /// This is the opposite comparison from [`Graymap::to_bitmap`].
    pub fn to_bitmap(&self) -> Bitmap {
        let magic = self.magic.with_channel_model(ChannelModel::Mono);
        let threshold = self.max_value / 2;
        debug!("pixmap {} -> bitmap {magic}, set below {threshold}", self.magic);
        Bitmap::from_grid(self.grid.map(|px| mean(px) < threshold), magic)
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid<Rgb8> {
        &mut self.grid
    }
}

fn mean(px: Rgb8) -> u8 {
    ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8
}
