use log::debug;

use crate::error::PnmError;
use crate::grid::Grid;
use crate::magic::MagicNumber;
use crate::pixel::ChannelModel;

use super::{Bitmap, check_dimensions, check_magic, check_max_value};

/// Single-channel 8-bit raster (P2/P5).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Graymap {
    grid: Grid<u8>,
    magic: MagicNumber,
    max_value: u8,
}

impl Graymap {
    /// A black graymap.
    pub fn new(
        width: u32,
        height: u32,
        magic: MagicNumber,
        max_value: u8,
    ) -> Result<Self, PnmError> {
        check_dimensions(width, height)?;
        check_magic(magic, ChannelModel::Gray)?;
        check_max_value(max_value)?;
        Ok(Self {
            grid: Grid::filled(width, height, 0),
            magic,
            max_value,
        })
    }

    pub(crate) fn from_grid(grid: Grid<u8>, magic: MagicNumber, max_value: u8) -> Self {
        debug_assert_eq!(magic.channel_model(), ChannelModel::Gray);
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

    pub fn at(&self, x: u32, y: u32) -> Option<u8> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, value: u8) -> bool {
        self.grid.set(x, y, value)
    }

    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    /// Switch between P2 and P5.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmError> {
        check_magic(magic, ChannelModel::Gray)?;
        self.magic = magic;
        Ok(())
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Store a new max value, clamping any sample above it down to it.
    ///
    /// Samples are not rescaled.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), PnmError> {
        check_max_value(max_value)?;
        self.max_value = max_value;
        for sample in self.grid.as_mut_slice() {
            *sample = (*sample).min(max_value);
        }
        Ok(())
    }

    /// Replace every sample with `max_value - sample`.
    pub fn invert(&mut self) {
        let max = self.max_value;
        for sample in self.grid.as_mut_slice() {
            *sample = max.wrapping_sub(*sample);
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

    /// Threshold into a plain (P1) bitmap: a sample is set when it is
    /// strictly greater than `max_value / 2`.
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max_value / 2;
        debug!("graymap -> bitmap, set above {threshold}");
        Bitmap::from_grid(self.grid.map(|s| s > threshold), MagicNumber::P1)
    }
}
