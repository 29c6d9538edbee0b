use crate::error::PnmError;
use crate::grid::Grid;
use crate::magic::MagicNumber;
use crate::pixel::ChannelModel;

use super::{check_dimensions, check_magic};

/// Monochrome raster (P1/P4). `true` is a set (black) pixel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitmap {
    grid: Grid<bool>,
    magic: MagicNumber,
}

impl Bitmap {
    /// A blank (all unset) bitmap.
    pub fn new(width: u32, height: u32, magic: MagicNumber) -> Result<Self, PnmError> {
        check_dimensions(width, height)?;
        check_magic(magic, ChannelModel::Mono)?;
        Ok(Self {
            grid: Grid::filled(width, height, false),
            magic,
        })
    }

    pub(crate) fn from_grid(grid: Grid<bool>, magic: MagicNumber) -> Self {
        debug_assert_eq!(magic.channel_model(), ChannelModel::Mono);
        Self { grid, magic }
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    pub fn at(&self, x: u32, y: u32) -> Option<bool> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) -> bool {
        self.grid.set(x, y, value)
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    /// Switch between P1 and P4.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmError> {
        check_magic(magic, ChannelModel::Mono)?;
        self.magic = magic;
        Ok(())
    }

    pub fn invert(&mut self) {
        for bit in self.grid.as_mut_slice() {
            *bit = !*bit;
        }
    }

    pub fn flip(&mut self) {
        self.grid.flip();
    }

    pub fn flop(&mut self) {
        self.grid.flop();
    }
}
