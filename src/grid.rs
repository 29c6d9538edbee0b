//! Row-major 2D storage shared by every raster kind.
//!
//! Orientation operations are written against this grid once, so the
//! three raster kinds cannot disagree about which axis is which.

use alloc::vec;
use alloc::vec::Vec;

/// A `width` x `height` grid of samples stored row after row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    data: Vec<T>,
    width: u32,
    height: u32,
}

impl<T: Copy> Grid<T> {
    pub(crate) fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    pub(crate) fn from_vec(width: u32, height: u32, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Overwrite the sample at column `x`, row `y`.
    ///
    /// Returns `false` (and changes nothing) when the position is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// All samples, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    pub(crate) fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.width.max(1) as usize)
    }

    pub(crate) fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid::from_vec(self.width, self.height, self.data.iter().copied().map(f).collect())
    }

    /// Mirror horizontally: reverse the samples inside every row.
    ///
    /// ```text
    /// a b c      c b a
    /// d e f  ->  f e d
    /// ```
    pub(crate) fn flip(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Mirror vertically: reverse the order of the rows.
    ///
    /// ```text
    /// a b c      d e f
    /// d e f  ->  a b c
    /// ```
    pub(crate) fn flop(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        if width == 0 {
            return;
        }
        let (top, bottom) = self.data.split_at_mut((height / 2) * width);
        let bottom_len = bottom.len();
        for (i, row) in top.chunks_exact_mut(width).enumerate() {
            let start = bottom_len - (i + 1) * width;
            row.swap_with_slice(&mut bottom[start..start + width]);
        }
    }

    /// Rotate 90 degrees clockwise into a new grid of swapped dimensions.
    ///
    /// The sample at (row `r`, column `c`) lands at row `c`, column `height - 1 - r`.
    pub(crate) fn rotate_90_cw(&self) -> Grid<T> {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut out = Vec::with_capacity(self.data.len());
        for c in 0..width {
            for r in (0..height).rev() {
                out.push(self.data[r * width + c]);
            }
        }
        Grid::from_vec(self.height, self.width, out)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(feature = "imgref")]
impl<T: Copy> Grid<T> {
    /// Zero-copy view as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, T> {
        imgref::ImgRef::new(&self.data, self.width as usize, self.height as usize)
    }

    /// Copy into an owned [`imgref::ImgVec`].
    pub fn to_imgvec(&self) -> imgref::ImgVec<T> {
        imgref::ImgVec::new(self.data.clone(), self.width as usize, self.height as usize)
    }
}
