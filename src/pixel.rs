/// Color pixel stored by a [`crate::Pixmap`]: three independent 8-bit channels.
pub type Rgb8 = rgb::RGB8;

/// Channel model fixed by a magic number.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelModel {
    /// One bit per pixel, `true` = set (black).
    Mono,
    /// Single channel, 8-bit intensity.
    Gray,
    /// 3 channels, 8-bit RGB.
    Color,
}

impl ChannelModel {
    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Mono | Self::Gray => 1,
            Self::Color => 3,
        }
    }

    /// In-memory bytes per decoded pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Mono => core::mem::size_of::<bool>(),
            Self::Gray => 1,
            Self::Color => core::mem::size_of::<Rgb8>(),
        }
    }

    /// Whether the header carries a max value line.
    pub fn has_max_value(&self) -> bool {
        !matches!(self, Self::Mono)
    }

    /// Bytes one row occupies in the raw (binary) encoding.
    ///
    /// Mono rows are packed MSB-first and padded to a whole byte.
    pub fn raw_row_bytes(&self, width: usize) -> Option<usize> {
        match self {
            Self::Mono => Some(width.div_ceil(8)),
            Self::Gray => Some(width),
            Self::Color => width.checked_mul(3),
        }
    }
}
