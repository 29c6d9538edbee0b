use crate::error::PnmError;
use crate::magic::MagicNumber;

/// Header facts available without decoding the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub magic: MagicNumber,
    /// `None` for bitmaps.
    pub max_value: Option<u8>,
}

impl ImageInfo {
    /// Parse only the header of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        crate::pnm::probe_header(data)
    }
}
