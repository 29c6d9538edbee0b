//! Netpbm family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! Credits: Implementation draws from [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).

mod decode;
mod encode;
mod header;

use alloc::vec::Vec;

use crate::error::PnmError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::magic::MagicNumber;
use crate::raster::Raster;
use enough::Stop;

/// Parsed PNM header (internal).
#[derive(Clone, Debug)]
pub(crate) struct PnmHeader {
    pub magic: MagicNumber,
    pub width: u32,
    pub height: u32,
    /// `None` for bitmaps.
    pub max_value: Option<u8>,
    /// First byte after the header.
    pub data_offset: usize,
}

impl PnmHeader {
    fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
            magic: self.magic,
            max_value: self.max_value,
        }
    }
}

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PnmError> {
    header::parse_header(data).map(|h| h.info())
}

/// Decode PNM data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster, PnmError> {
    let header = header::parse_header(data)?;

    if let Some(limits) = limits {
        limits.check(&header.info())?;
    }

    stop.check()?;

    decode::decode_body(data, &header, stop)
}

/// Encode to PNM (called from EncodeRequest).
pub(crate) fn encode(
    raster: &Raster,
    magic: MagicNumber,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    encode::encode_raster(raster, magic, stop)
}
