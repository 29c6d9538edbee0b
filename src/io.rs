//! `std::io` adapters. The codec itself works on in-memory bytes; these
//! read the whole source first and write the whole encoding at the end.

use std::io::{Read, Write};
use std::vec::Vec;

use enough::Stop;

use crate::error::PnmError;
use crate::raster::Raster;

/// Read `reader` to the end and decode it.
pub fn read_from(mut reader: impl Read, stop: impl Stop) -> Result<Raster, PnmError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    crate::decode(&data, stop)
}

/// Encode `raster` with its own magic number and write it to `writer`.
///
/// A failed write leaves the sink in an unspecified state.
pub fn write_to(raster: &Raster, mut writer: impl Write, stop: impl Stop) -> Result<(), PnmError> {
    let encoded = crate::encode(raster, stop)?;
    writer.write_all(&encoded)?;
    writer.flush()?;
    Ok(())
}
