use alloc::vec::Vec;

use enough::Stop;

use crate::error::PnmError;
use crate::magic::MagicNumber;
use crate::raster::Raster;

/// Encode builder.
///
/// By default a raster is written with its own magic number; [`with_magic`]
/// picks the other encoding of the same channel model for this call only.
///
/// [`with_magic`]: EncodeRequest::with_magic
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    magic: Option<MagicNumber>,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_magic(mut self, magic: MagicNumber) -> Self {
        self.magic = Some(magic);
        self
    }

    pub fn encode(&self, raster: &Raster, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
        let magic = self.magic.unwrap_or_else(|| raster.magic_number());
        crate::pnm::encode(raster, magic, &stop)
    }
}

/// Encode `raster` with its own magic number.
pub fn encode(raster: &Raster, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
    EncodeRequest::new().encode(raster, stop)
}

impl Raster {
    /// Shorthand for [`encode`].
    pub fn encode(&self, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
        encode(self, stop)
    }
}
