use enough::Stop;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::raster::Raster;

/// Decode builder: input bytes plus optional [`Limits`].
///
/// The whole encoded image must already be in memory.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into an owned [`Raster`]. The raster never borrows the input.
    pub fn decode(self, stop: impl Stop) -> Result<Raster, PnmError> {
        crate::pnm::decode(self.data, self.limits, &stop)
    }
}

/// Decode any P1-P6 image with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Raster, PnmError> {
    DecodeRequest::new(data).decode(stop)
}
