use alloc::string::String;
use enough::StopReason;

/// Errors from Netpbm decoding, encoding and raster operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("unrecognized magic number")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("sample {value} out of range at row {row}, column {column}")]
    SampleOutOfRange { value: u32, row: usize, column: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`PnmError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The byte source or sink failed.
    Stream,
    /// The encoded stream is malformed.
    Format,
    /// A decoded sample lies outside what the codec can store.
    Value,
    /// A configured [`crate::Limits`] bound was hit.
    Limit,
    /// The caller's [`enough::Stop`] fired.
    Cancelled,
}

impl PnmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            PnmError::Io(_) => ErrorKind::Stream,
            PnmError::SampleOutOfRange { .. } => ErrorKind::Value,
            PnmError::LimitExceeded(_) => ErrorKind::Limit,
            PnmError::Cancelled(_) => ErrorKind::Cancelled,
            PnmError::UnrecognizedFormat
            | PnmError::InvalidHeader(_)
            | PnmError::UnsupportedVariant(_)
            | PnmError::InvalidData(_)
            | PnmError::DimensionsTooLarge { .. }
            | PnmError::UnexpectedEof => ErrorKind::Format,
        }
    }
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}
