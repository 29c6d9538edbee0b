use core::fmt;
use core::str::FromStr;

use crate::error::PnmError;
use crate::pixel::ChannelModel;

/// The Netpbm format tag: channel model plus plain (textual) or raw (binary) encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagicNumber {
    /// P1 — plain bitmap, one `0`/`1` token per pixel.
    P1,
    /// P2 — plain graymap, decimal samples.
    P2,
    /// P3 — plain pixmap, decimal RGB triplets.
    P3,
    /// P4 — raw bitmap, 8 pixels per byte, rows padded to a byte.
    P4,
    /// P5 — raw graymap, one byte per pixel.
    P5,
    /// P6 — raw pixmap, three bytes per pixel.
    P6,
}

impl MagicNumber {
    pub fn channel_model(&self) -> ChannelModel {
        match self {
            Self::P1 | Self::P4 => ChannelModel::Mono,
            Self::P2 | Self::P5 => ChannelModel::Gray,
            Self::P3 | Self::P6 => ChannelModel::Color,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::P4 | Self::P5 | Self::P6)
    }

    pub fn has_max_value(&self) -> bool {
        self.channel_model().has_max_value()
    }

    /// The textual counterpart with the same channel model.
    pub fn plain(&self) -> Self {
        match self {
            Self::P1 | Self::P4 => Self::P1,
            Self::P2 | Self::P5 => Self::P2,
            Self::P3 | Self::P6 => Self::P3,
        }
    }

    /// The binary counterpart with the same channel model.
    pub fn raw(&self) -> Self {
        match self {
            Self::P1 | Self::P4 => Self::P4,
            Self::P2 | Self::P5 => Self::P5,
            Self::P3 | Self::P6 => Self::P6,
        }
    }

    /// The magic with `model` and this magic's encoding.
    pub fn with_channel_model(&self, model: ChannelModel) -> Self {
        let plain = match model {
            ChannelModel::Mono => Self::P1,
            ChannelModel::Gray => Self::P2,
            ChannelModel::Color => Self::P3,
        };
        if self.is_binary() { plain.raw() } else { plain }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }

    /// Match a header token.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None,
        }
    }
}

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagicNumber {
    type Err = PnmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s.trim().as_bytes()).ok_or(PnmError::UnrecognizedFormat)
    }
}
