//! # zenpnm
//!
//! Netpbm decoder, encoder, raster transforms and drawing primitives.
//!
//! ## Supported Formats
//!
//! | Magic | Kind    | Encoding                                   |
//! |-------|---------|--------------------------------------------|
//! | P1    | bitmap  | plain: one `0`/`1` token per pixel          |
//! | P2    | graymap | plain: decimal samples                      |
//! | P3    | pixmap  | plain: decimal R G B triplets               |
//! | P4    | bitmap  | raw: 8 pixels per byte, MSB first, rows padded |
//! | P5    | graymap | raw: one byte per pixel                     |
//! | P6    | pixmap  | raw: three bytes per pixel                  |
//!
//! Samples are 8-bit; max values above 255 are rejected.
//!
//! ## Rasters
//!
//! Decoding yields a [`Raster`], a tagged union over [`Bitmap`], [`Graymap`]
//! and [`Pixmap`]. All three keep their samples in one row-major [`Grid`].
//! Transforms ([`Raster::invert`], [`Raster::flip`], [`Raster::flop`],
//! [`Raster::rotate_90_cw`], max value changes and the pixmap → graymap →
//! bitmap conversions) mutate or derive rasters in place of the old one.
//! [`Pixmap`] additionally offers lines, rectangles, triangles and circles;
//! see [`draw`].
//!
//! ## Non-Goals
//!
//! - 16-bit samples, PAM (P7) and PFM
//! - Streaming decode: the whole encoded image is read into memory first
//! - Anti-aliased drawing
//!
//! ## Credits
//!
//! The PNM implementation draws from [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).
//!
//! ## Usage
//!
//! ```
//! use zenpnm::{DecodeRequest, EncodeRequest, ImageInfo, MagicNumber, Raster, Unstoppable};
//! use zenpnm::draw::Point;
//!
//! let data: &[u8] = b"P3\n2 1\n255\n255 0 0  0 0 255\n";
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! assert_eq!((info.width, info.height), (2, 1));
//!
//! let mut raster = DecodeRequest::new(data).decode(Unstoppable)?;
//! raster.flip();
//! if let Some(pixmap) = raster.as_pixmap_mut() {
//!     pixmap.draw_line(Point::new(0, 0), Point::new(1, 0), zenpnm::Rgb8::new(0, 255, 0));
//! }
//!
//! // Re-encode as raw P6
//! let encoded = EncodeRequest::new()
//!     .with_magic(MagicNumber::P6)
//!     .encode(&raster, Unstoppable)?;
//! assert!(encoded.starts_with(b"P6\n2 1\n255\n"));
//!
//! let gray: Raster = raster.to_graymap()?.into();
//! assert_eq!(gray.magic_number(), MagicNumber::P2);
//! # Ok::<(), zenpnm::PnmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod grid;
mod info;
mod limits;
mod magic;
mod pixel;
mod raster;

pub mod draw;
mod pnm;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod io;

// Re-exports
pub use decode::{DecodeRequest, decode};
pub use encode::{EncodeRequest, encode};
pub use enough::{Stop, Unstoppable};
pub use error::{ErrorKind, PnmError};
pub use grid::Grid;
pub use info::ImageInfo;
pub use limits::Limits;
pub use magic::MagicNumber;
pub use pixel::{ChannelModel, Rgb8};
pub use raster::{Bitmap, Graymap, Pixmap, Raster, Sample};

#[cfg(feature = "std")]
pub use io::{read_from, write_to};
