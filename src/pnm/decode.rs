//! Body decoders for P1-P6.
//!
//! Every decoder collects the full sample vector before a grid is built,
//! so an error never leaves a half-filled raster behind.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;
use log::{trace, warn};

use super::PnmHeader;
use super::header::{LineCursor, parse_u32, tokens};
use crate::error::PnmError;
use crate::grid::Grid;
use crate::magic::MagicNumber;
use crate::pixel::{ChannelModel, Rgb8};
use crate::raster::{Bitmap, Graymap, Pixmap, Raster};

/// Decode the body that follows `header`.
pub(crate) fn decode_body(
    data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Raster, PnmError> {
    let w = header.width as usize;
    let h = header.height as usize;
    // checked once here; the per-format loops below index within w * h
    w.checked_mul(h)
        .and_then(|wh| wh.checked_mul(header.magic.channel_model().channels()))
        .ok_or(PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    let max_value = header.max_value.unwrap_or(1);

    let raster = match header.magic {
        MagicNumber::P1 => {
            let mut cursor = LineCursor::at(data, header.data_offset);
            let bits = decode_pbm_plain(&mut cursor, w, h, stop)?;
            Raster::Bitmap(Bitmap::from_grid(
                Grid::from_vec(header.width, header.height, bits),
                header.magic,
            ))
        }
        MagicNumber::P2 => {
            let mut cursor = LineCursor::at(data, header.data_offset);
            let samples = decode_pgm_plain(&mut cursor, w, h, stop)?;
            Raster::Graymap(Graymap::from_grid(
                Grid::from_vec(header.width, header.height, samples),
                header.magic,
                max_value,
            ))
        }
        MagicNumber::P3 => {
            let mut cursor = LineCursor::at(data, header.data_offset);
            let pixels = decode_ppm_plain(&mut cursor, w, h, max_value, stop)?;
            Raster::Pixmap(Pixmap::from_grid(
                Grid::from_vec(header.width, header.height, pixels),
                header.magic,
                max_value,
            ))
        }
        MagicNumber::P4 => {
            let bits = decode_pbm_raw(payload(data, header)?, w, h, stop)?;
            Raster::Bitmap(Bitmap::from_grid(
                Grid::from_vec(header.width, header.height, bits),
                header.magic,
            ))
        }
        MagicNumber::P5 => {
            let samples = decode_pgm_raw(payload(data, header)?, w, h, stop)?;
            Raster::Graymap(Graymap::from_grid(
                Grid::from_vec(header.width, header.height, samples),
                header.magic,
                max_value,
            ))
        }
        MagicNumber::P6 => {
            let pixels = decode_ppm_raw(payload(data, header)?, w, h, stop)?;
            Raster::Pixmap(Pixmap::from_grid(
                Grid::from_vec(header.width, header.height, pixels),
                header.magic,
                max_value,
            ))
        }
    };
    Ok(raster)
}

fn payload<'a>(data: &'a [u8], header: &PnmHeader) -> Result<&'a [u8], PnmError> {
    trace!("{} payload starts at byte {}", header.magic, header.data_offset);
    data.get(header.data_offset..).ok_or(PnmError::UnexpectedEof)
}

fn note_trailing(magic: MagicNumber, payload_len: usize, used: usize) {
    if payload_len > used {
        warn!("{magic}: ignoring {} trailing bytes", payload_len - used);
    }
}

/// Capacity for `items` decoded values of `tokens_per_item` text tokens each.
///
/// Every token takes at least two bytes (a digit and a separator), so the
/// unread text bounds how many items can follow, whatever the header claims.
fn plain_capacity(items: usize, tokens_per_item: usize, cursor: &LineCursor<'_>) -> usize {
    let max_items = (cursor.remaining() / 2 + 1) / tokens_per_item;
    items.min(max_items)
}

/// One text row that must hold exactly `width` tokens.
fn plain_row<'a>(
    cursor: &mut LineCursor<'a>,
    row: usize,
    width: usize,
) -> Result<impl Iterator<Item = &'a [u8]> + use<'a>, PnmError> {
    let line = cursor.next_content_line().ok_or(PnmError::UnexpectedEof)?;
    let found = tokens(line).count();
    if found != width {
        return Err(PnmError::InvalidData(format!(
            "row {row}: expected {width} samples, found {found}"
        )));
    }
    Ok(tokens(line))
}

fn decode_pbm_plain(
    cursor: &mut LineCursor<'_>,
    width: usize,
    height: usize,
    stop: &dyn Stop,
) -> Result<Vec<bool>, PnmError> {
    let mut bits = Vec::with_capacity(plain_capacity(width * height, 1, cursor));
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (x, token) in plain_row(cursor, y, width)?.enumerate() {
            let bit = match token {
                b"0" => false,
                b"1" => true,
                _ => {
                    return Err(PnmError::InvalidData(format!(
                        "row {y}, column {x}: bitmap samples must be 0 or 1"
                    )));
                }
            };
            bits.push(bit);
        }
    }
    Ok(bits)
}

fn decode_pgm_plain(
    cursor: &mut LineCursor<'_>,
    width: usize,
    height: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let mut samples = Vec::with_capacity(plain_capacity(width * height, 1, cursor));
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (x, token) in plain_row(cursor, y, width)?.enumerate() {
            let value = parse_u32(token).ok_or_else(|| {
                PnmError::InvalidData(format!("row {y}, column {x}: not a number"))
            })?;
            // stored as-is: only values that cannot fit a byte are refused
            let sample = u8::try_from(value).map_err(|_| PnmError::SampleOutOfRange {
                value,
                row: y,
                column: x,
            })?;
            samples.push(sample);
        }
    }
    Ok(samples)
}

/// P3 samples form one token stream that may wrap across lines freely.
fn decode_ppm_plain(
    cursor: &mut LineCursor<'_>,
    width: usize,
    height: usize,
    max_value: u8,
    stop: &dyn Stop,
) -> Result<Vec<Rgb8>, PnmError> {
    let mut pixels = Vec::with_capacity(plain_capacity(width * height, 3, cursor));
    let mut stream = TokenStream::new(cursor);
    let mut clamped = 0usize;

    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            let mut channel = || -> Result<u8, PnmError> {
                let token = stream.next().ok_or(PnmError::UnexpectedEof)?;
                let value = parse_u32(token).ok_or_else(|| {
                    PnmError::InvalidData(format!("row {y}, column {x}: not a number"))
                })?;
                if value > u32::from(max_value) {
                    clamped += 1;
                    return Ok(max_value);
                }
                Ok(value as u8)
            };
            let r = channel()?;
            let g = channel()?;
            let b = channel()?;
            pixels.push(Rgb8::new(r, g, b));
        }
    }

    if clamped > 0 {
        warn!("P3: clamped {clamped} samples to max value {max_value}");
    }
    Ok(pixels)
}

fn decode_pbm_raw(
    payload: &[u8],
    width: usize,
    height: usize,
    stop: &dyn Stop,
) -> Result<Vec<bool>, PnmError> {
    // each row restarts on a byte boundary
    let row_bytes = ChannelModel::Mono.raw_row_bytes(width).ok_or(PnmError::UnexpectedEof)?;
    let needed = row_bytes.checked_mul(height).ok_or(PnmError::UnexpectedEof)?;
    let body = payload.get(..needed).ok_or(PnmError::UnexpectedEof)?;
    note_trailing(MagicNumber::P4, payload.len(), needed);

    let mut bits = Vec::with_capacity(width * height);
    for (y, row) in body.chunks_exact(row_bytes.max(1)).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let expanded = row
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1));
        bits.extend(expanded.take(width));
    }
    Ok(bits)
}

fn decode_pgm_raw(
    payload: &[u8],
    width: usize,
    height: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let needed = width * height;
    let body = payload.get(..needed).ok_or(PnmError::UnexpectedEof)?;
    note_trailing(MagicNumber::P5, payload.len(), needed);
    stop.check()?;
    Ok(body.to_vec())
}

fn decode_ppm_raw(
    payload: &[u8],
    width: usize,
    height: usize,
    stop: &dyn Stop,
) -> Result<Vec<Rgb8>, PnmError> {
    let row_bytes = ChannelModel::Color.raw_row_bytes(width).ok_or(PnmError::UnexpectedEof)?;
    let needed = row_bytes * height;
    let body = payload.get(..needed).ok_or(PnmError::UnexpectedEof)?;
    note_trailing(MagicNumber::P6, payload.len(), needed);

    let mut pixels = Vec::with_capacity(width * height);
    for (y, row) in body.chunks_exact(row_bytes.max(1)).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        pixels.extend(row.chunks_exact(3).map(|c| Rgb8::new(c[0], c[1], c[2])));
    }
    Ok(pixels)
}

/// Tokens across content lines, for bodies that ignore line structure.
struct TokenStream<'c, 'a> {
    cursor: &'c mut LineCursor<'a>,
    rest: &'a [u8],
}

impl<'c, 'a> TokenStream<'c, 'a> {
    fn new(cursor: &'c mut LineCursor<'a>) -> Self {
        Self { cursor, rest: &[] }
    }
}

impl<'a> Iterator for TokenStream<'_, 'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        loop {
            let start = self.rest.iter().position(|b| !b.is_ascii_whitespace());
            match start {
                Some(start) => {
                    let rest = &self.rest[start..];
                    let end = rest
                        .iter()
                        .position(|b| b.is_ascii_whitespace())
                        .unwrap_or(rest.len());
                    self.rest = &rest[end..];
                    return Some(&rest[..end]);
                }
                None => self.rest = self.cursor.next_content_line()?,
            }
        }
    }
}
