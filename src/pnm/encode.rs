//! PNM encoder: P1-P6.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::PnmError;
use crate::grid::Grid;
use crate::magic::MagicNumber;
use crate::pixel::Rgb8;
use crate::raster::Raster;

/// Encode `raster` with `magic`, which must share the raster's channel model.
pub(crate) fn encode_raster(
    raster: &Raster,
    magic: MagicNumber,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    if magic.channel_model() != raster.channel_model() {
        return Err(PnmError::UnsupportedVariant(format!(
            "cannot encode a {:?} raster as {magic}",
            raster.channel_model()
        )));
    }

    let (width, height) = raster.size();
    let header = match raster.max_value() {
        Some(max) => format!("{magic}\n{width} {height}\n{max}\n"),
        None => format!("{magic}\n{width} {height}\n"),
    };
    let body_estimate = match magic {
        MagicNumber::P1 => width as usize * height as usize * 2,
        MagicNumber::P2 => width as usize * height as usize * 4,
        MagicNumber::P3 => width as usize * height as usize * 12,
        MagicNumber::P4 => (width as usize).div_ceil(8) * height as usize,
        MagicNumber::P5 => width as usize * height as usize,
        MagicNumber::P6 => width as usize * height as usize * 3,
    };
    let mut out = Vec::with_capacity(header.len().saturating_add(body_estimate));
    out.extend_from_slice(header.as_bytes());

    stop.check()?;

    match raster {
        Raster::Bitmap(b) if magic.is_binary() => encode_pbm_raw(&mut out, b.grid(), stop)?,
        Raster::Bitmap(b) => encode_plain(&mut out, b.grid(), stop, |out, bit| {
            out.push(if bit { b'1' } else { b'0' })
        })?,
        Raster::Graymap(g) if magic.is_binary() => out.extend_from_slice(g.grid().as_slice()),
        Raster::Graymap(g) => encode_plain(&mut out, g.grid(), stop, push_decimal)?,
        Raster::Pixmap(p) if magic.is_binary() => encode_ppm_raw(&mut out, p.grid(), stop)?,
        Raster::Pixmap(p) => encode_plain(&mut out, p.grid(), stop, |out, px: Rgb8| {
            push_decimal(out, px.r);
            out.push(b' ');
            push_decimal(out, px.g);
            out.push(b' ');
            push_decimal(out, px.b);
        })?,
    }

    Ok(out)
}

/// One text line per row, samples separated by single spaces.
fn encode_plain<T: Copy>(
    out: &mut Vec<u8>,
    grid: &Grid<T>,
    stop: &dyn Stop,
    mut write_sample: impl FnMut(&mut Vec<u8>, T),
) -> Result<(), PnmError> {
    for (y, row) in grid.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (x, &sample) in row.iter().enumerate() {
            if x > 0 {
                out.push(b' ');
            }
            write_sample(out, sample);
        }
        out.push(b'\n');
    }
    Ok(())
}

/// Pack 8 pixels per byte, MSB first, padding each row to a whole byte.
fn encode_pbm_raw(out: &mut Vec<u8>, grid: &Grid<bool>, stop: &dyn Stop) -> Result<(), PnmError> {
    for (y, row) in grid.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        out.extend(row.chunks(8).map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << (7 - i)))
        }));
    }
    Ok(())
}

fn encode_ppm_raw(out: &mut Vec<u8>, grid: &Grid<Rgb8>, stop: &dyn Stop) -> Result<(), PnmError> {
    for (y, row) in grid.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }
    Ok(())
}

fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}
