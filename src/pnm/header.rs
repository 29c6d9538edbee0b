//! Header parsing and the line/token cursor shared with the plain-text bodies.
//!
//! All parse state lives in [`LineCursor`]; each step takes the cursor,
//! consumes what it needs and leaves it positioned at the next unread byte.

use alloc::format;

use log::debug;

use super::PnmHeader;
use crate::error::PnmError;
use crate::magic::MagicNumber;
use crate::raster::check_dimensions;

const COMMENT: u8 = b'#';

/// Byte cursor over an encoded stream that hands out one physical line at a time.
#[derive(Clone, Debug)]
pub(crate) struct LineCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    /// Offset of the first byte not yet consumed.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// The next physical line without its `\n` / `\r\n` terminator.
    pub(crate) fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }

    /// The next line that still has tokens once comments are removed.
    ///
    /// A `#` starts a comment that runs to the end of the line; lines that
    /// are blank or hold nothing but a comment are skipped.
    pub(crate) fn next_content_line(&mut self) -> Option<&'a [u8]> {
        while let Some(line) = self.next_line() {
            let content = match line.iter().position(|&b| b == COMMENT) {
                Some(start) => &line[..start],
                None => line,
            };
            if content.iter().any(|b| !b.is_ascii_whitespace()) {
                return Some(content);
            }
        }
        None
    }
}

/// Whitespace-separated tokens of one line.
pub(crate) fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
}

/// Parse an unsigned decimal token. Signs, blanks and overflow are rejected.
pub(crate) fn parse_u32(token: &[u8]) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

/// Parse the magic, dimension and (for gray/color) max value lines.
///
/// For raw formats `data_offset` points just past the line terminator of
/// the last header line: the payload is never tokenized as text.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, PnmError> {
    let mut cursor = LineCursor::new(data);

    let magic = read_magic(&mut cursor)?;
    let (width, height) = read_dimensions(&mut cursor)?;
    let max_value = if magic.has_max_value() {
        Some(read_max_value(&mut cursor)?)
    } else {
        None
    };

    debug!("{magic} header: {width}x{height}, max value {max_value:?}");

    Ok(PnmHeader {
        magic,
        width,
        height,
        max_value,
        data_offset: cursor.position(),
    })
}

fn read_magic(cursor: &mut LineCursor<'_>) -> Result<MagicNumber, PnmError> {
    let line = cursor.next_content_line().ok_or(PnmError::UnexpectedEof)?;
    let mut toks = tokens(line);
    match (toks.next(), toks.next()) {
        (Some(token), None) => MagicNumber::from_token(token).ok_or(PnmError::UnrecognizedFormat),
        _ => Err(PnmError::UnrecognizedFormat),
    }
}

fn read_dimensions(cursor: &mut LineCursor<'_>) -> Result<(u32, u32), PnmError> {
    let line = cursor.next_content_line().ok_or(PnmError::UnexpectedEof)?;
    let mut toks = tokens(line);
    let (w, h) = match (toks.next(), toks.next(), toks.next()) {
        (Some(w), Some(h), None) => (w, h),
        _ => {
            return Err(PnmError::InvalidHeader(format!(
                "expected `width height`, found {} token(s)",
                tokens(line).count()
            )));
        }
    };
    let width = parse_u32(w).ok_or_else(|| PnmError::InvalidHeader("invalid width".into()))?;
    let height = parse_u32(h).ok_or_else(|| PnmError::InvalidHeader("invalid height".into()))?;
    check_dimensions(width, height)?;
    Ok((width, height))
}

fn read_max_value(cursor: &mut LineCursor<'_>) -> Result<u8, PnmError> {
    let line = cursor.next_content_line().ok_or(PnmError::UnexpectedEof)?;
    let mut toks = tokens(line);
    let value = match (toks.next(), toks.next()) {
        (Some(token), None) => parse_u32(token),
        _ => None,
    }
    .ok_or_else(|| PnmError::InvalidHeader("invalid max value".into()))?;

    match value {
        0 => Err(PnmError::InvalidHeader("max value must be positive".into())),
        1..=255 => Ok(value as u8),
        _ => Err(PnmError::UnsupportedVariant(format!(
            "max value {value} needs more than 8 bits per sample"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_strips_crlf_and_tracks_position() {
        let mut c = LineCursor::new(b"P4\r\n1 1\r\n\x80");
        assert_eq!(c.next_line(), Some(&b"P4"[..]));
        assert_eq!(c.next_line(), Some(&b"1 1"[..]));
        assert_eq!(c.position(), 9);
    }

    #[test]
    fn content_lines_skip_comments_and_blanks() {
        let mut c = LineCursor::new(b"# leading\n\n  \nP2 # trailing\n   # indented\n3 1\n");
        assert_eq!(c.next_content_line(), Some(&b"P2 "[..]));
        assert_eq!(c.next_content_line(), Some(&b"3 1"[..]));
        assert_eq!(c.next_content_line(), None);
    }

    #[test]
    fn parse_u32_rejects_junk() {
        assert_eq!(parse_u32(b"255"), Some(255));
        assert_eq!(parse_u32(b"007"), Some(7));
        assert_eq!(parse_u32(b"-1"), None);
        assert_eq!(parse_u32(b"1a"), None);
        assert_eq!(parse_u32(b""), None);
        assert_eq!(parse_u32(b"99999999999"), None);
    }

    #[test]
    fn header_with_interleaved_comments() {
        let h = parse_header(b"P5\n# made by hand\n2 1\n# depth\n200\n\x01\x02").unwrap();
        assert_eq!(h.magic, MagicNumber::P5);
        assert_eq!((h.width, h.height), (2, 1));
        assert_eq!(h.max_value, Some(200));
        assert_eq!(h.data_offset, 34);
    }

    #[test]
    fn bitmap_header_has_no_max_value() {
        let h = parse_header(b"P4\n9 2\n\xff\x80\x00\x00").unwrap();
        assert_eq!(h.max_value, None);
        assert_eq!(h.data_offset, 7);
    }

    #[test]
    fn dimension_line_needs_exactly_two_tokens() {
        let bad_inputs: [&[u8]; 4] = [b"P1\n2\n", b"P1\n2 2 2\n", b"P1\nx 2\n", b"P1\n0 2\n"];
        for bad in bad_inputs {
            assert!(matches!(parse_header(bad), Err(PnmError::InvalidHeader(_))));
        }
    }

    #[test]
    fn max_value_bounds() {
        assert!(matches!(
            parse_header(b"P2\n1 1\n0\n"),
            Err(PnmError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P2\n1 1\n65535\n"),
            Err(PnmError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn unknown_magic() {
        assert!(matches!(
            parse_header(b"P7\n1 1\n"),
            Err(PnmError::UnrecognizedFormat)
        ));
        assert!(matches!(parse_header(b""), Err(PnmError::UnexpectedEof)));
    }
}
