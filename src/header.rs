//! PFM header parsing.
//!
//! The header is four whitespace-separated ASCII tokens (magic, width, height,
//! scale) followed by a single line terminator. The sign of the scale encodes
//! the payload byte order: negative means little-endian.

use std::io::{ErrorKind, Read};

use crate::error::PfmError;
use crate::pixel::ChannelLayout;

/// Longest header token accepted. Real headers use a handful of bytes; the cap
/// stops garbage input from being slurped a byte at a time.
const MAX_TOKEN_LEN: usize = 64;

/// Parsed PFM header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PfmHeader {
    pub layout: ChannelLayout,
    pub width: u32,
    pub height: u32,
    /// Absolute value of the header scale; every sample is multiplied by it.
    pub scale: f32,
    /// Payload byte order, taken from the sign of the header scale.
    pub little_endian: bool,
}

impl PfmHeader {
    pub fn channel_count(&self) -> usize {
        self.layout.channels()
    }

    /// Number of `f32` samples in the payload, or `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.channel_count())
    }

    /// Payload size in bytes, or `None` on overflow.
    pub fn payload_len(&self) -> Option<usize> {
        self.sample_count()?.checked_mul(4)
    }
}

/// Read and validate the header, leaving `reader` at the first payload byte.
///
/// If the stream ends before the line terminator, parsing still succeeds and
/// the subsequent payload read reports the shortfall.
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<PfmHeader, PfmError> {
    let (magic, _) = next_token(reader, "magic")?;
    let layout = ChannelLayout::from_magic(&magic).ok_or_else(|| {
        PfmError::InvalidMagic(String::from_utf8_lossy(&magic).into_owned())
    })?;

    let width = parse_token::<u32, _>(reader, "width")?.0;
    let height = parse_token::<u32, _>(reader, "height")?.0;
    let (scale, terminator) = parse_token::<f32, _>(reader, "scale")?;

    if !scale.is_finite() || scale == 0.0 {
        return Err(PfmError::InvalidScale(scale));
    }

    if u64::from(width) * u64::from(height) == 0 {
        return Err(PfmError::ZeroPixels);
    }

    // The byte that ended the scale token may already be the line terminator.
    if !matches!(terminator, Some(b'\r' | b'\n')) {
        while let Some(byte) = next_byte(reader)? {
            if byte == b'\r' || byte == b'\n' {
                break;
            }
        }
    }

    let header = PfmHeader {
        layout,
        width,
        height,
        scale: scale.abs(),
        little_endian: scale < 0.0,
    };
    log::debug!(
        "PFM header: {} {}x{} scale {} ({} endian)",
        layout.magic(),
        width,
        height,
        header.scale,
        if header.little_endian { "little" } else { "big" },
    );
    Ok(header)
}

fn parse_token<T: std::str::FromStr, R: Read + ?Sized>(
    reader: &mut R,
    what: &str,
) -> Result<(T, Option<u8>), PfmError> {
    let (token, terminator) = next_token(reader, what)?;
    let value = core::str::from_utf8(&token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            PfmError::InvalidHeader(format!(
                "invalid {what} {:?}",
                String::from_utf8_lossy(&token)
            ))
        })?;
    Ok((value, terminator))
}

/// Skip leading whitespace, then collect bytes up to the next whitespace byte.
///
/// Returns the token and the whitespace byte that ended it (`None` at end of
/// stream). Reading one byte at a time keeps the reader exactly at the end of
/// the header.
fn next_token<R: Read + ?Sized>(
    reader: &mut R,
    what: &str,
) -> Result<(Vec<u8>, Option<u8>), PfmError> {
    let mut token = Vec::new();
    let first = loop {
        match next_byte(reader)? {
            Some(b) if is_space(b) => continue,
            Some(b) => break b,
            None => return Err(PfmError::InvalidHeader(format!("missing {what}"))),
        }
    };
    token.push(first);

    loop {
        match next_byte(reader)? {
            Some(b) if is_space(b) => return Ok((token, Some(b))),
            Some(b) => {
                if token.len() == MAX_TOKEN_LEN {
                    return Err(PfmError::InvalidHeader(format!("{what} token too long")));
                }
                token.push(b);
            }
            None => return Ok((token, None)),
        }
    }
}

/// Token separators: ASCII whitespace plus vertical tab.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

fn next_byte<R: Read + ?Sized>(reader: &mut R) -> Result<Option<u8>, PfmError> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
}
