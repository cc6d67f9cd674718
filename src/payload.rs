//! Binary payload reading and byte-order bookkeeping.

use std::io::Read;

use crate::error::PfmError;
use crate::header::PfmHeader;

const INITIAL_CAPACITY: usize = 1 << 20;

/// Raw payload samples exactly as stored in the file, before any byte swap,
/// scaling or row flip. Row-major, channel-interleaved, bottom row first.
pub(crate) struct FloatBuffer {
    bytes: Vec<u8>,
}

impl FloatBuffer {
    /// Sample `index` reinterpreted with native byte order.
    #[inline]
    pub(crate) fn raw(&self, index: usize) -> f32 {
        let off = index * 4;
        f32::from_ne_bytes([
            self.bytes[off],
            self.bytes[off + 1],
            self.bytes[off + 2],
            self.bytes[off + 3],
        ])
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len() / 4
    }
}

/// Whether samples stored in the file's byte order must be reversed on this host.
pub(crate) fn needs_byte_swap(pfm_little_endian: bool) -> bool {
    cfg!(target_endian = "little") != pfm_little_endian
}

/// Reverse the byte order of a float's bit pattern.
#[inline]
pub(crate) fn swap_bytes(value: f32) -> f32 {
    f32::from_bits(value.to_bits().swap_bytes())
}

/// Read exactly the payload described by `header`. Trailing bytes are left
/// unread; a short stream is an error.
pub(crate) fn read_payload<R: Read + ?Sized>(
    reader: &mut R,
    header: &PfmHeader,
) -> Result<FloatBuffer, PfmError> {
    let expected = header.payload_len().ok_or(PfmError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    })?;

    // Header sizes are untrusted; grow past this only as bytes actually arrive.
    let mut bytes = Vec::with_capacity(expected.min(INITIAL_CAPACITY));
    let read = reader.take(expected as u64).read_to_end(&mut bytes)?;
    log::trace!("PFM payload: read {read} of {expected} bytes");

    if read < expected {
        return Err(PfmError::InsufficientData { read, expected });
    }
    Ok(FloatBuffer { bytes })
}
