use crate::error::PfmError;
use crate::header::PfmHeader;

/// Caps applied to a parsed header before any payload is read.
///
/// `None` disables a cap; the default caps nothing.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`, independent of channel count.
    pub max_pixels: Option<u64>,
    /// Cap on peak decode memory: the raw payload plus the output planes,
    /// which are both alive while rows are remapped.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject `header` if its dimensions or its decode footprint break a cap.
    pub(crate) fn check_header(&self, header: &PfmHeader) -> Result<(), PfmError> {
        let (width, height) = (u64::from(header.width), u64::from(header.height));
        exceeds("width", width, self.max_width)?;
        exceeds("height", height, self.max_height)?;
        exceeds("pixel count", width * height, self.max_pixels)?;

        if let Some(max_mem) = self.max_memory_bytes {
            let footprint = decode_footprint(header).ok_or(PfmError::DimensionsTooLarge {
                width: header.width,
                height: header.height,
            })?;
            exceeds("decode memory", footprint, Some(max_mem))?;
        }
        Ok(())
    }
}

/// Payload bytes plus the same number of bytes again for the `f32` planes.
fn decode_footprint(header: &PfmHeader) -> Option<u64> {
    u64::try_from(header.payload_len()?).ok()?.checked_mul(2)
}

fn exceeds(what: &str, value: u64, cap: Option<u64>) -> Result<(), PfmError> {
    match cap {
        Some(max) if value > max => Err(PfmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::ChannelLayout;

    fn header(layout: ChannelLayout, width: u32, height: u32) -> PfmHeader {
        PfmHeader {
            layout,
            width,
            height,
            scale: 1.0,
            little_endian: true,
        }
    }

    #[test]
    fn default_is_unlimited() {
        let limits = Limits::default();
        assert!(limits.check_header(&header(ChannelLayout::Rgba, u32::MAX, u32::MAX)).is_ok());
    }

    #[test]
    fn pixel_cap_ignores_channels() {
        let limits = Limits {
            max_pixels: Some(100),
            ..Default::default()
        };
        assert!(limits.check_header(&header(ChannelLayout::Rgba, 10, 10)).is_ok());
        assert!(matches!(
            limits.check_header(&header(ChannelLayout::Gray, 10, 11)),
            Err(PfmError::LimitExceeded(_))
        ));
    }

    #[test]
    fn width_and_height_caps() {
        let limits = Limits {
            max_width: Some(4),
            max_height: Some(2),
            ..Default::default()
        };
        assert!(limits.check_header(&header(ChannelLayout::Gray, 4, 2)).is_ok());
        assert!(limits.check_header(&header(ChannelLayout::Gray, 5, 1)).is_err());
        assert!(limits.check_header(&header(ChannelLayout::Gray, 1, 3)).is_err());
    }

    #[test]
    fn memory_counts_payload_and_planes() {
        // 4x4 RGB: 192 payload bytes + 192 plane bytes.
        let h = header(ChannelLayout::Rgb, 4, 4);
        let fits = Limits {
            max_memory_bytes: Some(384),
            ..Default::default()
        };
        assert!(fits.check_header(&h).is_ok());

        let tight = Limits {
            max_memory_bytes: Some(383),
            ..Default::default()
        };
        match tight.check_header(&h) {
            Err(PfmError::LimitExceeded(msg)) => assert!(msg.contains("384"), "{msg}"),
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }
}
