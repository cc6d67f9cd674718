//! # zenpfm
//!
//! Portable Float Map (PFM) decoder producing planar `f32` channels.
//!
//! ## Format
//!
//! ```text
//! <magic> <width> <height> <scale>\n<binary float payload>
//! ```
//!
//! - `Pf`: one channel (`Y`), `PF`: `R`,`G`,`B`, `PF4`: `R`,`G`,`B`,`A` (non-standard).
//! - The sign of `scale` is the payload byte order (negative = little-endian);
//!   its magnitude multiplies every sample.
//! - Rows are stored bottom-to-top. Decoded planes are top-to-bottom.
//!
//! Decoding reads the whole payload into memory, then splits it into one
//! plane per channel on the rayon pool. Samples are passed through untouched
//! apart from byte order and scale: no clamping, no colour handling.
//!
//! ## Non-Goals
//!
//! - Encoding PFM
//! - Streaming / incremental decode
//! - Colour management or alpha premultiplication
//!
//! ## Usage
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let mut file = BufReader::new(File::open("render.pfm")?);
//! if zenpfm::probe(&mut file) {
//!     let decoded = zenpfm::decode(file, "")?;
//!     for channel in &decoded.image.channels {
//!         println!("{} {}x{}", channel.name(), channel.width(), channel.height());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod error;
mod header;
mod image;
mod limits;
mod payload;
mod pixel;
mod probe;
mod scatter;
mod select;

#[cfg(feature = "rgb")]
mod interleave;

use std::io::Read;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::PfmError;
pub use header::{PfmHeader, read_header};
pub use image::{Channel, ImageData};
pub use limits::Limits;
pub use pixel::ChannelLayout;
pub use probe::{probe, probe_bytes};
pub use select::{ChannelMatcher, SubstringMatcher};

/// Decode a PFM stream with the default matcher, no limits and no cancellation.
///
/// `channel_selector` filters and orders channels; an empty selector keeps all
/// channels in file order.
pub fn decode<R: Read>(reader: R, channel_selector: &str) -> Result<DecodeOutput, PfmError> {
    DecodeRequest::new(reader)
        .with_selector(channel_selector)
        .decode(Unstoppable)
}
