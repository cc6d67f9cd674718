use std::io::Read;

use enough::Stop;

use crate::error::PfmError;
use crate::header::read_header;
use crate::image::ImageData;
use crate::limits::Limits;
use crate::payload::read_payload;
use crate::scatter::scatter_channels;
use crate::select::{ChannelMatcher, SubstringMatcher, select_channels};

/// Decoded PFM image.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pub image: ImageData,
    /// PFM stores no alpha semantics; always `false`.
    pub has_premultiplied_alpha: bool,
}

/// Builder for a single decode.
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use zenpfm::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(64 << 20), ..Default::default() };
/// let file = BufReader::new(File::open("render.pfm")?);
/// let decoded = DecodeRequest::new(file)
///     .with_selector("R,G,B")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DecodeRequest<'a, R> {
    reader: R,
    selector: &'a str,
    matcher: &'a dyn ChannelMatcher,
    limits: Option<&'a Limits>,
    pool: Option<&'a rayon::ThreadPool>,
}

impl<'a, R: Read> DecodeRequest<'a, R> {
    /// Decode from `reader`, positioned at the start of the PFM header.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            selector: "",
            matcher: &SubstringMatcher,
            limits: None,
            pool: None,
        }
    }

    /// Channel selector. Empty (the default) keeps every channel in file order.
    pub fn with_selector(mut self, selector: &'a str) -> Self {
        self.selector = selector;
        self
    }

    /// Replace the default [`SubstringMatcher`].
    pub fn with_matcher(mut self, matcher: &'a dyn ChannelMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the row remap on `pool` instead of rayon's global pool.
    pub fn with_thread_pool(mut self, pool: &'a rayon::ThreadPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Decode the image. Blocks until every row has been remapped.
    pub fn decode(mut self, stop: impl Stop + Sync) -> Result<DecodeOutput, PfmError> {
        let header = read_header(&mut self.reader)?;

        if let Some(limits) = self.limits {
            limits.check_header(&header)?;
        }

        stop.check()?;
        let data = read_payload(&mut self.reader, &header)?;
        stop.check()?;

        let channels = match self.pool {
            Some(pool) => pool.install(|| scatter_channels(&data, &header, &stop)),
            None => scatter_channels(&data, &header, &stop),
        }?;
        drop(data);

        let image = ImageData {
            channels: select_channels(channels, self.selector, self.matcher),
            layers: vec![String::new()],
        };

        Ok(DecodeOutput {
            image,
            has_premultiplied_alpha: false,
        })
    }
}
