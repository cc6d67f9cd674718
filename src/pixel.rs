/// Channel layout of a PFM file, determined by its magic string.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// `Pf` — single channel.
    Gray,
    /// `PF` — 3 channels, RGB.
    Rgb,
    /// `PF4` — 4 channels, RGBA. Non-standard extension.
    Rgba,
}

impl ChannelLayout {
    /// Look up the layout for a header magic token.
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"Pf" => Some(Self::Gray),
            b"PF" => Some(Self::Rgb),
            b"PF4" => Some(Self::Rgba),
            _ => None,
        }
    }

    /// The magic token that introduces this layout.
    pub fn magic(&self) -> &'static str {
        match self {
            Self::Gray => "Pf",
            Self::Rgb => "PF",
            Self::Rgba => "PF4",
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channel_names().len()
    }

    /// Names given to the decoded channels, in file order.
    pub fn channel_names(&self) -> &'static [&'static str] {
        match self {
            Self::Gray => &["Y"],
            Self::Rgb => &["R", "G", "B"],
            Self::Rgba => &["R", "G", "B", "A"],
        }
    }

    /// Bytes per interleaved pixel in the payload.
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels() * 4
    }
}
