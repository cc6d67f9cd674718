use imgref::ImgVec;

/// A named plane of `f32` samples. `(0, 0)` is the top-left pixel.
#[derive(Clone, Debug)]
pub struct Channel {
    name: String,
    plane: ImgVec<f32>,
}

impl Channel {
    pub(crate) fn new(name: impl Into<String>, plane: ImgVec<f32>) -> Self {
        Self {
            name: name.into(),
            plane,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.plane.width()
    }

    pub fn height(&self) -> usize {
        self.plane.height()
    }

    /// Sample at column `x`, row `y`. Panics when out of bounds.
    pub fn at(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width() && y < self.height(), "({x}, {y}) out of bounds");
        self.plane.buf()[y * self.plane.stride() + x]
    }

    /// All samples, row-major from the top row.
    pub fn samples(&self) -> &[f32] {
        self.plane.buf()
    }

    pub fn plane(&self) -> &ImgVec<f32> {
        &self.plane
    }

    pub fn into_plane(self) -> ImgVec<f32> {
        self.plane
    }
}

/// Decoded image: selected channels plus the layer list.
///
/// PFM has no layers, so a decoded image always carries exactly one unnamed
/// layer holding every channel.
#[derive(Clone, Debug, Default)]
pub struct ImageData {
    pub channels: Vec<Channel>,
    pub layers: Vec<String>,
}

impl ImageData {
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name() == name)
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(Channel::name)
    }

    /// `(width, height)` shared by every channel, or `None` if nothing was selected.
    pub fn size(&self) -> Option<(usize, usize)> {
        self.channels.first().map(|c| (c.width(), c.height()))
    }
}
