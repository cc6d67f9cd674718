//! Interleaved typed views over decoded planes.

use imgref::ImgVec;
use rgb::{Rgb, Rgba};

use crate::image::ImageData;

impl ImageData {
    /// Re-interleave the `R`, `G` and `B` channels.
    ///
    /// Returns `None` unless all three were selected.
    pub fn to_rgb_f32(&self) -> Option<ImgVec<Rgb<f32>>> {
        let [r, g, b] = ["R", "G", "B"].map(|n| self.channel(n));
        let (r, g, b) = (r?, g?, b?);
        let pixels = r
            .samples()
            .iter()
            .zip(g.samples())
            .zip(b.samples())
            .map(|((&r, &g), &b)| Rgb { r, g, b })
            .collect();
        Some(ImgVec::new(pixels, r.width(), r.height()))
    }

    /// Re-interleave the `R`, `G`, `B` and `A` channels.
    ///
    /// Returns `None` unless all four were selected.
    pub fn to_rgba_f32(&self) -> Option<ImgVec<Rgba<f32>>> {
        let [r, g, b, a] = ["R", "G", "B", "A"].map(|n| self.channel(n));
        let (r, g, b, a) = (r?, g?, b?, a?);
        let pixels = r
            .samples()
            .iter()
            .zip(g.samples())
            .zip(b.samples())
            .zip(a.samples())
            .map(|(((&r, &g), &b), &a)| Rgba { r, g, b, a })
            .collect();
        Some(ImgVec::new(pixels, r.width(), r.height()))
    }
}
