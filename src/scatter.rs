//! Interleaved bottom-up payload → top-down planar channels.
//!
//! Each output row of each plane is an independent task. Rows never overlap,
//! so the remap needs no locking; rayon joins every task before returning.

use enough::Stop;
use imgref::ImgVec;
use rayon::prelude::*;

use crate::error::PfmError;
use crate::header::PfmHeader;
use crate::image::Channel;
use crate::payload::{FloatBuffer, needs_byte_swap, swap_bytes};

/// Split `data` into one channel per payload channel, in file channel order.
pub(crate) fn scatter_channels(
    data: &FloatBuffer,
    header: &PfmHeader,
    stop: &(dyn Stop + Sync),
) -> Result<Vec<Channel>, PfmError> {
    let width = header.width as usize;
    let height = header.height as usize;
    let num_channels = header.channel_count();
    let scale = header.scale;
    let swap = needs_byte_swap(header.little_endian);
    log::trace!("PFM scatter: {num_channels} channels, byte swap {swap}");

    debug_assert_eq!(data.len(), width * height * num_channels);

    let mut planes: Vec<Vec<f32>> = (0..num_channels)
        .map(|_| vec![0.0f32; width * height])
        .collect();

    planes
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(c, plane)| {
            plane
                .par_chunks_exact_mut(width)
                .enumerate()
                .try_for_each(|(out_y, row)| {
                    if out_y % 16 == 0 {
                        stop.check()?;
                    }
                    // First row in the file is the bottom of the image.
                    let y = height - out_y - 1;
                    let base = y * width * num_channels + c;
                    for (x, out) in row.iter_mut().enumerate() {
                        let mut val = data.raw(base + x * num_channels);
                        if swap {
                            val = swap_bytes(val);
                        }
                        *out = scale * val;
                    }
                    Ok::<(), PfmError>(())
                })
        })?;

    Ok(planes
        .into_iter()
        .zip(header.layout.channel_names())
        .map(|(plane, &name)| Channel::new(name, ImgVec::new(plane, width, height)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::read_payload;
    use crate::pixel::ChannelLayout;
    use enough::Unstoppable;
    use std::io::Cursor;

    fn buffer(values: &[f32], little_endian: bool) -> Vec<u8> {
        values
            .iter()
            .flat_map(|v| {
                if little_endian {
                    v.to_le_bytes()
                } else {
                    v.to_be_bytes()
                }
            })
            .collect()
    }

    fn run(values: &[f32], header: PfmHeader) -> Vec<Channel> {
        let bytes = buffer(values, header.little_endian);
        let data = read_payload(&mut Cursor::new(bytes), &header).unwrap();
        scatter_channels(&data, &header, &Unstoppable).unwrap()
    }

    #[test]
    fn single_row_rgb() {
        let header = PfmHeader {
            layout: ChannelLayout::Rgb,
            width: 2,
            height: 1,
            scale: 1.0,
            little_endian: false,
        };
        let channels = run(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], header);
        let names: Vec<_> = channels.iter().map(Channel::name).collect();
        assert_eq!(names, ["R", "G", "B"]);
        assert_eq!(channels[0].samples(), &[1.0, 4.0]);
        assert_eq!(channels[1].samples(), &[2.0, 5.0]);
        assert_eq!(channels[2].samples(), &[3.0, 6.0]);
    }

    #[test]
    fn rows_are_flipped() {
        let header = PfmHeader {
            layout: ChannelLayout::Gray,
            width: 2,
            height: 3,
            scale: 1.0,
            little_endian: true,
        };
        // File rows bottom-up: [0,1], [2,3], [4,5]
        let channels = run(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], header);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name(), "Y");
        assert_eq!(channels[0].samples(), &[4.0, 5.0, 2.0, 3.0, 0.0, 1.0]);
        assert_eq!(channels[0].at(0, 2), 0.0);
        assert_eq!(channels[0].at(1, 0), 5.0);
    }

    #[test]
    fn scale_applied_after_swap() {
        for little_endian in [true, false] {
            let header = PfmHeader {
                layout: ChannelLayout::Gray,
                width: 1,
                height: 1,
                scale: 2.0,
                little_endian,
            };
            let channels = run(&[3.0], header);
            assert_eq!(channels[0].at(0, 0), 6.0);
        }
    }

    #[test]
    fn non_finite_values_pass_through() {
        let header = PfmHeader {
            layout: ChannelLayout::Rgba,
            width: 1,
            height: 1,
            scale: 1.0,
            little_endian: true,
        };
        let channels = run(&[f32::INFINITY, f32::NAN, -0.0, 1e30], header);
        assert_eq!(channels[0].at(0, 0), f32::INFINITY);
        assert!(channels[1].at(0, 0).is_nan());
        assert!(channels[2].at(0, 0).is_sign_negative());
        assert_eq!(channels[3].at(0, 0), 1e30);
        assert_eq!(channels[3].name(), "A");
    }

    #[test]
    fn large_image_matches_sequential_remap() {
        let (w, h) = (37usize, 53usize);
        let header = PfmHeader {
            layout: ChannelLayout::Rgb,
            width: w as u32,
            height: h as u32,
            scale: 0.5,
            little_endian: false,
        };
        let values: Vec<f32> = (0..w * h * 3).map(|i| i as f32).collect();
        let channels = run(&values, header);
        for y in 0..h {
            for x in 0..w {
                for (c, channel) in channels.iter().enumerate() {
                    let src = values[((h - 1 - y) * w + x) * 3 + c];
                    assert_eq!(channel.at(x, y), src * 0.5);
                }
            }
        }
    }
}
