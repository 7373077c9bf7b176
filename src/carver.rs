// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving driver.
//!
//! A [`Carver`] owns the pixel buffer for the duration of a run and
//! repeats {solve → backtrack → compact} once per seam.  The buffer
//! stays at its original allocation the whole time; only the logical
//! width shrinks.  The brightness map is built exactly once, up
//! front, and carved in lockstep with the pixels thereafter, which
//! saves a full rebuild per iteration and changes nothing observable.
//! `finish` copies the surviving region into a tightly-sized RGB
//! buffer for the codec to encode.

use crate::brightness::brightness_grid;
use crate::compact::{remove_seam_column, remove_seam_pixels};
use crate::error::CarveError;
use crate::grid::Grid;
use crate::seam::{backtrack, solve_costs};
use itertools::iproduct;

/// The mutable state threaded through a carving run.
pub struct Carver {
    pixels: Vec<u8>,
    brightness: Grid<i32>,
    width: u32,
    height: u32,
    channels: u8,
    removed: u32,
}

impl Carver {
    /// Take ownership of a decoded pixel buffer and validate its
    /// shape.  Every input error is caught here, before the solver
    /// can be handed a degenerate grid.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self, CarveError> {
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }
        if channels < 3 {
            return Err(CarveError::TooFewChannels { channels });
        }
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(CarveError::BufferSize {
                actual: pixels.len(),
                expected,
            });
        }
        let brightness = brightness_grid(&pixels, width, height, channels, 0);
        Ok(Carver {
            pixels,
            brightness,
            width,
            height,
            channels,
            removed: 0,
        })
    }

    /// The current logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// How many seams have been carved out so far.
    pub fn removed(&self) -> u32 {
        self.removed
    }

    /// Find and remove the cheapest seam, returning its path (one
    /// column per row) for anyone who wants to visualize it.  The
    /// last column cannot be removed: a zero-width image is not a
    /// thing the solver is defined on.
    pub fn remove_next_seam(&mut self) -> Result<Vec<u32>, CarveError> {
        if self.width < 2 {
            return Err(CarveError::TooManySeams {
                seams: self.removed + 1,
                width: self.width + self.removed,
            });
        }
        let costs = solve_costs(&self.brightness);
        let seam = backtrack(&costs);
        remove_seam_pixels(
            &mut self.pixels,
            self.width,
            self.height,
            self.channels,
            self.removed,
            &seam,
        );
        remove_seam_column(&mut self.brightness, &seam);
        self.width -= 1;
        self.removed += 1;
        Ok(seam)
    }

    /// Copy the surviving logical region into a buffer of exactly
    /// `width × height × 3` bytes, dropping any channel past RGB.
    pub fn finish(self) -> Vec<u8> {
        let ch = self.channels as usize;
        let stride = ((self.width + self.removed) as usize) * ch;
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for (y, x) in iproduct!(0..self.height as usize, 0..self.width as usize) {
            let i = y * stride + x * ch;
            out.extend_from_slice(&self.pixels[i..i + 3]);
        }
        out
    }
}

/// The one-call driver: remove `seams` vertical seams from an image
/// and hand back the narrowed RGB buffer.
pub fn carve(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    seams: u32,
) -> Result<Vec<u8>, CarveError> {
    if seams >= width {
        return Err(CarveError::TooManySeams { seams, width });
    }
    let mut carver = Carver::new(pixels, width, height, channels)?;
    for _ in 0..seams {
        carver.remove_next_seam()?;
    }
    Ok(carver.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::brightness_grid;

    // A 6x4 RGB image of flat columns, except column 2, which
    // flickers between white and black from row to row.  Every flat
    // column offers a free straight-down seam; the flickering stripe
    // is the most expensive place in the image to route one, so it
    // should be the last thing carved away.
    fn striped_image() -> (Vec<u8>, u32, u32) {
        let (width, height) = (6u32, 4u32);
        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = match (x, y % 2) {
                    (2, 0) => 255,
                    (2, _) => 0,
                    _ => (x * 3) as u8,
                };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        (pixels, width, height)
    }

    #[test]
    fn one_seam_narrows_by_one() {
        let (pixels, w, h) = striped_image();
        let out = carve(pixels, w, h, 3, 1).unwrap();
        assert_eq!(out.len(), (w - 1) as usize * h as usize * 3);
    }

    #[test]
    fn n_seams_narrow_by_n() {
        let (pixels, w, h) = striped_image();
        let out = carve(pixels, w, h, 3, 4).unwrap();
        assert_eq!(out.len(), (w - 4) as usize * h as usize * 3);
    }

    #[test]
    fn zero_seams_is_a_plain_copy() {
        let (pixels, w, h) = striped_image();
        let out = carve(pixels.clone(), w, h, 3, 0).unwrap();
        assert_eq!(out, pixels);
    }

    #[test]
    fn bright_stripe_survives_heavy_carving() {
        let (pixels, w, h) = striped_image();
        let out = carve(pixels, w, h, 3, 4).unwrap();
        // Two columns left; the white stripe must be one of them.
        assert!(out.chunks(3).any(|px| px[0] == 255));
    }

    #[test]
    fn carving_is_deterministic() {
        let (pixels, w, h) = striped_image();
        let a = carve(pixels.clone(), w, h, 3, 3).unwrap();
        let b = carve(pixels, w, h, 3, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn alpha_channel_rides_along_but_is_dropped() {
        // Same stripe image, RGBA.  The result is plain RGB.
        let (rgb, w, h) = striped_image();
        let mut rgba = Vec::new();
        for px in rgb.chunks(3) {
            rgba.extend_from_slice(px);
            rgba.push(128);
        }
        let out = carve(rgba, w, h, 4, 2).unwrap();
        assert_eq!(out.len(), (w - 2) as usize * h as usize * 3);
        assert!(out.iter().all(|&b| b != 128));
    }

    #[test]
    fn cached_brightness_stays_honest_across_iterations() {
        let (pixels, w, h) = striped_image();
        let mut carver = Carver::new(pixels, w, h, 3).unwrap();
        for _ in 0..3 {
            carver.remove_next_seam().unwrap();
            let rebuilt = brightness_grid(
                &carver.pixels,
                carver.width,
                carver.height,
                carver.channels,
                carver.removed,
            );
            for y in 0..h {
                assert_eq!(carver.brightness.row(y), rebuilt.row(y));
            }
        }
    }

    #[test]
    fn removing_every_column_is_rejected() {
        let (pixels, w, h) = striped_image();
        assert_eq!(
            carve(pixels, w, h, 3, w),
            Err(CarveError::TooManySeams { seams: w, width: w })
        );
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert_eq!(
            Carver::new(vec![], 0, 4, 3).err(),
            Some(CarveError::EmptyImage { width: 0, height: 4 })
        );
        assert_eq!(
            Carver::new(vec![0; 8], 4, 2, 1).err(),
            Some(CarveError::TooFewChannels { channels: 1 })
        );
        assert_eq!(
            Carver::new(vec![0; 10], 2, 2, 3).err(),
            Some(CarveError::BufferSize {
                actual: 10,
                expected: 12
            })
        );
    }

    #[test]
    fn stepping_past_the_last_column_fails() {
        let mut carver = Carver::new(vec![1, 2, 3, 4, 5, 6], 2, 1, 3).unwrap();
        carver.remove_next_seam().unwrap();
        assert!(carver.remove_next_seam().is_err());
    }
}
