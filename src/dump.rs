// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Debug renderings of intermediate products.
//!
//! Nothing here participates in carving; these exist so a human can
//! eyeball where the seams went and what the cost surface looked
//! like when the output is surprising.

use crate::grid::Grid;
use crate::seam::CostCell;
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::clamp;

/// Render one seam as a red path on black, at the dimensions the
/// image had when the seam was found.
pub fn seam_to_image(seam: &[u32], width: u32, height: u32) -> RgbImage {
    let mut out: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for (y, &x) in (0..height).zip(seam.iter()) {
        out.put_pixel(x, y, *Pixel::from_slice(&[255u8, 0, 0]));
    }
    out
}

/// Render a solved cost map as a grayscale image, normalized so the
/// most expensive cell is white.
pub fn costs_to_image(costs: &Grid<CostCell>) -> GrayImage {
    let (width, height) = (costs.width(), costs.height());
    let factor = iproduct!(0..height, 0..width)
        .map(|(y, x)| u64::from(costs[(x, y)].cost))
        .max()
        .unwrap()
        .max(1);
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let c = u64::from(costs[(x, y)].cost) * 255 / factor;
        let cs = [clamp(c, 0, 255) as u8];
        out.put_pixel(x, y, *Pixel::from_slice(&cs));
    }
    out
}
