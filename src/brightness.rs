// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build the brightness map the seam solver runs on.
//!
//! Brightness is the blunt instrument of energy functions: the plain
//! sum of a pixel's first three channels, so one value sits in
//! [0, 765].  Any channel past the third (an alpha, say) is carried
//! in the buffer but never consulted.

use crate::grid::Grid;
use itertools::iproduct;

/// Compute the brightness of every live pixel in an interleaved 8-bit
/// buffer.
///
/// The buffer is physically laid out at its *original* width even
/// after seams have been carved out, so a row does not start at
/// `y * width * channels`: the columns already removed still occupy
/// space at each row's tail.  `removed` is how many, and the physical
/// row stride is `(width + removed) * channels` bytes.
pub fn brightness_grid(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: u8,
    removed: u32,
) -> Grid<i32> {
    let stride = ((width + removed) * channels as u32) as usize;
    let cells = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let i = (y as usize) * stride + (x as usize) * channels as usize;
            pixels[i] as i32 + pixels[i + 1] as i32 + pixels[i + 2] as i32
        })
        .collect();
    Grid::from_vec(width, height, cells)
}
