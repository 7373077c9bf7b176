// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Close up the hole a seam leaves behind.
//!
//! Nothing is reallocated when a seam is removed.  Each row shifts
//! its pixels to the right of the seam one slot left, the buffer
//! keeps its original physical width, and the column freed at the
//! row's tail joins the stale region that later iterations skip.
//! Rows are fully independent; the only thing that can go wrong is
//! the physical-offset arithmetic, which must agree with the count of
//! already-removed seams or every row after the first would bleed
//! into its neighbor.

use crate::grid::Grid;

/// Shift every pixel right of the seam one column left, in place.
/// `width` is the logical width *before* this removal and `removed`
/// the number of seams carved out before it; together they recover
/// the physical row stride `(width + removed) * channels`.
pub fn remove_seam_pixels(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    channels: u8,
    removed: u32,
    seam: &[u32],
) {
    let ch = channels as usize;
    let stride = ((width + removed) as usize) * ch;
    let live = (width as usize) * ch;
    for y in 0..height as usize {
        let row = &mut pixels[y * stride..y * stride + live];
        let hole = (seam[y] as usize) * ch;
        row.copy_within(hole + ch.., hole);
    }
}

/// The same shift for the cached brightness map, which shrinks in
/// lockstep with the pixel buffer so it never has to be rebuilt.
pub fn remove_seam_column(brightness: &mut Grid<i32>, seam: &[u32]) {
    for (y, &col) in (0..brightness.height()).zip(seam.iter()) {
        let row = brightness.row_mut(y);
        row.copy_within(col as usize + 1.., col as usize);
    }
    brightness.shrink_width();
}
