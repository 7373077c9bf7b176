// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major two-dimensional container.
//!
//! One type serves every grid in the carving pipeline: the brightness
//! map, and the fused cost-and-backpointer map.  The physical row
//! stride is fixed at construction while the logical width may shrink,
//! so a grid can lose a column per iteration without reallocating;
//! cells past the logical width are stale and simply ignored.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    stride: usize,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A new grid, every cell at its type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            stride: width as usize,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an already-populated row-major vector.  The vector length
    /// must be exactly `width * height`.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            stride: width as usize,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  Note
    // the stride, not the width: the two differ once columns have
    // been carved away.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize)
    }

    /// The live cells of one row, logical width wide.
    pub fn row(&self, y: u32) -> &[P] {
        let start = (y as usize) * self.stride;
        &self.cells[start..start + self.width as usize]
    }

    /// Mutable view of the live cells of one row.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = (y as usize) * self.stride;
        let width = self.width as usize;
        &mut self.cells[start..start + width]
    }

    /// Give up the rightmost logical column.  The stride, and the
    /// allocation, stay put.
    pub fn shrink_width(&mut self) {
        self.width -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
