// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam through a brightness map.
//!
//! This is the dynamic-programming heart of the crate.  The cost of
//! stepping from a pixel to one of its three upper neighbors is the
//! absolute difference of their brightness values, and the recurrence
//! accumulates the cheapest way to reach every cell:
//!
//! ```text
//!            ⎧ M(x−1,y−1) + |B(x−1,y−1) − B(x,y)|
//! M(x,y)=min ⎨ M(x,  y−1) + |B(x,  y−1) − B(x,y)|
//!            ⎩ M(x+1,y−1) + |B(x+1,y−1) − B(x,y)|
//! ```
//!
//! with M(x,0) = 0: the whole top row is the universal source.  A
//! missing neighbor at either edge column is priced at infinity so it
//! can never win; with width 1 both sides are missing and only the
//! straight-down candidate remains.

use crate::cq;
use crate::grid::Grid;

/// One cell of the solved map: the cheapest accumulated cost of any
/// path from the top row to this cell, fused with the step (−1, 0, or
/// +1 column) that reaches it from the row above.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct CostCell {
    pub cost: u32,
    pub step: i8,
}

/// Solve the recurrence over a whole brightness map, producing a map
/// of the same shape.  O(width × height) time and space.
pub fn solve_costs(brightness: &Grid<i32>) -> Grid<CostCell> {
    let (width, height) = (brightness.width(), brightness.height());
    let mut costs: Grid<CostCell> = Grid::new(width, height);
    // Row 0 needs no pass of its own: Grid::new has every cell at
    // cost 0, step 0, which is exactly the universal source.
    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let here = brightness[(x, y)];
            let through = |px: u32| {
                costs[(px, y - 1)].cost + (brightness[(px, y - 1)] - here).abs() as u32
            };
            let left = cq!(x == 0, u32::max_value(), through(x - 1));
            let up = through(x);
            let right = cq!(x == maxwidth, u32::max_value(), through(x + 1));

            // First occurrence wins: left beats up beats right.  The
            // strict comparisons are what make repeated runs land on
            // the same seam, so don't get clever here.
            let mut cell = CostCell {
                cost: left,
                step: -1,
            };
            if up < cell.cost {
                cell = CostCell { cost: up, step: 0 };
            }
            if right < cell.cost {
                cell = CostCell {
                    cost: right,
                    step: 1,
                };
            }
            costs[(x, y)] = cell;
        }
    }
    costs
}

/// Walk a solved cost map back up from its cheapest bottom cell,
/// returning one column index per row.  Consecutive entries differ by
/// at most one: the seam is 8-connected top to bottom.
pub fn backtrack(costs: &Grid<CostCell>) -> Vec<u32> {
    let (width, height) = (costs.width(), costs.height());
    // min_by_key keeps the first of equals, i.e. the lowest column.
    let mut col = (0..width)
        .min_by_key(|x| costs[(*x, height - 1)].cost)
        .unwrap();
    let mut seam = vec![0u32; height as usize];
    seam[height as usize - 1] = col;
    for y in (0..height - 1).rev() {
        col = (i64::from(col) + i64::from(costs[(col, y + 1)].step)) as u32;
        seam[y as usize] = col;
    }
    seam
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32, cells: &[i32]) -> Grid<i32> {
        Grid::from_vec(width, height, cells.to_vec())
    }

    // The cheapest path cost ending at (x, y), by trying every path.
    fn brute_force(b: &Grid<i32>, x: u32, y: u32) -> u32 {
        if y == 0 {
            return 0;
        }
        let mut best = u32::max_value();
        for step in -1i64..=1 {
            let px = i64::from(x) + step;
            if px < 0 || px >= i64::from(b.width()) {
                continue;
            }
            let px = px as u32;
            let c = brute_force(b, px, y - 1) + (b[(px, y - 1)] - b[(x, y)]).abs() as u32;
            if c < best {
                best = c;
            }
        }
        best
    }

    #[test]
    fn every_cell_matches_exhaustive_search() {
        #[rustfmt::skip]
        let b = grid(4, 4, &[
            12, 80,  3, 55,
             9,  9, 40,  2,
            70,  5,  5, 91,
             1, 33, 17, 17,
        ]);
        let costs = solve_costs(&b);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(costs[(x, y)].cost, brute_force(&b, x, y), "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn seam_avoids_a_bright_center() {
        // The straight-down path through the middle costs 40 + 40;
        // hugging either edge costs nothing.  Left-first tie-breaking
        // picks the left edge.
        #[rustfmt::skip]
        let b = grid(3, 3, &[
            10, 10, 10,
            10, 50, 10,
            10, 10, 10,
        ]);
        let seam = backtrack(&solve_costs(&b));
        assert_eq!(seam, [0, 0, 0]);
    }

    #[test]
    fn uniform_image_ties_break_leftward() {
        let b = grid(3, 3, &[7; 9]);
        let seam = backtrack(&solve_costs(&b));
        assert_eq!(seam, [0, 0, 0]);
    }

    #[test]
    fn single_column_runs_straight_down() {
        let b = grid(1, 4, &[1, 5, 2, 8]);
        let costs = solve_costs(&b);
        // Only the straight-down candidate ever exists.
        assert_eq!(costs[(0, 3)].cost, 4 + 3 + 6);
        assert_eq!(backtrack(&costs), [0, 0, 0, 0]);
    }

    #[test]
    fn seams_are_eight_connected() {
        #[rustfmt::skip]
        let b = grid(6, 5, &[
            90,  2, 88, 14, 60,  7,
             3, 71,  5, 52,  9, 44,
            66,  8, 80,  1, 73, 21,
            12, 95,  4, 68,  2, 57,
            39,  6, 91, 10, 84,  3,
        ]);
        let seam = backtrack(&solve_costs(&b));
        assert_eq!(seam.len(), 5);
        for pair in seam.windows(2) {
            assert!((i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1);
        }
    }
}
