// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carve can fail.
//!
//! Every failure here is an input problem, detected before the solver
//! touches anything.  The algorithm itself has no transient failure
//! modes and no partial output, so nothing is retried: the run either
//! completes or aborts with one of these.  Decode and encode failures
//! belong to the image codec and surface separately.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// Removing `seams` seams from an image only `width` pixels wide
    /// would leave nothing to carve.
    #[fail(
        display = "cannot remove {} seams from an image {} pixels wide",
        seams, width
    )]
    TooManySeams { seams: u32, width: u32 },

    /// Zero-area images have no seams.
    #[fail(display = "image dimensions must be nonzero, got {}x{}", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// Brightness is the sum of the first three channels, so anything
    /// short of RGB cannot be carved.
    #[fail(
        display = "carving needs at least 3 channels per pixel, got {}",
        channels
    )]
    TooFewChannels { channels: u8 },

    /// The pixel buffer does not match the declared dimensions.
    #[fail(
        display = "pixel buffer holds {} bytes, expected {} for the given dimensions",
        actual, expected
    )]
    BufferSize { actual: usize, expected: usize },
}
