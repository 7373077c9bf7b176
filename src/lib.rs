// #![deny(missing_docs)]

//! Shrink an image's width by repeatedly removing the cheapest
//! vertical seam, where "cheap" means the smallest accumulated
//! brightness difference along a connected top-to-bottom path.

extern crate image;

pub mod ternary;

pub mod grid;
pub use grid::Grid;

pub mod error;
pub use error::CarveError;

pub mod brightness;
pub use brightness::brightness_grid;

pub mod seam;
pub use seam::{backtrack, solve_costs, CostCell};

pub mod compact;

pub mod carver;
pub use carver::{carve, Carver};

pub mod dump;
