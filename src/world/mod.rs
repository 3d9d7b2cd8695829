pub mod cell;
pub mod grid;

pub use cell::{Cell, Channel};
pub use grid::WorldGrid;
