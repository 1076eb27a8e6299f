#![no_std]

extern crate alloc;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use gates::*;
pub use input::*;
pub use level::*;
pub use movement::*;
pub use state::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod gates;
mod input;
mod level;
mod movement;
mod state;
mod types;
mod view;

/// Width and height of every puzzle grid.
pub const GRID_SIZE: Coord = 8;

pub const DEFAULT_RED_START: Coord2 = (1, 1);
pub const DEFAULT_BLUE_START: Coord2 = (6, 6);
