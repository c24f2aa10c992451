pub use clue::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod clue;
mod engine;
mod error;
mod generator;
mod tile;
mod types;
