use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Everything a fresh round needs: the board, the target, and the clues in
/// presentation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSetup {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) target: usize,
    pub(crate) clues: Vec<Clue>,
}

impl RoundSetup {
    /// Validated constructor, mostly for tests and non-random generators:
    /// the target must be in bounds and every clue must hold for it.
    pub fn new(tiles: Vec<Tile>, target: usize, clues: Vec<Clue>) -> Result<Self> {
        let Some(target_tile) = tiles.get(target) else {
            return Err(GameError::BadSetup);
        };
        if clues.len() != CLUES_PER_ROUND || clues.iter().any(|clue| !clue.matches(target_tile)) {
            return Err(GameError::BadSetup);
        }
        Ok(Self {
            tiles,
            target,
            clues,
        })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

pub trait RoundGenerator {
    fn generate(self, difficulty: Difficulty) -> RoundSetup;
}
