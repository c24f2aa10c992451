use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> LevelCleared (target found on Easy/Moderate)
/// - Playing -> Completed (target found on Hard)
/// - Playing -> OutOfLives (wrong guess spends the last life)
/// - Playing -> TimedOut (countdown reaches zero)
///
/// LevelCleared rounds are replaced through [`RoundEngine::advance`]; the
/// other three non-playing phases are terminal and only an external
/// new-game command leaves them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    Playing,
    LevelCleared,
    TimedOut,
    OutOfLives,
    Completed,
}

impl RoundPhase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// The round no longer accepts guesses or ticks.
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Lost outcomes, where the target gets revealed to the player.
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::TimedOut | Self::OutOfLives)
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a guess
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    NoChange,
    Correct,
    Wrong,
    OutOfLives,
}

impl GuessOutcome {
    /// Whether this outcome could have caused an update to the round
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a one-second countdown tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Counting,
    TimedOut,
}

impl TickOutcome {
    pub const fn expired(self) -> bool {
        matches!(self, Self::TimedOut)
    }
}

/// Mutable state of one round: the board, the answer, the clue cursor, and
/// the lives/score/countdown counters. Score is carried across rounds when
/// a level is cleared; everything else is rebuilt per round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEngine {
    difficulty: Difficulty,
    tiles: Vec<Tile>,
    target: usize,
    clues: Vec<Clue>,
    clue_cursor: usize,
    guessed: Vec<bool>,
    lives: Saturating<u32>,
    score: Saturating<u32>,
    time_left: Saturating<u32>,
    phase: RoundPhase,
}

impl RoundEngine {
    /// Entry point for a brand new game: Easy tier, zero score.
    pub fn first_round(setup: RoundSetup) -> Self {
        Self::new(Difficulty::Easy, setup, 0)
    }

    pub fn new(difficulty: Difficulty, setup: RoundSetup, carried_score: u32) -> Self {
        let RoundSetup {
            tiles,
            target,
            clues,
        } = setup;
        let guessed = vec![false; tiles.len()];
        Self {
            difficulty,
            tiles,
            target,
            clues,
            clue_cursor: 0,
            guessed,
            lives: Saturating(STARTING_LIVES),
            score: Saturating(carried_score),
            time_left: Saturating(difficulty.timer_secs()),
            phase: Default::default(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn lives(&self) -> u32 {
        self.lives.0
    }

    pub fn score(&self) -> u32 {
        self.score.0
    }

    pub fn time_left(&self) -> u32 {
        self.time_left.0
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The clue currently on display, `None` once wrong guesses have walked
    /// past the last one.
    pub fn current_clue(&self) -> Option<&Clue> {
        self.clues.get(self.clue_cursor)
    }

    pub fn clues_exhausted(&self) -> bool {
        self.clue_cursor >= self.clues.len()
    }

    /// Whether this tile was already spent on a wrong guess.
    pub fn is_guessed(&self, index: usize) -> bool {
        self.guessed.get(index).copied().unwrap_or(false)
    }

    /// Process a player guess. Out-of-range indices and guesses after the
    /// round ended are rejected without touching any state; re-guessing an
    /// already spent tile is a no-op rather than a second penalty.
    pub fn guess(&mut self, index: usize) -> Result<GuessOutcome> {
        use GuessOutcome::*;

        if index >= self.tiles.len() {
            return Err(GameError::InvalidTile);
        }
        self.check_playing()?;

        if self.guessed[index] {
            return Ok(NoChange);
        }

        if index == self.target {
            self.score += self.time_left.0 * TIME_BONUS_PER_SEC;
            self.phase = match self.difficulty.next() {
                Some(_) => RoundPhase::LevelCleared,
                None => RoundPhase::Completed,
            };
            log::debug!(
                "target {} found with {}s left, score now {}",
                index,
                self.time_left.0,
                self.score.0
            );
            return Ok(Correct);
        }

        self.guessed[index] = true;
        self.lives -= 1;
        self.score -= WRONG_GUESS_PENALTY;
        // The cursor advances even on the final life; the game-over outcome
        // takes precedence over showing another clue.
        self.clue_cursor = (self.clue_cursor + 1).min(self.clues.len());

        if self.lives.0 == 0 {
            self.phase = RoundPhase::OutOfLives;
            log::debug!("out of lives, target was {}", self.target);
            return Ok(OutOfLives);
        }
        Ok(Wrong)
    }

    /// Advance the countdown by one second. Ticks outside of play (stale
    /// callbacks after a transition) are rejected without touching state.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.check_playing()?;

        self.time_left -= 1;
        if self.time_left.0 == 0 {
            self.phase = RoundPhase::TimedOut;
            log::debug!("countdown expired, target was {}", self.target);
            Ok(TickOutcome::TimedOut)
        } else {
            Ok(TickOutcome::Counting)
        }
    }

    /// Build the next tier's round, carrying the score and resetting lives
    /// and countdown. Only valid once this round reached `LevelCleared`.
    pub fn advance<G: RoundGenerator>(&self, generator: G) -> Result<RoundEngine> {
        if !matches!(self.phase, RoundPhase::LevelCleared) {
            return Err(GameError::NotCleared);
        }
        let next = self.difficulty.next().ok_or(GameError::NotCleared)?;
        Ok(RoundEngine::new(next, generator.generate(next), self.score.0))
    }

    fn check_playing(&self) -> Result<()> {
        if self.phase.is_playing() {
            Ok(())
        } else {
            Err(GameError::RoundOver)
        }
    }
}
