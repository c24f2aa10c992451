use serde::{Deserialize, Serialize};

/// Lives at the start of every round.
pub const STARTING_LIVES: u32 = 3;

/// Points awarded per second left on the clock when the target is found.
pub const TIME_BONUS_PER_SEC: u32 = 10;

/// Points taken away for a wrong guess, never dropping the score below zero.
pub const WRONG_GUESS_PENALTY: u32 = 5;

/// Difficulty tiers, in play order. Progression is one-directional: a
/// session goes Easy -> Moderate -> Hard and never back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub const fn tile_count(self) -> usize {
        use Difficulty::*;
        match self {
            Easy => 16,
            Moderate => 36,
            Hard => 56,
        }
    }

    pub const fn timer_secs(self) -> u32 {
        use Difficulty::*;
        match self {
            Easy => 45,
            Moderate => 30,
            Hard => 20,
        }
    }

    /// The tier after this one, or `None` for the last tier.
    pub const fn next(self) -> Option<Difficulty> {
        use Difficulty::*;
        match self {
            Easy => Some(Moderate),
            Moderate => Some(Hard),
            Hard => None,
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Moderate => "Moderate",
            Hard => "Hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_grow_while_timers_shrink() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].tile_count() < pair[1].tile_count());
            assert!(pair[0].timer_secs() > pair[1].timer_secs());
        }
    }

    #[test]
    fn progression_is_linear_and_ends() {
        assert_eq!(Difficulty::Easy.next(), Some(Difficulty::Moderate));
        assert_eq!(Difficulty::Moderate.next(), Some(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.next(), None);
    }
}
