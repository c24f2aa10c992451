use super::*;

/// Generation strategy matching the original game: every tile attribute is
/// drawn uniformly and independently (with replacement), the target is a
/// uniform pick, and the three clues are shuffled. A clue may happen to
/// match most or all of the board; that is accepted, not an error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomRoundGenerator {
    seed: u64,
}

impl RandomRoundGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RoundGenerator for RandomRoundGenerator {
    fn generate(self, difficulty: Difficulty) -> RoundSetup {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let tile_count = difficulty.tile_count();

        let mut tiles = Vec::with_capacity(tile_count);
        for index in 0..tile_count {
            tiles.push(Tile {
                color: Color::ALL[rng.random_range(0..Color::ALL.len())],
                shape: Shape::ALL[rng.random_range(0..Shape::ALL.len())],
                pattern: Pattern::ALL[rng.random_range(0..Pattern::ALL.len())],
                index,
            });
        }

        let target = rng.random_range(0..tile_count);
        let mut clues: Vec<Clue> = ClueRule::for_target(&tiles[target])
            .into_iter()
            .map(Clue::new)
            .collect();
        clues.shuffle(&mut rng);

        log::debug!(
            "generated {:?} round: {} tiles, target at {}",
            difficulty,
            tile_count,
            target
        );

        RoundSetup {
            tiles,
            target,
            clues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_counts_follow_the_difficulty_table() {
        for difficulty in Difficulty::ALL {
            let setup = RandomRoundGenerator::new(1).generate(difficulty);
            assert_eq!(setup.tiles().len(), difficulty.tile_count());
        }
    }

    #[test]
    fn tile_indices_are_contiguous_and_zero_based() {
        let setup = RandomRoundGenerator::new(2).generate(Difficulty::Moderate);
        for (i, tile) in setup.tiles().iter().enumerate() {
            assert_eq!(tile.index, i);
        }
    }

    #[test]
    fn target_is_always_in_bounds() {
        for seed in 0..50 {
            let setup = RandomRoundGenerator::new(seed).generate(Difficulty::Hard);
            assert!(setup.target() < setup.tiles().len());
        }
    }

    #[test]
    fn exactly_three_clues_all_matching_the_target() {
        for seed in 0..50 {
            let setup = RandomRoundGenerator::new(seed).generate(Difficulty::Easy);
            let target = &setup.tiles()[setup.target()];
            assert_eq!(setup.clues().len(), CLUES_PER_ROUND);
            for clue in setup.clues() {
                assert!(clue.matches(target), "clue {:?} misses target", clue.rule());
            }
        }
    }

    #[test]
    fn shuffle_keeps_one_clue_per_attribute() {
        let setup = RandomRoundGenerator::new(3).generate(Difficulty::Easy);
        let mut colors = 0;
        let mut shapes = 0;
        let mut patterns = 0;
        for clue in setup.clues() {
            match clue.rule() {
                ClueRule::ColorIs(_) => colors += 1,
                ClueRule::ShapeIs(_) => shapes += 1,
                ClueRule::PatternIs(_) => patterns += 1,
            }
        }
        assert_eq!((colors, shapes, patterns), (1, 1, 1));
    }

    #[test]
    fn same_seed_reproduces_the_same_round() {
        let a = RandomRoundGenerator::new(42).generate(Difficulty::Moderate);
        let b = RandomRoundGenerator::new(42).generate(Difficulty::Moderate);
        assert_eq!(a, b);
    }

    #[test]
    fn generated_setup_passes_validation() {
        let setup = RandomRoundGenerator::new(4).generate(Difficulty::Easy);
        let revalidated = RoundSetup::new(
            setup.tiles().to_vec(),
            setup.target(),
            setup.clues().to_vec(),
        );
        assert_eq!(revalidated.unwrap(), setup);
    }
}
