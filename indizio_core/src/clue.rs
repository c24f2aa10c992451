use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Exactly one clue per target attribute.
pub const CLUES_PER_ROUND: usize = 3;

/// A single-attribute test derived from the target tile. Rules are advisory:
/// they describe the target but are never enforced against guesses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueRule {
    ColorIs(Color),
    ShapeIs(Shape),
    PatternIs(Pattern),
}

impl ClueRule {
    /// One rule per attribute, in attribute order. Presentation order is
    /// decided later by the generator's shuffle.
    pub const fn for_target(target: &Tile) -> [ClueRule; CLUES_PER_ROUND] {
        [
            ClueRule::ColorIs(target.color),
            ClueRule::ShapeIs(target.shape),
            ClueRule::PatternIs(target.pattern),
        ]
    }

    pub fn matches(self, tile: &Tile) -> bool {
        use ClueRule::*;
        match self {
            ColorIs(color) => tile.color == color,
            ShapeIs(shape) => tile.shape == shape,
            PatternIs(pattern) => tile.pattern == pattern,
        }
    }
}

impl fmt::Display for ClueRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ClueRule::*;
        match self {
            ColorIs(color) => write!(f, "The target is a {} item.", color.name()),
            ShapeIs(shape) => write!(f, "The target has the {} shape.", shape.name()),
            PatternIs(pattern) => write!(f, "The target has a {} pattern.", pattern.name()),
        }
    }
}

/// A hint shown to the player: the rule plus its rendered sentence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    rule: ClueRule,
    text: String,
}

impl Clue {
    pub fn new(rule: ClueRule) -> Self {
        Self {
            text: rule.to_string(),
            rule,
        }
    }

    pub const fn rule(&self) -> ClueRule {
        self.rule
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, tile: &Tile) -> bool {
        self.rule.matches(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Tile = Tile {
        color: Color::Green,
        shape: Shape::Star,
        pattern: Pattern::Dotted,
        index: 7,
    };

    #[test]
    fn rules_for_target_match_the_target() {
        for rule in ClueRule::for_target(&TARGET) {
            assert!(rule.matches(&TARGET));
        }
    }

    #[test]
    fn rules_only_test_their_own_attribute() {
        let same_color_only = Tile {
            color: Color::Green,
            shape: Shape::Circle,
            pattern: Pattern::Solid,
            index: 0,
        };
        assert!(ClueRule::ColorIs(Color::Green).matches(&same_color_only));
        assert!(!ClueRule::ShapeIs(Shape::Star).matches(&same_color_only));
        assert!(!ClueRule::PatternIs(Pattern::Dotted).matches(&same_color_only));
    }

    #[test]
    fn clue_text_mirrors_the_rule() {
        assert_eq!(
            Clue::new(ClueRule::ColorIs(Color::Red)).text(),
            "The target is a Red item."
        );
        assert_eq!(
            Clue::new(ClueRule::ShapeIs(Shape::Hexagon)).text(),
            "The target has the Hexagon shape."
        );
        assert_eq!(
            Clue::new(ClueRule::PatternIs(Pattern::Striped)).text(),
            "The target has a Striped pattern."
        );
    }
}
