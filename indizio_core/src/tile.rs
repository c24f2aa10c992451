use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
    ];

    pub const fn name(self) -> &'static str {
        use Color::*;
        match self {
            Red => "Red",
            Blue => "Blue",
            Green => "Green",
            Yellow => "Yellow",
            Purple => "Purple",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Square,
    Star,
    Triangle,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Square,
        Shape::Star,
        Shape::Triangle,
        Shape::Hexagon,
    ];

    pub const fn name(self) -> &'static str {
        use Shape::*;
        match self {
            Circle => "Circle",
            Square => "Square",
            Star => "Star",
            Triangle => "Triangle",
            Hexagon => "Hexagon",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    Solid,
    Striped,
    Dotted,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Solid, Pattern::Striped, Pattern::Dotted];

    pub const fn name(self) -> &'static str {
        use Pattern::*;
        match self {
            Solid => "Solid",
            Striped => "Striped",
            Dotted => "Dotted",
        }
    }
}

/// One selectable grid cell. Attributes are fixed for the lifetime of a
/// round; `index` is the tile's position in the board, 0-based and
/// contiguous.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub color: Color,
    pub shape: Shape,
    pub pattern: Pattern,
    pub index: usize,
}
