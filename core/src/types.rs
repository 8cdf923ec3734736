use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid rows, columns and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Index of a placed word inside its puzzle.
pub type WordId = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Direction a word runs in from its first letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Down and to the right.
    Diagonal,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Self::Horizontal, Self::Vertical, Self::Diagonal];
    pub const STRAIGHT: [Direction; 2] = [Self::Horizontal, Self::Vertical];

    /// Unit step `(d_row, d_col)`.
    pub const fn delta(self) -> (Coord, Coord) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
        }
    }

    /// Position of the `offset`-th letter of a word anchored at `start`.
    pub fn step(self, start: Coord2, offset: usize) -> Coord2 {
        let (dr, dc) = self.delta();
        let offset = offset as Coord;
        (start.0 + dr * offset, start.1 + dc * offset)
    }
}

/// A word fixed into a generated grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub id: WordId,
    /// Normalized solution text.
    pub text: String,
    /// Translation (word search) or clue (crossword) shown to the player.
    pub clue: String,
    pub start: Coord2,
    pub direction: Direction,
    /// Crossword clue number, in placement order.
    pub clue_number: Option<u16>,
    pub resolved: bool,
}

impl PlacedWord {
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord2> + use<> {
        let start = self.start;
        let direction = self.direction;
        (0..self.len()).map(move |offset| direction.step(start, offset))
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells().any(|pos| pos == coords)
    }

    /// Marks the word resolved, returning whether this call changed it.
    pub(crate) fn resolve(&mut self) -> bool {
        !core::mem::replace(&mut self.resolved, true)
    }
}
