use alloc::vec::Vec;

use crate::*;

/// Straight line of cells from `start` to `end`, both inclusive.
///
/// Only horizontal, vertical and exact 45° diagonal lines are accepted; any
/// other displacement yields an empty path.
pub fn cells_in_line(start: Coord2, end: Coord2) -> Vec<Coord2> {
    let d_row = i16::from(end.0) - i16::from(start.0);
    let d_col = i16::from(end.1) - i16::from(start.1);

    let straight = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !straight {
        return Vec::new();
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let steps = d_row.abs().max(d_col.abs());
    (0..=steps)
        .map(|i| {
            (
                (i16::from(start.0) + step_row * i) as Coord,
                (i16::from(start.1) + step_col * i) as Coord,
            )
        })
        .collect()
}

/// Pointer drag over the grid. Only one drag may be live at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SelectionGesture {
    #[default]
    Idle,
    Dragging { start: Coord2, current: Coord2 },
}

impl SelectionGesture {
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Starts a drag. Ignored while another drag is in progress.
    pub fn begin(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_active() {
            return MarkOutcome::NoChange;
        }
        *self = Self::Dragging {
            start: coords,
            current: coords,
        };
        MarkOutcome::Changed
    }

    pub fn extend(&mut self, coords: Coord2) {
        if let Self::Dragging { current, .. } = self {
            *current = coords;
        }
    }

    pub fn path(&self) -> Vec<Coord2> {
        match *self {
            Self::Idle => Vec::new(),
            Self::Dragging { start, current } => cells_in_line(start, current),
        }
    }

    /// Ends the drag, returning its endpoints.
    pub fn finish(&mut self) -> Option<(Coord2, Coord2)> {
        match core::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { start, current } => Some((start, current)),
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line() {
        assert_eq!(cells_in_line((0, 0), (0, 3)), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn diagonal_line_backwards() {
        assert_eq!(cells_in_line((2, 2), (0, 0)), [(2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn anti_diagonal_and_vertical() {
        assert_eq!(cells_in_line((0, 3), (3, 0)), [(0, 3), (1, 2), (2, 1), (3, 0)]);
        assert_eq!(cells_in_line((4, 1), (2, 1)), [(4, 1), (3, 1), (2, 1)]);
    }

    #[test]
    fn crooked_line_is_empty() {
        assert!(cells_in_line((0, 0), (2, 3)).is_empty());
    }

    #[test]
    fn single_cell() {
        assert_eq!(cells_in_line((5, 5), (5, 5)), [(5, 5)]);
    }

    #[test]
    fn gesture_lifecycle() {
        let mut gesture = SelectionGesture::default();
        assert_eq!(gesture.finish(), None);

        assert_eq!(gesture.begin((1, 1)), MarkOutcome::Changed);
        assert_eq!(gesture.begin((3, 3)), MarkOutcome::NoChange);
        gesture.extend((1, 3));
        assert_eq!(gesture.path(), [(1, 1), (1, 2), (1, 3)]);
        assert_eq!(gesture.finish(), Some(((1, 1), (1, 3))));
        assert!(!gesture.is_active());
    }
}
