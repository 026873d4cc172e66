use super::direction::Direction;
use crate::consts;

/// One grid-aligned square on the playfield.  Coordinates are in canvas
/// units and are always multiples of [`consts::CELL_SIZE`]; a move replaces
/// a cell rather than mutating it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// The cell one step away in `direction`
    pub(crate) fn step(self, direction: Direction) -> Cell {
        match direction {
            Direction::Up => Cell::new(self.x, self.y - consts::CELL_SIZE),
            Direction::Down => Cell::new(self.x, self.y + consts::CELL_SIZE),
            Direction::Left => Cell::new(self.x - consts::CELL_SIZE, self.y),
            Direction::Right => Cell::new(self.x + consts::CELL_SIZE, self.y),
        }
    }

    /// Is the cell entirely inside the playfield?  The boundary is a hard
    /// wall; there is no wraparound.
    pub(crate) fn in_bounds(self) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x <= consts::CANVAS_WIDTH - consts::CELL_SIZE
            && self.y <= consts::CANVAS_HEIGHT - consts::CELL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Right, Cell::new(330, 300))]
    #[case(Direction::Left, Cell::new(270, 300))]
    #[case(Direction::Up, Cell::new(300, 270))]
    #[case(Direction::Down, Cell::new(300, 330))]
    fn test_step(#[case] d: Direction, #[case] expected: Cell) {
        assert_eq!(Cell::new(300, 300).step(d), expected);
    }

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(750, 570), true)]
    #[case(Cell::new(750, 0), true)]
    #[case(Cell::new(-30, 0), false)]
    #[case(Cell::new(0, -30), false)]
    #[case(Cell::new(780, 0), false)]
    #[case(Cell::new(0, 600), false)]
    fn test_in_bounds(#[case] cell: Cell, #[case] inside: bool) {
        assert_eq!(cell.in_bounds(), inside);
    }
}
