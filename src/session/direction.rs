/// A compass heading on the playfield
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Would turning to `self` while travelling in `current` send the head
    /// straight back into the neck?
    pub(crate) fn is_reversal_of(self, current: Direction) -> bool {
        self == current.opposite()
    }
}
