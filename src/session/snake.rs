use super::cell::Cell;
use crate::consts;
use std::collections::VecDeque;

/// The snake's body: an ordered sequence of cells, head first.
///
/// Invariant: consecutive cells are exactly one [`consts::CELL_SIZE`] apart
/// along exactly one axis, and the body is never empty while a game is
/// running.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) cells: VecDeque<Cell>,
}

impl Snake {
    /// The initial five-cell layout: head at the starting position, body
    /// trailing off to the left, facing right.
    pub(crate) fn starting() -> Snake {
        let cells = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|i| {
                #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
                let i = i as i32;
                Cell::new(
                    consts::INITIAL_HEAD_X - i * consts::CELL_SIZE,
                    consts::INITIAL_HEAD_Y,
                )
            })
            .collect();
        Snake { cells }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Insert a new head cell at the front
    pub(super) fn push_head(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    /// Drop the tail cell
    pub(super) fn pop_tail(&mut self) {
        let _ = self.cells.pop_back();
    }

    /// Does the head overlap a body segment?  The first
    /// [`consts::NECK_EXEMPTION`] cells behind the head are skipped: a
    /// single step can never land on them.
    pub(crate) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.cells
            .iter()
            .skip(consts::NECK_EXEMPTION)
            .any(|&cell| cell == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout() {
        let snake = Snake::starting();
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [
                Cell::new(300, 300),
                Cell::new(270, 300),
                Cell::new(240, 300),
                Cell::new(210, 300),
                Cell::new(180, 300),
            ]
        );
        assert_eq!(snake.head(), Cell::new(300, 300));
        assert!(!snake.bites_itself());
    }

    #[test]
    fn bites_itself_at_fifth_segment() {
        // A six-cell loop whose head has landed on cells[5]
        let snake = Snake {
            cells: VecDeque::from([
                Cell::new(300, 300),
                Cell::new(300, 330),
                Cell::new(330, 330),
                Cell::new(330, 300),
                Cell::new(330, 270),
                Cell::new(300, 300),
            ]),
        };
        assert!(snake.bites_itself());
    }

    #[test]
    fn neck_overlap_is_exempt() {
        // Head overlapping cells[3] is within the exemption window
        let snake = Snake {
            cells: VecDeque::from([
                Cell::new(300, 300),
                Cell::new(300, 330),
                Cell::new(330, 330),
                Cell::new(300, 300),
                Cell::new(270, 300),
            ]),
        };
        assert!(!snake.bites_itself());
    }
}
