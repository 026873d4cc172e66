use super::cell::Cell;
use super::snake::Snake;
use crate::consts;
use rand::Rng;

/// The single food item.  `active` mirrors the game rule that food exists
/// from placement until it is eaten; the stored cell is only meaningful
/// while active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) cell: Cell,
    pub(super) active: bool,
}

impl Food {
    pub(crate) fn inactive() -> Food {
        Food {
            cell: Cell::new(0, 0),
            active: false,
        }
    }

    /// The food's cell, if any food is currently on the playfield
    pub(crate) fn active_cell(&self) -> Option<Cell> {
        self.active.then_some(self.cell)
    }

    pub(super) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Ensure a food item is on the playfield.  If none is active, draw
    /// uniformly random grid-aligned cells until one misses the snake.
    /// Terminates as long as the snake does not cover the whole grid.
    pub(super) fn place<R: Rng>(&mut self, rng: &mut R, snake: &Snake) {
        if self.active {
            return;
        }
        loop {
            let cell = Cell::new(
                rng.random_range(0..i32::from(consts::GRID_WIDTH)) * consts::CELL_SIZE,
                rng.random_range(0..i32::from(consts::GRID_HEIGHT)) * consts::CELL_SIZE,
            );
            if !snake.contains(cell) {
                self.cell = cell;
                self.active = true;
                return;
            }
        }
    }
}
