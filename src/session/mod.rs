//! The headless game simulation.
//!
//! A [`Session`] owns one game's worth of state and knows nothing about
//! timers, keyboards, or drawing: the front end calls [`Session::steer`]
//! whenever the player presses an arrow key and [`Session::advance`] once
//! per tick, and decides what to do with the reported outcome.
mod cell;
mod direction;
mod food;
mod snake;
pub(crate) use self::cell::Cell;
pub(crate) use self::direction::Direction;
use self::food::Food;
use self::snake::Snake;
use crate::audio::{AudioCue, AudioPort};
use crate::consts;
use rand::Rng;

#[derive(Clone, Debug)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    /// The direction applied on the next tick
    direction: Direction,
    /// The most recently validated input, promoted to `direction` at the
    /// end of each tick.  The double buffer keeps two key presses within
    /// one tick window from turning into a fatal instant reversal.
    pending: Direction,
    food: Food,
    score: u32,
}

impl Session {
    pub(crate) fn new() -> Session {
        Session::with_rng(rand::rng())
    }
}

impl<R> Session<R> {
    pub(crate) fn with_rng(rng: R) -> Session<R> {
        Session {
            rng,
            snake: Snake::starting(),
            direction: Direction::Right,
            pending: Direction::Right,
            food: Food::inactive(),
            score: 0,
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food_cell(&self) -> Option<Cell> {
        self.food.active_cell()
    }

    /// Request a direction change, to take effect on the next tick.
    /// Ignored if it would exactly reverse the direction currently in
    /// effect.  The comparison is against the current direction, not the
    /// pending one, so rapid double presses cannot sneak a reversal
    /// through.
    pub(crate) fn steer(&mut self, direction: Direction) {
        if !direction.is_reversal_of(self.direction) {
            self.pending = direction;
        }
    }

    /// Restore the initial state: five-cell snake, facing right, no food,
    /// score zero.  Called when a run ends so the session is ready for the
    /// next one.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::starting();
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.food = Food::inactive();
        self.score = 0;
    }
}

impl<R: Rng> Session<R> {
    /// Advance the simulation by exactly one step:
    ///
    /// 1. Push the cell one step ahead of the head as the new head.
    /// 2. Check for collision on the post-insertion, pre-trim body.
    /// 3. On food: deactivate it, add to the score, emit the score cue,
    ///    and keep the tail.  Otherwise drop the tail.
    /// 4. Re-place food if none is active.
    /// 5. Promote the pending direction.
    ///
    /// The collision is reported, not acted on: the caller decides whether
    /// to keep ticking or end the run.
    pub(crate) fn advance<A: AudioPort>(&mut self, audio: &mut A) -> TickOutcome {
        let head = self.snake.head().step(self.direction);
        self.snake.push_head(head);
        let collided = self.snake.bites_itself() || !head.in_bounds();
        let ate = self.food.active_cell() == Some(head);
        if ate {
            self.food.deactivate();
            self.score += consts::SCORE_PER_FOOD;
            audio.play(AudioCue::Score);
        } else {
            self.snake.pop_tail();
        }
        self.food.place(&mut self.rng, &self.snake);
        self.direction = self.pending;
        TickOutcome { collided, ate }
    }
}

/// What one call to [`Session::advance`] did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickOutcome {
    /// The new head hit a wall or the snake's own body
    pub(crate) collided: bool,
    /// The new head landed on the food
    pub(crate) ate: bool,
}
