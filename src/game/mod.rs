pub use step::step;
pub use tick::TickSettings;

use crate::basic::{Dir, GridPoint};
use crate::fruit::random_free_cell;
use crate::random::RandomSource;
use std::collections::VecDeque;

mod step;
mod tick;

/// Length of the snake at the start of a game
pub const INITIAL_LEN: isize = 3;

/// Whether the whole starting snake lies on a `size` x `size` board.
/// The tail sits `INITIAL_LEN - 1` cells left of the centered head.
pub fn fits_initial_snake(size: isize) -> bool {
    size / 2 >= INITIAL_LEN - 1
}

/// Everything that changes from one tick to the next. A tick never
/// modifies a `GameState`, it produces a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Side length of the square board
    pub size: isize,
    /// Head first, tail last
    pub snake: VecDeque<GridPoint>,
    /// Direction applied by the last tick
    pub dir: Dir,
    /// Direction the next tick will apply
    pub next_dir: Dir,
    pub fruit: Option<GridPoint>,
    pub alive: bool,
    pub tick: TickSettings,
}

impl GameState {
    pub fn head(&self) -> GridPoint {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }
}

/// Start a game on a `size` x `size` board with the default tick settings.
/// Boards failing `fits_initial_snake` are not checked, the tail then
/// starts off the board.
pub fn create_state(size: isize, rng: &mut impl RandomSource) -> GameState {
    create_state_with(size, TickSettings::default(), rng)
}

/// The snake starts horizontally in the middle of the board, facing right
pub fn create_state_with(
    size: isize,
    tick: TickSettings,
    rng: &mut impl RandomSource,
) -> GameState {
    let mid = size / 2;
    let head = GridPoint { x: mid, z: mid };
    let snake: VecDeque<_> = (0..INITIAL_LEN)
        .map(|i| head.translate(Dir::L, i))
        .collect();
    let fruit = random_free_cell(size, &snake, rng);

    GameState {
        size,
        snake,
        dir: Dir::R,
        next_dir: Dir::R,
        fruit: Some(fruit),
        alive: true,
        tick,
    }
}
