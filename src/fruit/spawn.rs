use crate::basic::GridPoint;
use crate::random::RandomSource;
use std::collections::VecDeque;

/// Rejection-sample a cell not covered by the snake, `x` is drawn
/// before `z` on every attempt.
/// Never returns if the snake covers the whole board.
pub fn random_free_cell(
    size: isize,
    snake: &VecDeque<GridPoint>,
    rng: &mut impl RandomSource,
) -> GridPoint {
    loop {
        let x = rng.below(size);
        let z = rng.below(size);
        let cell = GridPoint { x, z };
        if !snake.contains(&cell) {
            return cell;
        }
    }
}
