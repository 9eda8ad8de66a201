use super::GameState;
use crate::basic::GridPoint;
use crate::fruit::random_free_cell;
use crate::random::RandomSource;
use std::collections::VecDeque;

fn hits_wall(pos: GridPoint, size: isize) -> bool {
    !pos.is_inside(size)
}

// the tail still counts as occupied, moving onto it is a crash
// even when the tail would have moved away this tick
fn hits_self(pos: GridPoint, snake: &VecDeque<GridPoint>) -> bool {
    snake.contains(&pos)
}

/// Advance the game by one tick. A dead state is returned as is.
pub fn step(state: &GameState, rng: &mut impl RandomSource) -> GameState {
    if !state.alive {
        return state.clone();
    }

    let dir = state.next_dir;
    let next_head = state.head() + dir;

    if hits_wall(next_head, state.size) || hits_self(next_head, &state.snake) {
        return GameState {
            alive: false,
            ..state.clone()
        };
    }

    let ate = state.fruit == Some(next_head);

    let mut snake = state.snake.clone();
    snake.push_front(next_head);
    if !ate {
        snake.pop_back();
    }

    let (fruit, tick) = if ate {
        let fruit = random_free_cell(state.size, &snake, rng);
        let tick = state.tick.sped_up();
        log::debug!(
            "ate fruit at {:?}, length {}, tick {}ms",
            next_head,
            snake.len(),
            tick.tick_ms
        );
        (Some(fruit), tick)
    } else {
        (state.fruit, state.tick)
    };

    GameState {
        size: state.size,
        snake,
        dir,
        next_dir: state.next_dir,
        fruit,
        alive: true,
        tick,
    }
}
