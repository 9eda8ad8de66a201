use super::is_reverse;
use crate::basic::Dir;
use crate::game::GameState;

/// Queue `dir` for the next tick. Turning straight back into the neck is
/// refused, the check runs against the direction the last tick applied so
/// repeated presses within one tick overwrite each other.
pub fn steer(state: &GameState, dir: Dir) -> GameState {
    if is_reverse(state.dir, dir) {
        log::debug!("refused reversal from {:?} to {:?}", state.dir, dir);
        return state.clone();
    }

    GameState {
        next_dir: dir,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir::*;
    use crate::game::{create_state, step};
    use crate::random::FixedSequence;

    fn new_game() -> (GameState, FixedSequence) {
        let mut rng = FixedSequence::new(vec![0.1, 0.2, 0.3, 0.4]);
        (create_state(10, &mut rng), rng)
    }

    #[test]
    fn test_turn_is_queued() {
        let (state, _) = new_game();
        let steered = steer(&state, U);
        assert_eq!(steered.next_dir, U);
        assert_eq!(steered.dir, R);
        assert_eq!(steered.snake, state.snake);
    }

    #[test]
    fn test_reversal_is_refused() {
        let (state, _) = new_game();
        assert_eq!(steer(&state, L), state);
    }

    #[test]
    fn test_last_press_wins() {
        let (state, mut rng) = new_game();
        let steered = steer(&steer(&state, U), D);
        assert_eq!(steered.next_dir, D);
        let next = step(&steered, &mut rng);
        assert_eq!(next.head(), state.head() + D);
    }

    #[test]
    fn test_double_press_cannot_reverse() {
        // U then L within one tick: L is checked against R, not U
        let (state, _) = new_game();
        let steered = steer(&steer(&state, U), L);
        assert_eq!(steered.next_dir, U);
    }

    #[test]
    fn test_reversal_allowed_after_tick() {
        let (state, mut rng) = new_game();
        let turned = step(&steer(&state, U), &mut rng);
        assert_eq!(turned.dir, U);
        assert_eq!(steer(&turned, L).next_dir, L);
        assert_eq!(steer(&turned, D).next_dir, U);
    }
}
