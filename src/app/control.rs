use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    GameOver,
}

// combines tick timing with game state management
pub struct Control {
    tick: Duration,
    last_update: Instant,

    // number of ticks (possibly fractional) that are due but
    // haven't been performed yet, in units of the current tick
    remainder: f64,

    game_state: State,
}

impl Control {
    /// Ticks further behind than this are dropped instead of being
    /// caught up on all at once
    const MAX_BACKLOG: f64 = 3.;

    pub fn new(tick: Duration) -> Self {
        Self::new_at(tick, Instant::now())
    }

    fn new_at(tick: Duration, now: Instant) -> Self {
        Self {
            tick,
            last_update: now,
            remainder: 0.,
            game_state: State::Playing,
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn set_tick(&mut self, tick: Duration) {
        self.tick = tick;
    }

    // repeatedly called in update() as while loop condition,
    // true once for every tick that is due
    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    fn can_update_at(&mut self, now: Instant) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        let ticks = now.saturating_duration_since(self.last_update).as_secs_f64()
            / self.tick.as_secs_f64()
            + self.remainder;

        if ticks >= 1. {
            self.remainder = (ticks - 1.).min(Self::MAX_BACKLOG);
            self.last_update = now;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now())
    }

    // time spent paused doesn't count towards the next tick
    fn play_at(&mut self, now: Instant) {
        self.game_state = State::Playing;
        self.last_update = now;
    }

    pub fn pause(&mut self) {
        self.game_state = State::Paused;
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.remainder = 0.;
    }
}
