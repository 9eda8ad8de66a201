use std::cmp::max;
use std::time::Duration;

/// How long a tick lasts and how it shrinks as the snake eats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TickSettings {
    pub tick_ms: u64,
    pub min_tick_ms: u64,
    /// Subtracted from `tick_ms` for every fruit eaten
    pub tick_step_ms: u64,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self {
            tick_ms: 120,
            min_tick_ms: 50,
            tick_step_ms: 5,
        }
    }
}

impl TickSettings {
    /// One step faster, never below `min_tick_ms`
    #[must_use]
    pub fn sped_up(self) -> Self {
        Self {
            tick_ms: max(self.min_tick_ms, self.tick_ms.saturating_sub(self.tick_step_ms)),
            ..self
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[test]
fn test_sped_up() {
    let base = TickSettings::default();
    for (tick_ms, expect) in [(120, 115), (55, 50), (52, 50), (50, 50), (3, 50)] {
        let tick = TickSettings { tick_ms, ..base };
        assert_eq!(tick.sped_up().tick_ms, expect, "from {}ms", tick_ms);
    }
}

#[test]
fn test_sped_up_is_monotonic() {
    let mut tick = TickSettings::default();
    for _ in 0..100 {
        let next = tick.sped_up();
        assert!(next.tick_ms <= tick.tick_ms);
        assert!(next.tick_ms >= tick.min_tick_ms);
        tick = next;
    }
    assert_eq!(tick.tick_ms, tick.min_tick_ms);
}
