use std::time::Duration;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Platform timestamp taken at the tick, in nanoseconds.
    pub now_ns: u64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock driven by platform nanosecond ticks.
///
/// The clock never reads the system time itself; callers pass the platform's
/// tick counter so deltas match the renderer's notion of time and tests can
/// feed exact values.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ns: Option<u64>,
    frame_index: u64,
    first_dt: Duration,
    dt_min: Duration,
}

impl FrameClock {
    /// Creates a clock that reports `first_dt` on its first tick and never
    /// reports less than `dt_min`.
    pub fn new(first_dt: Duration, dt_min: Duration) -> Self {
        debug_assert!(!dt_min.is_zero(), "dt_min must be positive");
        Self {
            last_ns: None,
            frame_index: 0,
            first_dt,
            dt_min,
        }
    }

    /// Advances the clock to `now_ns` and returns a new `FrameTime`.
    pub fn tick(&mut self, now_ns: u64) -> FrameTime {
        let dt = match self.last_ns {
            None => self.first_dt,
            // Tick counters are monotonic; a backwards step clamps to the floor.
            Some(last) => Duration::from_nanos(now_ns.saturating_sub(last)),
        };
        let dt = dt.max(self.dt_min);

        self.last_ns = Some(now_ns);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now_ns,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(1.0 / 60.0), Duration::from_micros(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_reports_first_dt() {
        let mut clock = FrameClock::new(Duration::from_millis(16), Duration::from_micros(1));
        let ft = clock.tick(5_000_000_000);
        assert_eq!(ft.dt, Duration::from_millis(16).as_secs_f32());
        assert_eq!(ft.frame_index, 0);
        assert_eq!(ft.now_ns, 5_000_000_000);
    }

    #[test]
    fn later_ticks_use_nanosecond_difference() {
        let mut clock = FrameClock::default();
        clock.tick(1_000_000);
        let ft = clock.tick(1_000_000 + 8_333_333);
        assert!((ft.dt - 0.008_333_333).abs() < 1e-7);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn equal_timestamps_clamp_to_minimum() {
        let mut clock = FrameClock::new(Duration::from_millis(16), Duration::from_micros(1));
        clock.tick(42);
        let ft = clock.tick(42);
        assert_eq!(ft.dt, Duration::from_micros(1).as_secs_f32());
    }

    #[test]
    fn backwards_step_clamps_to_minimum() {
        let mut clock = FrameClock::default();
        clock.tick(1_000);
        let ft = clock.tick(500);
        assert!(ft.dt > 0.0);
    }
}
