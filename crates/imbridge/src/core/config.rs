use std::time::Duration;

use crate::input::STICK_DEAD_ZONE;
use crate::time::FrameClock;

/// Bridge tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Raw stick magnitude at or below which an axis reads as zero.
    pub stick_dead_zone: i16,

    /// Delta time reported for the first frame, which has no predecessor.
    pub first_frame_delta: Duration,

    /// Lower bound for reported delta time.
    ///
    /// The engine rejects zero deltas; two frames opened within the same
    /// tick report this instead.
    pub min_frame_delta: Duration,
}

impl BridgeConfig {
    pub(crate) fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.first_frame_delta, self.min_frame_delta.max(Duration::from_nanos(1)))
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            stick_dead_zone: STICK_DEAD_ZONE,
            first_frame_delta: Duration::from_secs_f64(1.0 / 60.0),
            min_frame_delta: Duration::from_micros(1),
        }
    }
}
