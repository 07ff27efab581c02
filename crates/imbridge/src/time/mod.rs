//! Time subsystem.
//!
//! Frame deltas are computed from the platform's nanosecond tick counter,
//! one `tick()` per opened frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
