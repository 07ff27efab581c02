//! Windowing-library adapters producing [`InputEvent`](crate::input::InputEvent)s.

pub mod winit;
