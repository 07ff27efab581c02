//! Cursor shape and text-input (IME) bridging.

mod cache;
mod ime;

pub use cache::system_cursor;

pub(crate) use cache::CursorCache;
pub(crate) use ime::{ime_callback, ImeTarget, SharedImeTarget};
