//! imbridge: connects an immediate-mode GUI engine to a 2D platform renderer.
//!
//! The bridge translates platform input into the engine's input model,
//! replays the engine's draw-command lists through the renderer, keeps the
//! platform cursor and text-input area in sync with the engine's requests,
//! and uploads the engine's font atlas. Platform and engine are both consumed
//! through traits ([`platform::Platform`], [`engine::GuiEngine`]).

pub mod coords;
pub mod core;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod font;
pub mod input;
pub mod logging;
pub mod platform;
pub mod render;
pub mod time;

#[cfg(test)]
mod testing;

pub use crate::core::{Bridge, BridgeConfig};
pub use crate::error::{BridgeError, BridgeResult, PlatformError, PlatformResult};
