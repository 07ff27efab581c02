//! Bridge lifecycle.
//!
//! [`Bridge`] owns the per-process bridge state and composes the input,
//! render, cursor and font parts into the init / frame / shutdown protocol.

mod bridge;
mod config;
mod slot;

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use slot::is_claimed;
