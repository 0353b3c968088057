//! geotags-rs
//! ==========
//!
//! Umbrella crate for the workspace. It re-exports [`geotags_core`] so the
//! demos under `demos/` can be run with `cargo run --example <name>` from the
//! repository root.
pub use geotags_core::*;
