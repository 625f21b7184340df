//! Core dashboard logic
//!
//! Page navigation, per-session state and input handling.
//! NO imports from rendering code; frontends read the core and draw it.

pub mod app_core;
pub mod input_router;
pub mod navigation;
pub mod state;

pub use app_core::AppCore;
