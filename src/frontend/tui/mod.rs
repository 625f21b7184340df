//! TUI Frontend (ratatui-based)
//!
//! `app` owns the terminal; `compose`, `markup`, `sidebar` and `table` turn
//! content into styled lines without touching it, so they also serve the
//! headless `dump` command.

pub mod app;
pub mod compose;
pub mod markup;
pub mod sidebar;
pub mod table;

pub use app::TuiFrontend;
