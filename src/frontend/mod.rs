//! Frontend abstraction layer
//!
//! `AppCore` owns all dashboard state; a frontend only turns terminal input
//! into `FrontendEvent`s and draws the core's current state.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

pub trait Frontend {
    /// Collect pending input events (empty if none arrived within the poll
    /// interval)
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw the current state.
    ///
    /// Takes the core mutably: the frame records its layout (content height,
    /// sidebar hit areas) back into `AppCore::viewport`.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in cells
    fn size(&self) -> (u16, u16);
}
