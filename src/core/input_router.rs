//! Input routing for the dashboard
//!
//! Translates raw key events into semantic `DashAction`s. What an action
//! does depends on focus and the active page; that part lives in `AppCore`.

use crate::core::navigation::PageId;
use crossterm::event::{KeyCode, KeyModifiers};

/// All actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashAction {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Top,
    Bottom,

    /// Enter/Space: select sidebar entry or press the highlighted button
    Activate,
    /// Tab: move focus between sidebar and content
    ToggleFocus,
    /// Number keys jump straight to a page
    JumpTo(PageId),

    Quit,

    // Key not bound
    None,
}

/// Route a key press to a `DashAction`
pub fn route_key(code: KeyCode, modifiers: KeyModifiers) -> DashAction {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => DashAction::Quit,
            KeyCode::Home => DashAction::Top,
            KeyCode::End => DashAction::Bottom,
            _ => DashAction::None,
        };
    }

    match code {
        KeyCode::Up | KeyCode::Char('k') => DashAction::Up,
        KeyCode::Down | KeyCode::Char('j') => DashAction::Down,
        KeyCode::Left | KeyCode::Char('h') => DashAction::Left,
        KeyCode::Right | KeyCode::Char('l') => DashAction::Right,
        KeyCode::PageUp => DashAction::PageUp,
        KeyCode::PageDown => DashAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => DashAction::Top,
        KeyCode::End | KeyCode::Char('G') => DashAction::Bottom,
        KeyCode::Enter | KeyCode::Char(' ') => DashAction::Activate,
        KeyCode::Tab | KeyCode::BackTab => DashAction::ToggleFocus,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            PageId::from_index(index).map_or(DashAction::None, DashAction::JumpTo)
        }
        KeyCode::Char('q') | KeyCode::Esc => DashAction::Quit,
        _ => DashAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(route_key(KeyCode::Up, KeyModifiers::NONE), DashAction::Up);
        assert_eq!(route_key(KeyCode::Char('j'), KeyModifiers::NONE), DashAction::Down);
        assert_eq!(route_key(KeyCode::Char('l'), KeyModifiers::NONE), DashAction::Right);
        assert_eq!(route_key(KeyCode::Enter, KeyModifiers::NONE), DashAction::Activate);
        assert_eq!(route_key(KeyCode::BackTab, KeyModifiers::SHIFT), DashAction::ToggleFocus);
        assert_eq!(route_key(KeyCode::Char('G'), KeyModifiers::SHIFT), DashAction::Bottom);
    }

    #[test]
    fn test_number_keys_jump() {
        assert_eq!(
            route_key(KeyCode::Char('1'), KeyModifiers::NONE),
            DashAction::JumpTo(PageId::Home)
        );
        assert_eq!(
            route_key(KeyCode::Char('3'), KeyModifiers::NONE),
            DashAction::JumpTo(PageId::DataAnalysis)
        );
        // Only three pages exist
        assert_eq!(route_key(KeyCode::Char('4'), KeyModifiers::NONE), DashAction::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(route_key(KeyCode::Char('q'), KeyModifiers::NONE), DashAction::Quit);
        assert_eq!(route_key(KeyCode::Esc, KeyModifiers::NONE), DashAction::Quit);
        assert_eq!(route_key(KeyCode::Char('c'), KeyModifiers::CONTROL), DashAction::Quit);
        assert_eq!(route_key(KeyCode::Char('x'), KeyModifiers::CONTROL), DashAction::None);
    }
}
