//! Input events as the core sees them.
//!
//! The terminal frontend translates crossterm's event stream into this enum
//! so `AppCore` never touches the backend directly.

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Key press (releases and repeats are dropped by the frontend)
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    Resize { width: u16, height: u16 },
}

impl FrontendEvent {
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    pub fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self::Mouse { kind, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            key_event,
            FrontendEvent::Key {
                code: KeyCode::Char('j'),
                ..
            }
        ));

        let wheel = FrontendEvent::mouse(MouseEventKind::ScrollDown, 4, 9);
        assert!(matches!(wheel, FrontendEvent::Mouse { x: 4, y: 9, .. }));
    }
}
