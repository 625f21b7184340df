//! Per-session state
//!
//! A `Session` is the context object every render reads from. Sessions never
//! share mutable state; the content library they render is shared read-only.

use super::navigation::{Navigator, PageId, Transition};
use crate::content::{CallToAction, DATASET_TAB_COUNT};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

/// Result of activating a Home call-to-action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Navigated(Transition),
    /// Disabled placeholder; nothing happened
    Inert,
}

/// View state that only affects how the active page is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub focus: Focus,
    /// Highlighted sidebar entry (may differ from the active page)
    pub sidebar_cursor: usize,
    /// Highlighted Home call-to-action
    pub cta_cursor: usize,
    /// Active dataset tab on the Introduction page
    pub tab: usize,
    pub scroll: u16,
    /// Render every dataset tab one after another (headless dumps)
    pub expand_tabs: bool,
}

/// Not `Clone`: a copy would share its `SessionId`
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    navigator: Navigator,
    pub view: ViewState,
    /// One-line message for the status bar
    pub status: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PageId::default())
    }
}

impl Session {
    pub fn new(initial: PageId) -> Self {
        let id = SessionId::next();
        tracing::debug!("Starting {} on page {}", id, initial);
        Self {
            id,
            navigator: Navigator::new(initial),
            view: ViewState {
                sidebar_cursor: initial.index(),
                ..ViewState::default()
            },
            status: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn current(&self) -> PageId {
        self.navigator.current()
    }

    /// Switch page. A real change resets scroll and tab position.
    pub fn select(&mut self, page: PageId) -> Transition {
        let transition = self.navigator.select(page);
        self.view.sidebar_cursor = page.index();
        if let Transition::Changed { from, to } = transition {
            tracing::info!("{}: {} -> {}", self.id, from, to);
            self.view.scroll = 0;
            self.view.tab = 0;
            self.view.cta_cursor = 0;
            self.status = None;
        }
        transition
    }

    /// Activate a Home call-to-action. Disabled entries are inert.
    pub fn activate(&mut self, action: &CallToAction) -> Activation {
        match action.live_target() {
            Some(target) => Activation::Navigated(self.select(target)),
            None => {
                tracing::debug!("{}: ignored inert action '{}'", self.id, action.button);
                self.status = action.caption.clone();
                self.navigator.request_render();
                Activation::Inert
            }
        }
    }

    pub fn move_sidebar_cursor(&mut self, delta: isize) {
        let len = PageId::ALL.len() as isize;
        let cursor = (self.view.sidebar_cursor as isize + delta).rem_euclid(len);
        self.view.sidebar_cursor = cursor as usize;
        self.navigator.request_render();
    }

    /// Select the page under the sidebar cursor
    pub fn select_sidebar_cursor(&mut self) -> Transition {
        let page = PageId::from_index(self.view.sidebar_cursor).unwrap_or_default();
        self.select(page)
    }

    pub fn move_cta_cursor(&mut self, delta: isize, action_count: usize) {
        if action_count == 0 {
            return;
        }
        let len = action_count as isize;
        let cursor = (self.view.cta_cursor as isize + delta).rem_euclid(len);
        self.view.cta_cursor = cursor as usize;
        self.navigator.request_render();
    }

    pub fn cycle_tab(&mut self, delta: isize) {
        let len = DATASET_TAB_COUNT as isize;
        self.view.tab = (self.view.tab as isize + delta).rem_euclid(len) as usize;
        self.navigator.request_render();
    }

    /// Scroll the content pane, clamped to `max`
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = (self.view.scroll as i32 + delta).clamp(0, max as i32);
        self.view.scroll = next as u16;
        self.navigator.request_render();
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.view.scroll = offset;
        self.navigator.request_render();
    }

    pub fn toggle_focus(&mut self) {
        self.view.focus = match self.view.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        };
        self.navigator.request_render();
    }

    pub fn take_render_request(&mut self) -> bool {
        self.navigator.take_render_request()
    }
}
