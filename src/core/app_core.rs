use super::input_router::{route_key, DashAction};
use super::navigation::{PageId, Transition};
use super::state::{Activation, Focus, Session};
use crate::config::Config;
use crate::content::ContentLibrary;
use crate::frontend::FrontendEvent;
use crate::theme::{parse_hex, AppTheme, ThemePresets};
use crossterm::event::{MouseButton, MouseEventKind};
use std::sync::Arc;

/// Lines moved per mouse wheel tick
const WHEEL_STEP: i32 = 3;

/// Where a sidebar entry was drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarHit {
    pub page: PageId,
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl SidebarHit {
    fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// Layout facts recorded by the frontend on every frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Visible rows of the content pane
    pub content_height: u16,
    /// Total composed rows of the active page
    pub page_lines: u16,
    pub sidebar_hits: Vec<SidebarHit>,
}

impl Viewport {
    pub fn max_scroll(&self) -> u16 {
        self.page_lines.saturating_sub(self.content_height)
    }

    fn page_step(&self) -> i32 {
        (self.content_height.saturating_sub(1)).max(1) as i32
    }
}

/// Core application state (frontend-agnostic)
///
/// Holds the configuration, the shared read-only content library and the
/// single interactive session. Frontends feed it `FrontendEvent`s and read
/// it back when drawing.
pub struct AppCore {
    pub config: Config,

    /// Validated content, shared read-only
    pub content: Arc<ContentLibrary>,

    pub session: Session,

    pub theme: AppTheme,

    /// Application running flag
    pub running: bool,

    pub viewport: Viewport,
}

impl AppCore {
    pub fn new(config: Config, content: Arc<ContentLibrary>) -> Self {
        let theme = resolve_theme(&config);
        let session = Session::new(config.ui.initial_page);
        tracing::info!(
            "{} starting on {} with theme '{}'",
            session.id(),
            session.current(),
            theme.name
        );

        Self {
            config,
            content,
            session,
            theme,
            running: true,
            viewport: Viewport::default(),
        }
    }

    /// Whether the frontend should draw a new frame
    pub fn take_render_request(&mut self) -> bool {
        self.session.take_render_request()
    }

    pub fn handle_event(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => {
                let action = route_key(code, modifiers);
                self.handle_action(action);
            }
            FrontendEvent::Mouse { kind, x, y } => self.handle_mouse(kind, x, y),
            FrontendEvent::Resize { width, height } => {
                tracing::debug!("Resized to {}x{}", width, height);
                let max = self.viewport.max_scroll();
                self.session.scroll_by(0, max);
            }
        }
    }

    pub fn handle_action(&mut self, action: DashAction) {
        let max = self.viewport.max_scroll();
        let step = self.viewport.page_step();
        let page = self.session.current();
        let focus = self.session.view.focus;

        match action {
            DashAction::Quit => {
                tracing::info!("{} quitting", self.session.id());
                self.running = false;
            }
            DashAction::ToggleFocus => self.session.toggle_focus(),
            DashAction::JumpTo(target) => {
                if let Transition::Unchanged(page) = self.session.select(target) {
                    tracing::debug!("Already on {}", page);
                }
            }
            DashAction::PageUp => self.session.scroll_by(-step, max),
            DashAction::PageDown => self.session.scroll_by(step, max),
            DashAction::Top => self.session.scroll_to(0),
            DashAction::Bottom => self.session.scroll_to(max),

            DashAction::Up | DashAction::Down => {
                let delta = if action == DashAction::Up { -1 } else { 1 };
                match focus {
                    Focus::Sidebar => self.session.move_sidebar_cursor(delta as isize),
                    Focus::Content => self.session.scroll_by(delta, max),
                }
            }

            DashAction::Left | DashAction::Right => {
                let delta = if action == DashAction::Left { -1 } else { 1 };
                match page {
                    PageId::Home => {
                        let count = self.content.home.actions.len();
                        self.session.move_cta_cursor(delta, count);
                    }
                    PageId::Introduction => self.session.cycle_tab(delta),
                    PageId::DataAnalysis => {}
                }
            }

            DashAction::Activate => match focus {
                Focus::Sidebar => {
                    self.session.select_sidebar_cursor();
                }
                Focus::Content if page == PageId::Home => {
                    let content = Arc::clone(&self.content);
                    if let Some(cta) = content.home.actions.get(self.session.view.cta_cursor) {
                        if let Activation::Navigated(transition) = self.session.activate(cta) {
                            tracing::debug!("'{}' pressed: {:?}", cta.button, transition);
                        }
                    }
                }
                Focus::Content => {}
            },

            DashAction::None => {}
        }
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let max = self.viewport.max_scroll();
        match kind {
            MouseEventKind::ScrollUp => self.session.scroll_by(-WHEEL_STEP, max),
            MouseEventKind::ScrollDown => self.session.scroll_by(WHEEL_STEP, max),
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .viewport
                    .sidebar_hits
                    .iter()
                    .find(|hit| hit.contains(x, y))
                    .map(|hit| hit.page);
                if let Some(page) = hit {
                    if self.session.select(page).changed() {
                        tracing::debug!("Sidebar click selected {}", page);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Theme preset named in the config, with the optional accent applied
fn resolve_theme(config: &Config) -> AppTheme {
    let theme = ThemePresets::get(&config.ui.theme);
    match config.ui.accent.as_deref() {
        Some(hex) => match parse_hex(hex) {
            Some(accent) => theme.with_accent(accent),
            None => {
                tracing::warn!("Ignoring invalid accent colour '{}'", hex);
                theme
            }
        },
        None => theme,
    }
}
