use super::compose::{compose_page, ComposeOptions};
use super::sidebar::{sidebar_lines, FIRST_ENTRY_ROW};
use crate::core::app_core::{AppCore, SidebarHit};
use crate::core::navigation::PageId;
use crate::core::state::Focus;
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Below this size only a resize hint is drawn
const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 10;

/// TUI Frontend using ratatui
///
/// Raw mode, alternate screen and mouse capture are set up in `new` and
/// undone in `cleanup` (also run on drop).
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    restored: bool,
}

impl TuiFrontend {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16), // ~60 FPS
            restored: false,
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Releases and repeats would double every action on Windows
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
            )),
            Event::Resize(width, height) => Some(FrontendEvent::Resize { width, height }),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Block for the first event, then drain whatever else is queued
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            let ev = event::read().context("Failed to read terminal event")?;
            if let Some(frontend_event) = Self::convert_event(ev) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, core: &mut AppCore) -> Result<()> {
        self.terminal
            .draw(|f| draw_frame(f, core))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

fn draw_frame(f: &mut Frame, core: &mut AppCore) {
    let area = f.area();
    let theme = &core.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let hint = Paragraph::new(format!(
            "Terminal too small ({}x{}), need at least {}x{}",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(theme.warning));
        f.render_widget(hint, area);
        core.viewport.sidebar_hits.clear();
        return;
    }

    let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let sidebar_width = core.config.ui.sidebar_width.min(body.width / 2);
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).areas(body);

    draw_sidebar(f, core, sidebar);
    draw_main(f, core, main);
    draw_status(f, core, status);
}

fn pane_block(title: String, focused: bool, core: &AppCore) -> Block<'static> {
    let theme = &core.theme;
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.section_header)
                .add_modifier(Modifier::BOLD),
        ))
}

fn draw_sidebar(f: &mut Frame, core: &mut AppCore, area: Rect) {
    let focused = core.session.view.focus == Focus::Sidebar;
    let block = pane_block(core.content.site.sidebar_title.clone(), focused, core)
        .style(Style::default().bg(core.theme.sidebar_background));
    let inner = block.inner(area).inner(Margin::new(1, 0));

    let lines = sidebar_lines(
        &core.content.site,
        core.session.current(),
        &core.session.view,
        &core.theme,
        inner.width as usize,
    );
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);

    core.viewport.sidebar_hits = PageId::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| SidebarHit {
            page: *page,
            x: inner.x,
            y: inner.y + FIRST_ENTRY_ROW + i as u16,
            width: inner.width,
        })
        .filter(|hit| hit.y < inner.bottom())
        .collect();
}

fn draw_main(f: &mut Frame, core: &mut AppCore, area: Rect) {
    let focused = core.session.view.focus == Focus::Content;
    let block = pane_block(core.content.site.title.clone(), focused, core);
    // One column of padding on the left, one for the scrollbar on the right
    let inner = block.inner(area).inner(Margin::new(1, 0));

    let lines: Vec<Line<'static>> = compose_page(
        &core.content,
        core.session.current(),
        &core.session.view,
        &core.theme,
        ComposeOptions {
            width: inner.width.saturating_sub(1),
            show_footer: core.config.ui.show_footer,
        },
    );

    let page_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    core.viewport.content_height = inner.height;
    core.viewport.page_lines = page_lines;
    let max = core.viewport.max_scroll();
    if core.session.view.scroll > max {
        core.session.view.scroll = max;
    }
    let scroll = core.session.view.scroll;

    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    if max > 0 {
        let mut state = ScrollbarState::new(max as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(core.theme.border)),
            area.inner(Margin::new(0, 1)),
            &mut state,
        );
    }
}

fn draw_status(f: &mut Frame, core: &AppCore, area: Rect) {
    let theme = &core.theme;
    let base = Style::default()
        .bg(theme.status_background)
        .fg(theme.text_secondary);

    let left = match &core.session.status {
        Some(message) => Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(theme.status_background)
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            format!(" {} ", core.session.current().label()),
            Style::default()
                .bg(theme.status_background)
                .fg(theme.main_header)
                .add_modifier(Modifier::BOLD),
        ),
    };
    let help = match core.session.view.focus {
        Focus::Sidebar => "↑↓ move  Enter select  Tab content  1-3 jump  q quit",
        Focus::Content => "↑↓ scroll  ←→ tab/button  Enter press  Tab sidebar  q quit",
    };

    let line = Line::from(vec![left, Span::styled(format!("│ {}", help), base)]);
    f.render_widget(Paragraph::new(line).style(base), area);
}
