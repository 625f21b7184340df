//! Navigation sidebar: title, the page selector and the project note.

use super::markup::{render_markup, MarkupStyle};
use crate::content::SiteInfo;
use crate::core::navigation::PageId;
use crate::core::state::{Focus, ViewState};
use crate::theme::AppTheme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Row (inside the sidebar block) of the first page entry
pub const FIRST_ENTRY_ROW: u16 = 2;

/// Sidebar contents for `width` inner columns.
///
/// Row 0 is the prompt, the page entries start at `FIRST_ENTRY_ROW`.
pub fn sidebar_lines(
    site: &SiteInfo,
    current: PageId,
    view: &ViewState,
    theme: &AppTheme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            site.selector_prompt.clone(),
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
    ];

    for page in PageId::ALL {
        let marker = if page == current { "(•) " } else { "( ) " };
        let under_cursor = view.focus == Focus::Sidebar && view.sidebar_cursor == page.index();
        let style = if under_cursor {
            Style::default()
                .fg(theme.selection_text)
                .bg(theme.selection_background)
                .add_modifier(Modifier::BOLD)
        } else if page == current {
            Style::default()
                .fg(theme.main_header)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_primary)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, page.label()),
            style,
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme.border),
    )));

    let style = MarkupStyle {
        text: Style::default().fg(theme.text_secondary),
        bold: Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
        heading: Style::default().fg(theme.subheading),
        minor_heading: Style::default().fg(theme.subheading),
        code: Style::default().fg(theme.info),
    };
    lines.extend(render_markup(&site.sidebar_note, width, &style));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLibrary;
    use crate::frontend::tui::markup::plain_text;
    use crate::theme::ThemePresets;

    #[test]
    fn test_default_selection_is_second_entry() {
        let library = ContentLibrary::embedded().unwrap();
        let lines = sidebar_lines(
            &library.site,
            PageId::default(),
            &ViewState::default(),
            &ThemePresets::dark(),
            28,
        );
        let text: Vec<String> = lines.iter().map(plain_text).collect();

        assert_eq!(text[0], "Go to:");
        let row = FIRST_ENTRY_ROW as usize;
        assert_eq!(text[row], "( ) 🏠 Home");
        assert_eq!(text[row + 1], "(•) 📖 Introduction");
        assert_eq!(text[row + 2], "( ) 📊 Data Analysis");
        assert!(text.iter().any(|l| l.contains("UC Davis | Fall 2025")));
    }
}
