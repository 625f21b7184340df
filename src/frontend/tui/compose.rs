//! Page composition
//!
//! Turns a page's content block into styled lines. The output only depends
//! on the content, the session's view state, the theme and the width, so the
//! same lines feed the terminal pane and headless `dump` output.

use super::markup::{self, line_width, render_markup, wrap_spans, MarkupStyle};
use super::table::{side_by_side, TableStyle, TextTable};
use crate::content::{
    AssetStatus, ClassBalance, ConfusionGrid, ContentBlock, ContentLibrary, DataAnalysisBlock,
    DataSplit, DatasetSection, FeatureImportance, HomeBlock, ImageRef, IntroductionBlock,
    ModelResult, OhlcvRow, ResultsSection, Tone, CONFUSION_COL_LABELS, CONFUSION_ROW_LABELS,
};
use crate::core::navigation::{self, PageId};
use crate::core::state::{Focus, ViewState};
use crate::theme::AppTheme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Narrowest width at which cards and grids go side by side
const SIDE_BY_SIDE_MIN_WIDTH: usize = 90;
const COLUMN_GAP: usize = 2;
/// Narrower columns stack instead
const MIN_COLUMN_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions {
    pub width: u16,
    pub show_footer: bool,
}

/// Compose the full page for `page`
pub fn compose_page(
    library: &ContentLibrary,
    page: PageId,
    view: &ViewState,
    theme: &AppTheme,
    options: ComposeOptions,
) -> Vec<Line<'static>> {
    let mut composer = Composer::new(theme, options.width as usize);

    match navigation::render(page, library) {
        ContentBlock::Home(block) => composer.home(block, view),
        ContentBlock::Introduction(block) => composer.introduction(block, view),
        ContentBlock::DataAnalysis(block) => composer.data_analysis(block),
    }

    if options.show_footer {
        composer.footer(&library.site.footer);
    }

    composer.lines
}

struct Composer<'t> {
    theme: &'t AppTheme,
    width: usize,
    lines: Vec<Line<'static>>,
}

impl<'t> Composer<'t> {
    fn new(theme: &'t AppTheme, width: usize) -> Self {
        Self {
            theme,
            width: width.max(20),
            lines: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------

    fn text(&self) -> Style {
        Style::default().fg(self.theme.text_primary)
    }

    fn secondary(&self) -> Style {
        Style::default().fg(self.theme.text_secondary)
    }

    fn markup_style(&self) -> MarkupStyle {
        MarkupStyle {
            text: self.text(),
            bold: Style::default()
                .fg(self.theme.emphasis)
                .add_modifier(Modifier::BOLD),
            heading: Style::default().fg(self.theme.subheading),
            minor_heading: Style::default().fg(self.theme.section_header),
            code: Style::default().fg(self.theme.info),
        }
    }

    fn table_style(&self) -> TableStyle {
        TableStyle {
            header: Style::default()
                .fg(self.theme.table_header)
                .add_modifier(Modifier::BOLD),
            cell: self.text(),
            label: Style::default()
                .fg(self.theme.text_secondary)
                .add_modifier(Modifier::BOLD),
            rule: Style::default().fg(self.theme.table_rule),
        }
    }

    fn tone_color(&self, tone: Tone) -> ratatui::style::Color {
        match tone {
            Tone::Info => self.theme.info,
            Tone::Success => self.theme.success,
            Tone::Warning => self.theme.warning,
        }
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        self.lines.push(Line::from(Span::styled(
            "─".repeat(self.width),
            Style::default().fg(self.theme.table_rule),
        )));
    }

    fn centered(&mut self, text: &str, style: Style) {
        let spans = vec![Span::styled(text.to_string(), style)];
        for line in wrap_spans(spans, self.width, Span::raw(""), Span::raw("")) {
            self.lines.push(line.centered());
        }
    }

    fn main_header(&mut self, heading: &str, subheading: Option<&str>) {
        let style = Style::default()
            .fg(self.theme.main_header)
            .add_modifier(Modifier::BOLD);
        self.centered(heading, style);
        if let Some(sub) = subheading {
            self.centered(sub, self.secondary());
        }
        self.blank();
    }

    fn section_header(&mut self, title: &str) {
        self.blank();
        let style = Style::default()
            .fg(self.theme.section_header)
            .add_modifier(Modifier::BOLD);
        self.lines
            .push(Line::from(Span::styled(title.to_string(), style)));
        self.lines.push(Line::from(Span::styled(
            "━".repeat(title.width().max(self.width / 2)),
            Style::default().fg(self.theme.main_header),
        )));
        self.blank();
    }

    fn subheading(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(self.theme.subheading)
                .add_modifier(Modifier::BOLD),
        )));
    }

    fn markup(&mut self, text: &str) {
        let style = self.markup_style();
        let lines = render_markup(text, self.width, &style);
        self.lines.extend(lines);
    }

    /// Box with a coloured left bar, like the info boxes of the web page
    fn callout_lines(&self, tone: Tone, text: &str, width: usize) -> Vec<Line<'static>> {
        let bar = Span::styled("▌ ", Style::default().fg(self.tone_color(tone)));
        let inner = width.saturating_sub(2).max(10);
        render_markup(text, inner, &self.markup_style())
            .into_iter()
            .map(|line| {
                let mut spans = vec![bar.clone()];
                spans.extend(line.spans);
                Line::from(spans)
            })
            .collect()
    }

    fn callout(&mut self, tone: Tone, text: &str) {
        let lines = self.callout_lines(tone, text, self.width);
        self.lines.extend(lines);
    }

    fn table(&mut self, table: &TextTable) {
        let lines = table.render(&self.table_style());
        self.lines.extend(lines);
    }

    /// Lay blocks side by side when there is room, otherwise stack them
    fn columns(&mut self, blocks: Vec<Vec<Line<'static>>>) {
        let widest = blocks
            .iter()
            .flat_map(|b| b.iter().map(line_width))
            .max()
            .unwrap_or(0);

        match self.shared_width(blocks.len()) {
            Some(column_width) if widest <= column_width => {
                self.lines.extend(side_by_side(blocks, column_width, COLUMN_GAP));
            }
            _ => {
                for block in blocks {
                    self.lines.extend(block);
                    self.blank();
                }
            }
        }
    }

    /// Width each of `count` columns gets when laid side by side
    fn shared_width(&self, count: usize) -> Option<usize> {
        let count = count.max(1);
        let shared = self.width.saturating_sub(COLUMN_GAP * (count - 1)) / count;
        (self.width >= SIDE_BY_SIDE_MIN_WIDTH && shared >= MIN_COLUMN_WIDTH).then_some(shared)
    }

    /// Width to lay out one of `count` blocks; the full width when they stack
    fn column_width(&self, count: usize) -> usize {
        self.shared_width(count).unwrap_or(self.width)
    }

    fn image(&mut self, image: &ImageRef) {
        let border = Style::default().fg(self.theme.border);
        let inner = self.width.saturating_sub(4).min(60);
        let boxed = |content: Span<'static>| {
            let fill = inner.saturating_sub(content.content.width());
            Line::from(vec![
                Span::styled("│ ", border),
                content,
                Span::raw(" ".repeat(fill)),
                Span::styled(" │", border),
            ])
        };

        self.lines.push(Line::from(Span::styled(
            format!("┌{}┐", "─".repeat(inner + 2)),
            border,
        )));
        match image.status() {
            AssetStatus::Available => {
                self.lines.push(boxed(Span::styled(
                    "🖼  image placeholder".to_string(),
                    self.secondary(),
                )));
                let url = truncate_str(&image.url, inner);
                self.lines
                    .push(boxed(Span::styled(url, Style::default().fg(self.theme.info))));
            }
            AssetStatus::Broken(reason) => {
                let text = truncate_str(&format!("✗ image unavailable: {}", reason), inner);
                self.lines
                    .push(boxed(Span::styled(text, Style::default().fg(self.theme.error))));
            }
        }
        self.lines.push(Line::from(Span::styled(
            format!("└{}┘", "─".repeat(inner + 2)),
            border,
        )));
        self.lines.push(Line::from(Span::styled(
            image.caption.clone(),
            self.secondary().add_modifier(Modifier::ITALIC),
        )));
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    fn home(&mut self, block: &HomeBlock, view: &ViewState) {
        self.main_header(&block.heading, Some(block.subheading.as_str()));
        self.rule();
        self.blank();

        let width = self.column_width(block.actions.len().max(1));
        let cards = block
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let highlighted = view.focus == Focus::Content && view.cta_cursor == i;
                let color = self.tone_color(action.tone);
                let mut card = self.callout_lines(
                    action.tone,
                    &format!("**{}**\n\n{}", action.title, action.blurb),
                    width,
                );
                card.push(Line::default());

                let button_style = if !action.enabled {
                    Style::default()
                        .fg(self.theme.text_disabled)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else if highlighted {
                    Style::default()
                        .fg(self.theme.selection_text)
                        .bg(self.theme.selection_background)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                };
                let marker = if highlighted { "▶ " } else { "  " };
                card.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(color)),
                    Span::styled(format!("[ {} ]", action.button), button_style),
                ]));
                if let Some(caption) = &action.caption {
                    card.push(Line::from(Span::styled(
                        format!("  {}", caption),
                        self.secondary().add_modifier(Modifier::ITALIC),
                    )));
                }
                card
            })
            .collect();
        self.columns(cards);
    }

    fn introduction(&mut self, block: &IntroductionBlock, view: &ViewState) {
        self.main_header(&block.heading, Some(block.subheading.as_str()));
        self.rule();

        // Purpose & motivation
        let purpose = &block.purpose;
        self.section_header(&purpose.title);
        self.markup(&purpose.narrative);
        self.blank();
        self.callout(Tone::Info, &purpose.key_stats);
        self.blank();
        self.image(&purpose.image);
        self.blank();
        self.rule();

        self.dataset(&block.dataset, view);
        self.blank();
        self.rule();

        self.results(&block.results);
    }

    fn dataset(&mut self, dataset: &DatasetSection, view: &ViewState) {
        self.section_header(&dataset.title);

        let card_width = self.column_width(dataset.metrics.len().max(1));
        let cards = dataset
            .metrics
            .iter()
            .map(|metric| {
                vec![
                    Line::from(Span::styled(metric.label.clone(), self.secondary())),
                    Line::from(Span::styled(
                        metric.value.clone(),
                        Style::default()
                            .fg(self.theme.metric_value)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        truncate_str(&format!("↑ {}", metric.delta), card_width),
                        Style::default().fg(self.theme.metric_delta),
                    )),
                ]
            })
            .collect();
        self.columns(cards);
        self.blank();

        if view.expand_tabs {
            for (tab, label) in dataset.tab_labels().into_iter().enumerate() {
                self.subheading(label);
                self.blank();
                self.dataset_tab(dataset, tab);
                self.blank();
            }
        } else {
            self.tab_bar(&dataset.tab_labels(), view.tab);
            self.blank();
            self.dataset_tab(dataset, view.tab);
        }
    }

    fn tab_bar(&mut self, labels: &[&str], active: usize) {
        let mut spans = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(self.theme.border)));
            }
            let style = if i == active {
                Style::default()
                    .fg(self.theme.selection_text)
                    .bg(self.theme.selection_background)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.secondary()
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        spans.push(Span::styled("   ←/→ switch tab", self.secondary()));
        self.lines.push(Line::from(spans));
        self.lines.push(Line::from(Span::styled(
            "─".repeat(self.width),
            Style::default().fg(self.theme.border),
        )));
    }

    fn dataset_tab(&mut self, dataset: &DatasetSection, tab: usize) {
        match tab {
            0 => {
                let sources = &dataset.sources;
                self.markup(&sources.narrative);
                self.blank();
                self.markup(&format!("#### {}", sources.sample_title));
                let table = TextTable::new(OhlcvRow::COLUMNS)
                    .rows(sources.sample.iter().map(OhlcvRow::cells));
                self.table(&table);
            }
            1 => {
                let features = &dataset.features;
                self.markup(&features.narrative);
                for (i, category) in features.categories.iter().enumerate() {
                    self.blank();
                    self.markup(&format!(
                        "#### {} {} ({} features)",
                        keycap(i + 1),
                        category.name,
                        category.count
                    ));
                    let items: Vec<String> =
                        category.items.iter().map(|item| format!("- {}", item)).collect();
                    self.markup(&items.join("\n"));
                }
                self.blank();
                self.markup(&format!("#### {}", features.importance_title));
                let table = TextTable::new(FeatureImportance::COLUMNS)
                    .rows(features.importance.iter().map(FeatureImportance::cells));
                self.table(&table);
            }
            _ => {
                let splits = &dataset.splits;
                self.markup(&splits.narrative);
                self.blank();
                self.timeline(&splits.splits);
                self.blank();
                self.markup("#### Split Details:");
                let table = TextTable::new(DataSplit::COLUMNS)
                    .rows(splits.splits.iter().map(DataSplit::cells));
                self.table(&table);
                self.blank();
                self.markup(&splits.rationale);
                self.blank();
                self.markup(&class_balance_markup(&splits.class_balance));
                self.blank();
                self.markup(&splits.closing);
            }
        }
    }

    fn timeline(&mut self, splits: &[DataSplit]) {
        let code = Style::default().fg(self.theme.info);
        let (Some(first), Some(last)) = (splits.first(), splits.last()) else {
            return;
        };
        self.lines.push(Line::from(Span::styled(
            format!("Timeline: {} → {}", first.start, last.end),
            code,
        )));
        self.blank();
        for line in timeline_lines(splits) {
            self.lines.push(Line::from(Span::styled(line, code)));
        }
    }

    fn results(&mut self, results: &ResultsSection) {
        self.section_header(&results.title);
        self.markup(&format!("### {}", results.table_title));
        let table =
            TextTable::new(ModelResult::COLUMNS).rows(results.models.iter().map(ModelResult::cells));
        self.table(&table);
        self.blank();

        let width = self.column_width(2);
        let findings = self.callout_lines(Tone::Info, &results.findings, width);
        let insights = self.callout_lines(Tone::Info, &results.insights, width);
        self.columns(vec![findings, insights]);
        self.blank();

        self.markup(&format!("### {}", results.confusion_title));
        self.blank();
        let grids = results
            .confusion
            .iter()
            .map(|grid| {
                let mut block = vec![Line::from(Span::styled(
                    grid.title.clone(),
                    Style::default()
                        .fg(self.theme.section_header)
                        .add_modifier(Modifier::BOLD),
                ))];
                block.extend(confusion_table(grid).render(&self.table_style()));
                block
            })
            .collect();
        self.columns(grids);
        self.blank();
        self.rule();
        self.blank();
        self.callout(Tone::Success, &results.closing);
    }

    fn data_analysis(&mut self, block: &DataAnalysisBlock) {
        self.main_header(&block.heading, None);
        self.callout(Tone::Info, &block.notice);
        self.blank();
        self.markup(&format!("### {}", block.planned_title));
        let items: Vec<String> = block.planned.iter().map(|p| format!("- {}", p)).collect();
        self.markup(&items.join("\n"));
    }

    fn footer(&mut self, footer: &[String]) {
        if footer.is_empty() {
            return;
        }
        self.blank();
        self.rule();
        let style = self.secondary();
        let bold = style.add_modifier(Modifier::BOLD);
        for text in footer {
            let spans = markup::parse_inline(text, style, bold);
            for line in wrap_spans(spans, self.width, Span::raw(""), Span::raw("")) {
                self.lines.push(line.centered());
            }
        }
    }
}

fn truncate_str(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn confusion_table(grid: &ConfusionGrid) -> TextTable {
    let header = std::iter::once("").chain(CONFUSION_COL_LABELS);
    let rows = CONFUSION_ROW_LABELS
        .iter()
        .zip(grid.cells.iter())
        .map(|(label, row)| vec![label.to_string(), row[0].to_string(), row[1].to_string()]);
    TextTable::new(header).with_label_column().rows(rows)
}

/// Drop a trailing ".0" so 5.0 prints as "5" and 50.5 as "50.5"
fn format_pct(value: f64) -> String {
    let text = format!("{:.1}", value);
    text.strip_suffix(".0").map(str::to_string).unwrap_or(text)
}

/// Keycap emoji up to 10, plain "n." past that
fn keycap(n: usize) -> String {
    match n {
        0..=9 => format!("{}\u{fe0f}\u{20e3}", n),
        10 => "🔟".to_string(),
        _ => format!("{}.", n),
    }
}

fn class_balance_markup(balance: &ClassBalance) -> String {
    format!(
        "#### Class Balance:\n\
         - **UP days**: ~{}% (price increases)\n\
         - **DOWN days**: ~{}% (price decreases)\n\
         - **Tail events**: ~{}% (extreme moves)",
        format_pct(balance.up_pct),
        format_pct(balance.down_pct),
        format_pct(balance.tail_pct)
    )
}

/// ASCII timeline of the splits with the boundary dates underneath
fn timeline_lines(splits: &[DataSplit]) -> Vec<String> {
    let mut bar = String::new();
    let mut boundaries = Vec::with_capacity(splits.len() + 1);

    for (i, split) in splits.iter().enumerate() {
        boundaries.push((bar.width(), split.start.to_string()));
        bar.push(if i == 0 { '├' } else { '┼' });
        bar.push_str(&format!("─── {} Set ({}%) ───", split.name, split.share_pct));
    }
    if let Some(last) = splits.last() {
        boundaries.push((bar.width(), last.end.to_string()));
        bar.push('┤');
    }

    let mut dates = String::new();
    for (column, date) in boundaries {
        let used = dates.width();
        if column > used {
            dates.push_str(&" ".repeat(column - used));
        } else if used > 0 {
            dates.push(' ');
        }
        dates.push_str(&date);
    }

    vec![bar, dates]
}

/// Plain-text rendition of composed lines (for `dump`)
pub fn to_plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| markup::plain_text(line).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Session;
    use crate::theme::ThemePresets;

    fn compose(page: PageId, view: &ViewState, width: u16) -> String {
        let library = ContentLibrary::embedded().unwrap();
        let lines = compose_page(
            &library,
            page,
            view,
            &ThemePresets::dark(),
            ComposeOptions {
                width,
                show_footer: true,
            },
        );
        to_plain_text(&lines)
    }

    #[test]
    fn test_every_page_composes() {
        let view = ViewState::default();
        for page in PageId::ALL {
            let text = compose(page, &view, 120);
            assert!(!text.trim().is_empty(), "{} composed nothing", page);
            assert!(text.contains("STA 160 Final Project"), "footer missing on {}", page);
        }
    }

    #[test]
    fn test_introduction_contains_fixtures() {
        let text = compose(PageId::Introduction, &ViewState::default(), 140);
        assert!(text.contains("Cryptocurrency Tail-Risk Prediction"));
        assert!(text.contains("310,896"));
        assert!(text.contains("XGBoost"));
        assert!(text.contains("61.3%"));
        assert!(text.contains("0.658"));
        assert!(text.contains("27850"));
        assert!(text.contains("26597"));
        assert!(text.contains("⏳ Pending"));
        // First tab by default
        assert!(text.contains("BTC-USD"));
        assert!(text.contains("43210.50"));
        assert!(!text.contains("Returns_Lag_1"));
    }

    #[test]
    fn test_tabs_switch_content() {
        let mut session = Session::default();
        session.cycle_tab(1);
        let features = compose(PageId::Introduction, &session.view, 120);
        assert!(features.contains("Returns_Lag_1"));
        assert!(features.contains("0.156"));
        assert!(features.contains("2\u{fe0f}\u{20e3} Volatility Features (14 features)"));
        assert!(!features.contains("BTC-USD"));

        session.cycle_tab(1);
        let splits = compose(PageId::Introduction, &session.view, 120);
        assert!(splits.contains("76,243"));
        assert!(splits.contains("2021-07 → 2022-09"));
        assert!(splits.contains("~50.5% (price increases)"));
        assert!(splits.contains("~5% (extreme moves)"));
    }

    #[test]
    fn test_expanded_tabs_show_everything() {
        let view = ViewState {
            expand_tabs: true,
            ..ViewState::default()
        };
        let text = compose(PageId::Introduction, &view, 120);
        assert!(text.contains("BTC-USD"));
        assert!(text.contains("Returns_Lag_1"));
        assert!(text.contains("67,502"));
    }

    #[test]
    fn test_home_shows_disabled_actions() {
        let text = compose(PageId::Home, &ViewState::default(), 120);
        assert!(text.contains("[ Go to Introduction ]"));
        assert!(text.contains("[ Go to Data Analysis ]"));
        assert!(text.contains("[ Go to Predictions ]"));
        assert_eq!(text.matches("Coming soon!").count(), 2);
    }

    #[test]
    fn test_data_analysis_placeholder() {
        let text = compose(PageId::DataAnalysis, &ViewState::default(), 100);
        assert!(text.contains("under construction"));
        assert!(text.contains("• 💹 Backtesting simulator"));
    }

    #[test]
    fn test_narrow_width_stacks_columns() {
        let text = compose(PageId::Home, &ViewState::default(), 40);
        for line in text.lines() {
            assert!(line.width() <= 40, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn test_many_metric_cards_stack_without_panic() {
        let mut library = ContentLibrary::embedded().unwrap();
        let card = library.introduction.dataset.metrics[0].clone();
        library.introduction.dataset.metrics = vec![card.clone(); 60];

        for width in [90, 100, 140] {
            let lines = compose_page(
                &library,
                PageId::Introduction,
                &ViewState::default(),
                &ThemePresets::dark(),
                ComposeOptions {
                    width,
                    show_footer: false,
                },
            );
            let text = to_plain_text(&lines);
            assert!(text.contains("Cryptocurrency Tail-Risk Prediction"));
            // Too many to fit side by side, so every card gets its own rows
            let stacked = text
                .lines()
                .filter(|line| line.trim() == card.label)
                .count();
            assert_eq!(stacked, 60, "at width {}", width);
        }
    }

    #[test]
    fn test_feature_headings_use_keycaps() {
        assert_eq!(keycap(1), "1\u{fe0f}\u{20e3}");
        assert_eq!(keycap(10), "🔟");
        assert_eq!(keycap(11), "11.");

        let mut session = Session::default();
        session.cycle_tab(1);
        let text = compose(PageId::Introduction, &session.view, 120);
        assert!(text.contains("1\u{fe0f}\u{20e3} Return Features (8 features)"));
        assert!(text.contains("5\u{fe0f}\u{20e3} Price Features (4 features)"));
        assert!(!text.contains("1. Return Features"));
    }

    #[test]
    fn test_broken_image_does_not_abort_page() {
        let mut library = ContentLibrary::embedded().unwrap();
        library.introduction.purpose.image.url = String::new();
        let lines = compose_page(
            &library,
            PageId::Introduction,
            &ViewState::default(),
            &ThemePresets::light(),
            ComposeOptions {
                width: 120,
                show_footer: false,
            },
        );
        let text = to_plain_text(&lines);
        assert!(text.contains("✗ image unavailable"));
        assert!(text.contains("Example: Bitcoin 30-day volatility over time"));
        // Everything after the image still renders
        assert!(text.contains("Confusion Matrix: Best Model (Ensemble)"));
    }

    #[test]
    fn test_timeline_boundaries_line_up() {
        let library = ContentLibrary::embedded().unwrap();
        let lines = timeline_lines(&library.introduction.dataset.splits.splits);
        assert!(lines[0].starts_with("├─── Train Set (50%) ───┼"));
        assert!(lines[0].ends_with('┤'));
        assert!(lines[1].starts_with("2021-07-12"));
        assert!(lines[1].ends_with("2025-04-14"));

        let bar: Vec<char> = lines[0].chars().collect();
        let second = lines[1].find("2022-09-10").unwrap();
        assert_eq!(bar[second], '┼');
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(5.0), "5");
        assert_eq!(format_pct(50.5), "50.5");
    }
}
