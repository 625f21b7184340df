//! Plain-text tables and side-by-side columns
//!
//! Tables are laid out as lines rather than ratatui `Table` widgets so a
//! whole page stays one scrollable paragraph and renders headlessly.

use super::markup::line_width;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = " │ ";

/// Styles used when laying out a table
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub header: Style,
    pub cell: Style,
    pub label: Style,
    pub rule: Style,
}

#[derive(Debug, Clone, Default)]
pub struct TextTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Style the first column as row labels
    label_column: bool,
}

impl TextTable {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            label_column: false,
        }
    }

    pub fn with_label_column(mut self) -> Self {
        self.label_column = true;
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        self.rows.extend(rows);
        self
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    /// Columns whose every body cell reads as a number are right-aligned
    fn numeric_columns(&self) -> Vec<bool> {
        (0..self.column_count())
            .map(|col| {
                !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| row.get(col).is_some_and(|cell| is_numeric(cell)))
            })
            .collect()
    }

    pub fn render(&self, style: &TableStyle) -> Vec<Line<'static>> {
        let widths = self.column_widths();
        let numeric = self.numeric_columns();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header_spans = self.header.iter().enumerate().map(|(i, cell)| {
            Span::styled(pad(cell, widths[i], numeric[i]), style.header)
        });
        lines.push(join_cells(header_spans, style.rule));

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        lines.push(Line::from(Span::styled(rule.join("─┼─"), style.rule)));

        for row in &self.rows {
            let spans = (0..widths.len()).map(|i| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let cell_style = if self.label_column && i == 0 {
                    style.label
                } else {
                    style.cell
                };
                Span::styled(pad(cell, widths[i], numeric[i]), cell_style)
            });
            lines.push(join_cells(spans, style.rule));
        }

        lines
    }
}

fn join_cells(cells: impl Iterator<Item = Span<'static>>, rule: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, rule));
        }
        spans.push(cell);
    }
    Line::from(spans)
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

pub fn is_numeric(cell: &str) -> bool {
    let cleaned = cell.trim().trim_end_matches('%').replace(',', "");
    !cleaned.is_empty() && cleaned.parse::<f64>().is_ok()
}

/// Cut a line down to at most `width` columns
pub fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
    if line_width(&line) <= width {
        return line;
    }
    let mut used = 0;
    let mut spans = Vec::new();
    for span in line.spans {
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            kept.push(ch);
        }
        if !kept.is_empty() {
            spans.push(Span::styled(kept, span.style));
        }
        if used >= width {
            break;
        }
    }
    Line::from(spans)
}

/// Lay several blocks of lines next to each other.
///
/// Each block is clipped or padded to `column_width`; shorter blocks are
/// padded with blank rows.
pub fn side_by_side(
    blocks: Vec<Vec<Line<'static>>>,
    column_width: usize,
    gap: usize,
) -> Vec<Line<'static>> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let count = blocks.len();
    let mut iters: Vec<_> = blocks.into_iter().map(|b| b.into_iter()).collect();
    let mut lines = Vec::with_capacity(height);

    for _ in 0..height {
        let mut spans = Vec::new();
        for (i, iter) in iters.iter_mut().enumerate() {
            let cell = truncate_line(iter.next().unwrap_or_default(), column_width);
            let fill = column_width - line_width(&cell);
            spans.extend(cell.spans);
            if i + 1 < count {
                spans.push(Span::raw(" ".repeat(fill + gap)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::tui::markup::plain_text;

    fn style() -> TableStyle {
        TableStyle {
            header: Style::default(),
            cell: Style::default(),
            label: Style::default(),
            rule: Style::default(),
        }
    }

    #[test]
    fn test_table_alignment() {
        let table = TextTable::new(["Model", "ROC-AUC"]).rows(vec![
            vec!["XGBoost".to_string(), "0.658".to_string()],
            vec!["LSTM Neural Network".to_string(), "0.682".to_string()],
        ]);
        let lines: Vec<String> = table.render(&style()).iter().map(plain_text).collect();

        assert_eq!(lines[0], "Model               │ ROC-AUC");
        assert_eq!(lines[2], "XGBoost             │   0.658");
        assert_eq!(lines[3], "LSTM Neural Network │   0.682");
        assert_eq!(lines[1].width(), lines[3].width());
    }

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric("61.3%"));
        assert!(is_numeric("76,243"));
        assert!(is_numeric("27850"));
        assert!(!is_numeric("5min"));
        assert!(!is_numeric("✓ Complete"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_truncate_line() {
        let line = Line::from(vec![Span::raw("abc"), Span::raw("def")]);
        assert_eq!(plain_text(&truncate_line(line, 4)), "abcd");
    }

    #[test]
    fn test_side_by_side_pads_columns() {
        let left = vec![Line::from("ab"), Line::from("abcdef")];
        let right = vec![Line::from("x")];
        let lines: Vec<String> = side_by_side(vec![left, right], 4, 1)
            .iter()
            .map(plain_text)
            .collect();
        assert_eq!(lines, vec!["ab   x", "abcd "]);
    }
}
