//! Light text markup for content prose
//!
//! Content text uses a tiny subset of Markdown: `###`/`####` headings,
//! `-` bullets, `1.` numbered items, ``` fences and inline `**bold**`.
//! This module turns it into wrapped, styled ratatui lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Styles the markup renderer needs
#[derive(Debug, Clone, Copy)]
pub struct MarkupStyle {
    pub text: Style,
    pub bold: Style,
    pub heading: Style,
    pub minor_heading: Style,
    pub code: Style,
}

/// Split `**bold**` runs into styled spans
pub fn parse_inline(text: &str, normal: Style, bold: Style) -> Vec<Span<'static>> {
    let mut parts: Vec<&str> = text.split("**").collect();
    // An unmatched marker stays literal
    let dangling = if parts.len() % 2 == 0 { parts.pop() } else { None };

    let mut spans = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        let style = if i % 2 == 1 { bold } else { normal };
        spans.push(Span::styled(part.to_string(), style));
    }
    if let Some(rest) = dangling {
        spans.push(Span::styled(format!("**{}", rest), normal));
    }
    spans
}

/// Display width of a line in terminal columns
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Greedy word wrap over styled spans.
///
/// `first_prefix` starts the first line, `next_prefix` every continuation
/// line (typically indentation under a bullet).
pub fn wrap_spans(
    spans: Vec<Span<'static>>,
    width: usize,
    first_prefix: Span<'static>,
    next_prefix: Span<'static>,
) -> Vec<Line<'static>> {
    // Group spans into words; a word can mix styles ("**bold**:")
    let mut words: Vec<Vec<Span<'static>>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for span in spans {
        let style = span.style;
        for (i, piece) in span.content.split(' ').enumerate() {
            if i > 0 && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut lines = Vec::new();
    let mut used = first_prefix.content.width();
    let mut line = vec![first_prefix];
    let mut line_has_words = false;

    for word in words {
        let word_width: usize = word.iter().map(|s| s.content.width()).sum();
        if line_has_words && used + 1 + word_width > width {
            lines.push(Line::from(std::mem::take(&mut line)));
            line.push(next_prefix.clone());
            used = next_prefix.content.width();
            line_has_words = false;
        }
        if line_has_words {
            line.push(Span::raw(" "));
            used += 1;
        }
        used += word_width;
        line.extend(word);
        line_has_words = true;
    }

    if line_has_words || lines.is_empty() {
        lines.push(Line::from(line));
    }
    lines
}

/// Render a block of markup text into wrapped lines
pub fn render_markup(text: &str, width: usize, style: &MarkupStyle) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_fence = false;

    for raw in text.lines() {
        if raw.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            lines.push(Line::from(Span::styled(raw.to_string(), style.code)));
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        let body = raw.trim_start();
        let pad = " ".repeat(indent);

        if body.is_empty() {
            lines.push(Line::default());
        } else if let Some(heading) = body.strip_prefix("#### ") {
            lines.push(Line::from(parse_inline(
                heading,
                style.minor_heading,
                style.minor_heading.add_modifier(Modifier::BOLD),
            )));
        } else if let Some(heading) = body.strip_prefix("### ") {
            lines.push(Line::from(parse_inline(
                heading,
                style.heading,
                style.heading.add_modifier(Modifier::BOLD),
            )));
        } else if body.trim_end_matches('#').is_empty() {
            // Bare "###" is a vertical spacer
            lines.push(Line::default());
        } else if let Some(item) = body.strip_prefix("- ") {
            let bullet = format!("{}• ", pad);
            let hang = " ".repeat(bullet.width());
            lines.extend(wrap_spans(
                parse_inline(item, style.text, style.bold),
                width,
                Span::styled(bullet, style.text),
                Span::raw(hang),
            ));
        } else if let Some((marker, item)) = numbered_item(body) {
            let label = format!("{}{} ", pad, marker);
            let hang = " ".repeat(label.width());
            lines.extend(wrap_spans(
                parse_inline(item, style.text, style.bold),
                width,
                Span::styled(label, style.text),
                Span::raw(hang),
            ));
        } else {
            lines.extend(wrap_spans(
                parse_inline(body, style.text, style.bold),
                width,
                Span::raw(pad.clone()),
                Span::raw(pad),
            ));
        }
    }

    lines
}

/// Split "12. rest" into ("12.", "rest")
fn numbered_item(body: &str) -> Option<(&str, &str)> {
    let (marker, rest) = body.split_once(' ')?;
    let digits = marker.strip_suffix('.')?;
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some((marker, rest))
    } else {
        None
    }
}

/// Concatenate the text of a line, dropping styles
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
