//! Dashboard colour themes
//!
//! Two built-in presets. `light` follows the palette of the project's web
//! dashboard (blue headers, grey subtitles, pale call-out boxes); `dark`
//! keeps the same accent on a dark terminal background.

use ratatui::style::Color;
use std::collections::HashMap;

/// Complete theme defining every colour the dashboard draws with
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // Panels
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub sidebar_background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub emphasis: Color,

    // Headings
    pub main_header: Color,
    pub section_header: Color,
    pub subheading: Color,

    // Selection
    pub selection_background: Color,
    pub selection_text: Color,

    // Call-outs
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Tables
    pub table_header: Color,
    pub table_rule: Color,
    pub metric_value: Color,
    pub metric_delta: Color,

    pub status_background: Color,
}

impl AppTheme {
    /// Replace the accent used for headers, focus borders and selection
    pub fn with_accent(&self, accent: Color) -> AppTheme {
        let mut theme = self.clone();
        theme.main_header = accent;
        theme.border_focused = accent;
        theme.info = accent;
        theme.selection_background = blend_colors(self.background, accent, 0.4);
        theme
    }
}

/// Parse "#rrggbb" into a colour
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn color_to_rgb_components(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black | Color::Reset => (0, 0, 0),
        Color::White => (255, 255, 255),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Cyan => (0, 205, 205),
        Color::Magenta => (205, 0, 205),
        _ => (127, 127, 127),
    }
}

/// Mix `other` into `base`; ratio 0.0 keeps base, 1.0 gives other
fn blend_colors(base: Color, other: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let (br, bg, bb) = color_to_rgb_components(base);
    let (or, og, ob) = color_to_rgb_components(other);
    let blend_component = |a: u8, b: u8| -> u8 {
        let value = (a as f32) * (1.0 - ratio) + (b as f32) * ratio;
        value.round().clamp(0.0, 255.0) as u8
    };

    Color::Rgb(
        blend_component(br, or),
        blend_component(bg, og),
        blend_component(bb, ob),
    )
}

/// Built-in theme presets
pub struct ThemePresets;

impl ThemePresets {
    /// Get all available built-in themes
    pub fn all() -> HashMap<String, AppTheme> {
        let mut themes = HashMap::new();
        themes.insert("dark".to_string(), Self::dark());
        themes.insert("light".to_string(), Self::light());
        themes
    }

    /// Look up a preset, falling back to dark for unknown names
    pub fn get(name: &str) -> AppTheme {
        match Self::all().remove(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown theme '{}', using dark", name);
                Self::dark()
            }
        }
    }

    pub fn dark() -> AppTheme {
        let background = Color::Rgb(0x12, 0x14, 0x18);
        let accent = Color::Rgb(0x1f, 0x77, 0xb4);
        let text = Color::Rgb(0xe6, 0xe6, 0xe6);
        AppTheme {
            name: "dark".to_string(),
            border: Color::Rgb(0x44, 0x48, 0x50),
            border_focused: Color::Rgb(0x4f, 0xa3, 0xe0),
            background,
            sidebar_background: Color::Rgb(0x1a, 0x1d, 0x23),
            text_primary: text,
            text_secondary: Color::Rgb(0x99, 0x99, 0x99),
            text_disabled: blend_colors(text, background, 0.6),
            emphasis: Color::Rgb(0xff, 0xff, 0xff),
            main_header: Color::Rgb(0x4f, 0xa3, 0xe0),
            section_header: Color::Rgb(0x8e, 0xc5, 0xf0),
            subheading: Color::Rgb(0xd0, 0xd4, 0xda),
            selection_background: blend_colors(background, accent, 0.55),
            selection_text: Color::Rgb(0xff, 0xff, 0xff),
            info: Color::Rgb(0x5d, 0xad, 0xe2),
            success: Color::Rgb(0x4c, 0xc3, 0x6b),
            warning: Color::Rgb(0xf0, 0xc0, 0x4c),
            error: Color::Rgb(0xe0, 0x5a, 0x5a),
            table_header: Color::Rgb(0x8e, 0xc5, 0xf0),
            table_rule: Color::Rgb(0x44, 0x48, 0x50),
            metric_value: Color::Rgb(0xff, 0xff, 0xff),
            metric_delta: Color::Rgb(0x4c, 0xc3, 0x6b),
            status_background: Color::Rgb(0x1a, 0x1d, 0x23),
        }
    }

    /// Palette of the web dashboard: #1f77b4 header, #2c3e50 sections,
    /// #666 subtitles, #f0f2f6 info boxes
    pub fn light() -> AppTheme {
        let background = Color::Rgb(0xff, 0xff, 0xff);
        let accent = Color::Rgb(0x1f, 0x77, 0xb4);
        let text = Color::Rgb(0x26, 0x27, 0x30);
        AppTheme {
            name: "light".to_string(),
            border: Color::Rgb(0xcc, 0xcc, 0xcc),
            border_focused: accent,
            background,
            sidebar_background: Color::Rgb(0xf0, 0xf2, 0xf6),
            text_primary: text,
            text_secondary: Color::Rgb(0x66, 0x66, 0x66),
            text_disabled: blend_colors(text, background, 0.6),
            emphasis: Color::Rgb(0x00, 0x00, 0x00),
            main_header: accent,
            section_header: Color::Rgb(0x2c, 0x3e, 0x50),
            subheading: Color::Rgb(0x2c, 0x3e, 0x50),
            selection_background: blend_colors(background, accent, 0.25),
            selection_text: Color::Rgb(0x00, 0x00, 0x00),
            info: accent,
            success: Color::Rgb(0x21, 0x87, 0x3a),
            warning: Color::Rgb(0x9a, 0x6b, 0x00),
            error: Color::Rgb(0xc0, 0x39, 0x2b),
            table_header: Color::Rgb(0x2c, 0x3e, 0x50),
            table_rule: Color::Rgb(0xcc, 0xcc, 0xcc),
            metric_value: text,
            metric_delta: Color::Rgb(0x21, 0x87, 0x3a),
            status_background: Color::Rgb(0xf0, 0xf2, 0xf6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#1f77b4"), Some(Color::Rgb(0x1f, 0x77, 0xb4)));
        assert_eq!(parse_hex("1f77b4"), None);
        assert_eq!(parse_hex("#1f77"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_light_theme_uses_page_palette() {
        let light = ThemePresets::light();
        assert_eq!(Some(light.main_header), parse_hex("#1f77b4"));
        assert_eq!(Some(light.section_header), parse_hex("#2c3e50"));
        assert_eq!(Some(light.text_secondary), parse_hex("#666666"));
        assert_eq!(Some(light.sidebar_background), parse_hex("#f0f2f6"));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(ThemePresets::get("neon").name, "dark");
        assert_eq!(ThemePresets::get("light").name, "light");
    }

    #[test]
    fn test_with_accent() {
        let accent = Color::Rgb(0xaa, 0x00, 0x00);
        let theme = ThemePresets::dark().with_accent(accent);
        assert_eq!(theme.main_header, accent);
        assert_eq!(theme.border_focused, accent);
        assert_ne!(theme.selection_background, ThemePresets::dark().selection_background);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend_colors(a, b, 0.0), a);
        assert_eq!(blend_colors(a, b, 1.0), b);
        assert_eq!(blend_colors(a, b, 0.5), Color::Rgb(100, 50, 25));
    }
}
