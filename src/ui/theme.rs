//! Midnight theme for FlickTUI
//!
//! Dark zinc palette with a crimson accent, matching the catalog site the
//! client talks to.

use ratatui::style::{Color, Modifier, Style};

/// Midnight color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #171717 (near-black)
    pub const BACKGROUND: Color = Color::Rgb(0x17, 0x17, 0x17);

    /// Panels and cards: #27272a
    pub const SURFACE: Color = Color::Rgb(0x27, 0x27, 0x2a);

    /// Hovered card surface: #3f3f46
    pub const SURFACE_HOVER: Color = Color::Rgb(0x3f, 0x3f, 0x46);

    /// Primary accent: #e11d48 (crimson)
    pub const ACCENT: Color = Color::Rgb(0xe1, 0x1d, 0x48);

    /// Text: #fafafa (near-white)
    pub const TEXT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);

    /// Muted text: #a1a1aa
    pub const DIM: Color = Color::Rgb(0xa1, 0xa1, 0xaa);

    /// Rating stars and badges: #facc15 (amber)
    pub const STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);

    /// Success: #22c55e
    pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);

    /// Warning: #f59e0b
    pub const WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

    /// Error: #ef4444
    pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

    /// Border: #52525b
    pub const BORDER: Color = Color::Rgb(0x52, 0x52, 0x5b);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Section labels and panel titles
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Crimson accent, for the active element
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Inverted selection (text on accent)
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Poster card body
    pub fn card() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    /// Hovered poster card body
    pub fn card_hover() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE_HOVER)
    }

    pub fn star() -> Style {
        Style::default().fg(Self::STAR)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::STAR)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::DIM).bg(Self::SURFACE)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance per WCAG 2.0
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, 1:1 through 21:1
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("palette colors are all RGB")
    }

    #[test]
    fn test_text_readable_on_background() {
        // WCAG AA normal text needs 4.5:1
        let ratio = contrast_ratio(rgb(Theme::TEXT), rgb(Theme::BACKGROUND));
        assert!(ratio >= 4.5, "got {:.2}:1", ratio);
    }

    #[test]
    fn test_text_readable_on_card_surfaces() {
        for surface in [Theme::SURFACE, Theme::SURFACE_HOVER] {
            let ratio = contrast_ratio(rgb(Theme::TEXT), rgb(surface));
            assert!(ratio >= 4.5, "got {:.2}:1", ratio);
        }
    }

    #[test]
    fn test_accent_readable_as_large_text() {
        // Large text threshold is 3:1
        let ratio = contrast_ratio(rgb(Theme::ACCENT), rgb(Theme::BACKGROUND));
        assert!(ratio >= 3.0, "got {:.2}:1", ratio);
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
        let ratio = contrast_ratio((100, 100, 100), (100, 100, 100));
        assert!((ratio - 1.0).abs() < 0.001);
    }
}
