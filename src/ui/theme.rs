//! Marquee-lights theme
//!
//! Color palette and style helpers for the TUI: warm bulb amber on a
//! theater-curtain dark background.

use ratatui::style::{Color, Modifier, Style};

/// Marquee color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0d0a0b (dark house)
    pub const BACKGROUND: Color = Color::Rgb(0x0d, 0x0a, 0x0b);

    /// Primary: #ffc233 (bulb amber)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xc2, 0x33);

    /// Secondary: #e8455a (curtain red)
    pub const SECONDARY: Color = Color::Rgb(0xe8, 0x45, 0x5a);

    /// Accent: #7fd1ff (screen glow)
    pub const ACCENT: Color = Color::Rgb(0x7f, 0xd1, 0xff);

    /// Text: #ece6dc (ticket paper)
    pub const TEXT: Color = Color::Rgb(0xec, 0xe6, 0xdc);

    /// Dim: #6b6060
    pub const DIM: Color = Color::Rgb(0x6b, 0x60, 0x60);

    /// Error: #ff4d4d
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x4d);

    /// Panels and popups
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1c, 0x16, 0x17);

    /// Unfocused border (dim amber)
    pub const BORDER: Color = Color::Rgb(0x8a, 0x68, 0x1c);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Inverted amber, for the selected row
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn loading() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    /// Year and other metadata
    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::DIM).add_modifier(Modifier::BOLD)
    }

    pub fn popup() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// WCAG relative luminance of an sRGB color
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

/// Contrast ratio between two colors, from 1 (identical) to 21
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
