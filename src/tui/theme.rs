//! Centralized theme and color scheme for the results dashboard.

use crate::scoring::{Impact, MaturityLevel};
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the dashboard.
/// Provides semantic colors for the different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Score colors
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub goal: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            high: Color::Green,
            medium: Color::Yellow,
            low: Color::Red,
            goal: Color::DarkGray,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            high: Color::Rgb(0, 128, 0),
            medium: Color::Rgb(180, 140, 0),
            low: Color::Rgb(200, 0, 0),
            goal: Color::Rgb(150, 150, 150),

            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            high: Color::LightGreen,
            medium: Color::LightYellow,
            low: Color::LightRed,
            goal: Color::White,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(50, 50, 80),
        }
    }

    /// Color for a maturity tier
    #[must_use]
    pub const fn maturity_color(&self, level: MaturityLevel) -> Color {
        match level {
            MaturityLevel::High => self.high,
            MaturityLevel::Medium => self.medium,
            MaturityLevel::Low => self.low,
        }
    }

    /// Color for a category score relative to its goal
    #[must_use]
    pub fn score_color(&self, score: f64, goal: f64) -> Color {
        if score >= goal {
            self.high
        } else if goal - score <= 3.0 {
            self.medium
        } else {
            self.low
        }
    }

    /// Color for a recommendation impact badge
    #[must_use]
    pub const fn impact_color(&self, impact: Impact) -> Color {
        match impact {
            Impact::High => self.low,
            Impact::Medium => self.medium,
            Impact::Low => self.muted,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style, highlighted when the pane has focus
    pub fn border(focused: bool) -> Style {
        let scheme = colors();
        Style::default().fg(if focused {
            scheme.border_focused
        } else {
            scheme.border
        })
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

/// Render `[key]desc` pairs for the footer.
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
