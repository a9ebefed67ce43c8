//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and common styles used by the
//! screens. Keeping the palette here keeps the screens visually consistent
//! and makes later theming straightforward.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Magenta;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Cyan;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Morning routine accent
    pub const MORNING: Color = Color::Yellow;

    /// Evening routine accent
    pub const EVENING: Color = Color::Blue;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Magenta;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Background for the highlighted list row
    pub const SELECTED_BG: Color = Color::Magenta;

    /// Foreground for the highlighted list row
    pub const SELECTED_FG: Color = Color::Black;
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Screen title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted list row style
    pub fn highlight() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted helper text style
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Keybinding hint style for the nav bar
    pub fn key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}
