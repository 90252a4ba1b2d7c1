//! Color palette for the TUI.

use ratatui::style::Color;

/// Palette shared by every view. Monochrome base with a few signal colors,
/// matching the product's blueprint look.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand marks and selected items.
    pub brand: Color,
    /// Body text.
    pub text: Color,
    /// Metadata, separators, help lines.
    pub muted: Color,
    /// Interactive hints and the chat user color.
    pub accent: Color,
    /// Success lines and the online indicator.
    pub success: Color,
    /// Warnings and the unlocked-door indicator.
    pub warning: Color,
    /// Panel borders.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Color::White,
            text: Color::Gray,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
        }
    }
}
