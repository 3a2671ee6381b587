//! src/view/theme.rs
//! ============================================================================
//! # Theme Palettes: Dark (Catppuccin Mocha) and Light (Catppuccin Latte)
//!
//! Colors are from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin
//! The active palette is picked per frame from the persisted theme choice.

use ratatui::style::{Color, Modifier, Style};

use crate::config::config::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub directory: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(30, 30, 46),  // Base
    surface: Color::Rgb(69, 71, 90),     // Surface1
    foreground: Color::Rgb(205, 214, 244), // Text
    muted: Color::Rgb(127, 132, 156),    // Overlay1
    accent: Color::Rgb(203, 166, 247),   // Mauve
    directory: Color::Rgb(137, 220, 235), // Sky
    success: Color::Rgb(166, 227, 161),  // Green
    warning: Color::Rgb(249, 226, 175),  // Yellow
    error: Color::Rgb(243, 139, 168),    // Red
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(239, 241, 245), // Base
    surface: Color::Rgb(188, 192, 204),    // Surface1
    foreground: Color::Rgb(76, 79, 105),   // Text
    muted: Color::Rgb(140, 143, 161),      // Overlay1
    accent: Color::Rgb(136, 57, 239),      // Mauve
    directory: Color::Rgb(4, 165, 229),    // Sky
    success: Color::Rgb(64, 160, 43),      // Green
    warning: Color::Rgb(223, 142, 29),     // Yellow
    error: Color::Rgb(210, 15, 57),        // Red
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    /// Border style for the pane that owns the keyboard.
    pub fn focus_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }
}
