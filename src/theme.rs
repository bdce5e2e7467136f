//! Color theme system for apix
//!
//! Provides 4 retro-inspired color schemes that can be selected via CLI flag.

use ratatui::style::Color;
use std::fmt;

/// Available color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Nord-inspired theme (default) - modern muted colors
    Nord,
    /// Classic DOS Blue - bright white on blue background
    DosBlue,
    /// Amber CRT - orange/amber text on black (retro terminal)
    AmberCrt,
    /// Green Phosphor - green text on black (classic terminal)
    GreenPhosphor,
}

impl Theme {
    /// Parse theme name from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "nord" => Ok(Theme::Nord),
            "dos" | "dosblue" | "dos-blue" => Ok(Theme::DosBlue),
            "amber" | "ambercrt" | "amber-crt" => Ok(Theme::AmberCrt),
            "green" | "greenphosphor" | "green-phosphor" => Ok(Theme::GreenPhosphor),
            _ => Err(format!(
                "Unknown theme '{}'. Available: nord, dos-blue, amber-crt, green-phosphor",
                s
            )),
        }
    }

    /// Get the color scheme for this theme
    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Nord => ColorScheme::nord(),
            Theme::DosBlue => ColorScheme::dos_blue(),
            Theme::AmberCrt => ColorScheme::amber_crt(),
            Theme::GreenPhosphor => ColorScheme::green_phosphor(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Nord
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Nord => write!(f, "nord"),
            Theme::DosBlue => write!(f, "dos-blue"),
            Theme::AmberCrt => write!(f, "amber-crt"),
            Theme::GreenPhosphor => write!(f, "green-phosphor"),
        }
    }
}

/// Color scheme for a theme
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Primary text color
    pub text: Color,
    /// Dimmed text color (provider ids, hints)
    pub text_dim: Color,
    /// Border color for active elements (open panel, enabled button)
    pub focus_border: Color,
    /// Border color for inactive elements
    pub unfocused_border: Color,
    /// Background tint for the open provider panel
    pub background_focused: Color,
    /// Background for the selected provider row
    pub selection_bg: Color,
    /// Foreground for the selected provider row
    pub selection_fg: Color,
    /// Version badge color on the details screen
    pub badge: Color,
    /// Toast success message color
    pub toast_success: Color,
    /// Toast error / empty-state color
    pub toast_error: Color,
    /// Debug panel indicator color
    pub debug_indicator: Color,
}

impl ColorScheme {
    /// Nord theme (default) - Modern muted colors
    pub fn nord() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            focus_border: Color::Yellow,
            unfocused_border: Color::Gray,
            background_focused: Color::Rgb(40, 40, 40),
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            badge: Color::Cyan,
            toast_success: Color::Green,
            toast_error: Color::Red,
            debug_indicator: Color::Magenta,
        }
    }

    /// DOS Blue theme - Classic DOS aesthetic
    pub fn dos_blue() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::LightBlue,
            focus_border: Color::Yellow,
            unfocused_border: Color::Cyan,
            background_focused: Color::Rgb(20, 20, 255),
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            badge: Color::LightCyan,
            toast_success: Color::LightGreen,
            toast_error: Color::LightRed,
            debug_indicator: Color::LightMagenta,
        }
    }

    /// Amber CRT theme - Retro terminal
    pub fn amber_crt() -> Self {
        let amber = Color::Rgb(255, 176, 0);
        let amber_bright = Color::Rgb(255, 200, 100);
        let amber_dim = Color::Rgb(180, 120, 0);

        Self {
            text: amber,
            text_dim: amber_dim,
            focus_border: amber_bright,
            unfocused_border: amber_dim,
            background_focused: Color::Rgb(30, 20, 0),
            selection_bg: amber,
            selection_fg: Color::Black,
            badge: amber_bright,
            toast_success: Color::Rgb(100, 255, 100),
            toast_error: Color::Red,
            debug_indicator: Color::Rgb(255, 100, 255),
        }
    }

    /// Green Phosphor theme - Classic green screen
    pub fn green_phosphor() -> Self {
        let green = Color::Rgb(0, 255, 0);
        let green_dim = Color::Rgb(0, 180, 0);
        let green_bright = Color::Rgb(100, 255, 100);

        Self {
            text: green,
            text_dim: green_dim,
            focus_border: green_bright,
            unfocused_border: green_dim,
            background_focused: Color::Rgb(0, 25, 0),
            selection_bg: green,
            selection_fg: Color::Black,
            badge: green_bright,
            toast_success: green_bright,
            toast_error: Color::Red,
            debug_indicator: Color::Cyan,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::nord()
    }
}
