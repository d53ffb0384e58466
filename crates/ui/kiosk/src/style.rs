//! Semantic color roles for the kiosk.
//!
//! Widgets ask for roles (`theme.roles.danger`) instead of concrete colors so
//! the whole UI follows a theme switch. The invalid-field border uses
//! `danger`, the focused border `primary`, resting borders `muted`.

use ratatui::style::{Color, Style};

use crate::cli::ThemeChoice;

/// A mapping from semantic roles to colors for a given theme.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RoleColors {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtle_text: Color,
    pub inverted_text: Color,
    pub selection: Color,

    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub muted: Color,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub name: String,
    pub roles: RoleColors,
}

impl Theme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => default_dark_theme(),
            ThemeChoice::HighContrast => high_contrast_theme(),
        }
    }

    /// Style for text selected via select-on-focus.
    pub fn selection_style(&self) -> Style {
        Style::default().fg(self.roles.inverted_text).bg(self.roles.selection)
    }
}

/// Default dark theme with a warm accent.
pub fn default_dark_theme() -> Theme {
    Theme {
        name: "Default Dark".to_string(),
        roles: RoleColors {
            background: Color::Rgb(20, 20, 26),
            surface: Color::Rgb(28, 28, 34),
            text: Color::Rgb(220, 220, 220),
            subtle_text: Color::Rgb(130, 130, 130),
            inverted_text: Color::Rgb(0, 0, 0),
            selection: Color::Rgb(58, 91, 156),

            primary: Color::Rgb(255, 154, 79),
            accent: Color::Rgb(99, 205, 218),
            success: Color::Rgb(102, 187, 106),
            warning: Color::Rgb(255, 214, 102),
            danger: Color::Rgb(239, 83, 80),
            info: Color::Rgb(144, 202, 249),
            muted: Color::Rgb(120, 120, 128),
        },
    }
}

/// Higher-contrast variant for demos or low-quality projectors.
pub fn high_contrast_theme() -> Theme {
    Theme {
        name: "High Contrast".to_string(),
        roles: RoleColors {
            background: Color::Rgb(0, 0, 0),
            surface: Color::Rgb(15, 15, 15),
            text: Color::Rgb(250, 250, 250),
            subtle_text: Color::Rgb(200, 200, 200),
            inverted_text: Color::Rgb(0, 0, 0),
            selection: Color::Rgb(70, 70, 255),

            primary: Color::Rgb(255, 200, 0),
            accent: Color::Rgb(0, 220, 255),
            success: Color::Rgb(0, 255, 100),
            warning: Color::Rgb(255, 180, 0),
            danger: Color::Rgb(255, 70, 70),
            info: Color::Rgb(130, 180, 255),
            muted: Color::Rgb(140, 140, 140),
        },
    }
}
