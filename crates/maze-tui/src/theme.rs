use clap::ValueEnum;
use crossterm::style::Color;

/// Theme selector exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::HighContrast => Theme::high_contrast(),
        }
    }

    /// Next theme in the in-game cycle order
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::HighContrast,
            ThemeKind::HighContrast => ThemeKind::Dark,
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Wall cell color
    pub wall: Color,
    /// Open floor cell color
    pub floor: Color,
    /// Start cell color
    pub start: Color,
    /// Goal cell color
    pub goal: Color,
    /// Player marker color
    pub player: Color,
    /// Win banner color
    pub success: Color,
    /// Level label / info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            wall: Color::Rgb { r: 60, g: 65, b: 85 },
            floor: Color::Rgb { r: 235, g: 235, b: 242 },
            start: Color::Rgb { r: 80, g: 200, b: 110 },
            goal: Color::Rgb { r: 225, g: 80, b: 80 },
            player: Color::Rgb { r: 40, g: 110, b: 255 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            wall: Color::Rgb { r: 50, g: 50, b: 65 },
            floor: Color::Rgb { r: 255, g: 255, b: 255 },
            start: Color::Rgb { r: 40, g: 160, b: 60 },
            goal: Color::Rgb { r: 210, g: 50, b: 50 },
            player: Color::Rgb { r: 30, g: 100, b: 200 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            wall: Color::White,
            floor: Color::Black,
            start: Color::Green,
            goal: Color::Red,
            player: Color::Cyan,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
