use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Brand colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),      // Blue
            accent: ColorSpec::rgb(255, 159, 196),       // Magenta
            banner: ColorSpec::rgb(255, 159, 196),       // Magenta
            text: ColorSpec::rgb(169, 177, 214),         // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),   // Comment
            success: ColorSpec::rgb(158, 206, 106),      // Green
            warning: ColorSpec::rgb(255, 202, 40),       // Yellow
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(117, 121, 148),
            highlight_bg: ColorSpec::rgb(125, 207, 255),
            highlight_fg: ColorSpec::rgb(26, 27, 38),    // Background
            footer_search: ColorSpec::rgb(125, 207, 255),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231),      // Iris
            accent: ColorSpec::rgb(235, 188, 186),       // Rose
            banner: ColorSpec::rgb(235, 111, 146),       // Love
            text: ColorSpec::rgb(224, 222, 244),
            text_muted: ColorSpec::rgb(110, 106, 134),
            success: ColorSpec::rgb(156, 207, 216),      // Foam
            warning: ColorSpec::rgb(246, 193, 119),      // Gold
            border_active: ColorSpec::rgb(196, 167, 231),
            border_normal: ColorSpec::rgb(110, 106, 134),
            highlight_bg: ColorSpec::rgb(196, 167, 231),
            highlight_fg: ColorSpec::rgb(25, 23, 36),
            footer_search: ColorSpec::rgb(156, 207, 216),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),
            accent: ColorSpec::rgb(215, 130, 126),
            banner: ColorSpec::rgb(180, 99, 122),
            text: ColorSpec::rgb(87, 82, 121),
            text_muted: ColorSpec::rgb(152, 147, 165),
            success: ColorSpec::rgb(40, 105, 131),
            warning: ColorSpec::rgb(234, 157, 52),
            border_active: ColorSpec::rgb(144, 122, 169),
            border_normal: ColorSpec::rgb(152, 147, 165),
            highlight_bg: ColorSpec::rgb(144, 122, 169),
            highlight_fg: ColorSpec::rgb(250, 244, 237),
            footer_search: ColorSpec::rgb(86, 148, 159),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),      // Purple
            accent: ColorSpec::rgb(255, 121, 198),       // Pink
            banner: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: ColorSpec::rgb(98, 114, 164),    // Comment
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(241, 250, 140),
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(98, 114, 164),
            highlight_bg: ColorSpec::rgb(189, 147, 249),
            highlight_fg: ColorSpec::rgb(40, 42, 54),
            footer_search: ColorSpec::rgb(139, 233, 253),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::rgb(203, 166, 247),      // Mauve
            accent: ColorSpec::rgb(245, 194, 231),       // Pink
            banner: ColorSpec::rgb(243, 139, 168),       // Red
            text: ColorSpec::rgb(205, 214, 244),
            text_muted: ColorSpec::rgb(108, 112, 134),   // Overlay0
            success: ColorSpec::rgb(166, 227, 161),
            warning: ColorSpec::rgb(249, 226, 175),
            border_active: ColorSpec::rgb(203, 166, 247),
            border_normal: ColorSpec::rgb(108, 112, 134),
            highlight_bg: ColorSpec::rgb(203, 166, 247),
            highlight_fg: ColorSpec::rgb(30, 30, 46),
            footer_search: ColorSpec::rgb(137, 180, 250),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
        ]
    }

    /// Theme following this one in `available_themes`, wrapping around.
    ///
    pub fn next(&self) -> Self {
        let names = Self::available_themes();
        let index = names.iter().position(|n| *n == self.name).map_or(0, |i| (i + 1) % names.len());
        Self::from_name(&names[index]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn next_cycles_through_all_themes() {
        let mut theme = Theme::default();
        let count = Theme::available_themes().len();
        for _ in 0..count {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
