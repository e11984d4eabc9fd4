use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub card_title: Color,
    pub schedule: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub spots_open: Color,
    pub spots_full: Color,
    pub muted: Color,
    pub status_bar: Color,
    pub section: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            card_title: Color::Cyan,
            schedule: Color::Yellow,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            spots_open: Color::Green,
            spots_full: Color::Red,
            muted: Color::DarkGray,
            status_bar: Color::White,
            section: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            card_title: Color::Rgb(142, 192, 124),
            schedule: Color::Rgb(254, 128, 25),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            spots_open: Color::Rgb(184, 187, 38),
            spots_full: Color::Rgb(251, 73, 52),
            muted: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            section: Color::Rgb(254, 128, 25),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            card_title: Color::Rgb(129, 161, 193),
            schedule: Color::Rgb(235, 203, 139),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            spots_open: Color::Rgb(163, 190, 140),
            spots_full: Color::Rgb(191, 97, 106),
            muted: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            section: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            card_title: Color::Rgb(255, 121, 198),
            schedule: Color::Rgb(241, 250, 140),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(248, 248, 242),
            spots_open: Color::Rgb(80, 250, 123),
            spots_full: Color::Rgb(255, 85, 85),
            muted: Color::Rgb(98, 114, 164),
            status_bar: Color::Rgb(248, 248, 242),
            section: Color::Rgb(241, 250, 140),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            title: Color::Rgb(38, 139, 210),
            card_title: Color::Rgb(42, 161, 152),
            schedule: Color::Rgb(181, 137, 0),
            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(147, 161, 161),
            spots_open: Color::Rgb(133, 153, 0),
            spots_full: Color::Rgb(220, 50, 47),
            muted: Color::Rgb(88, 110, 117),
            status_bar: Color::Rgb(147, 161, 161),
            section: Color::Rgb(181, 137, 0),
            error: Color::Rgb(220, 50, 47),
            success: Color::Rgb(133, 153, 0),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            title: Color::Rgb(102, 217, 239),
            card_title: Color::Rgb(249, 38, 114),
            schedule: Color::Rgb(230, 219, 116),
            selected_bg: Color::Rgb(73, 72, 62),
            selected_fg: Color::Rgb(248, 248, 240),
            spots_open: Color::Rgb(166, 226, 46),
            spots_full: Color::Rgb(249, 38, 114),
            muted: Color::Rgb(117, 113, 94),
            status_bar: Color::Rgb(248, 248, 240),
            section: Color::Rgb(230, 219, 116),
            error: Color::Rgb(249, 38, 114),
            success: Color::Rgb(166, 226, 46),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "solarized-dark" | "solarized" => Self::solarized_dark(),
            "monokai" => Self::monokai(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
