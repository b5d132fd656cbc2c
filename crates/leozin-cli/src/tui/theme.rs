//! Terminal palettes

use ratatui::style::Color;

/// Colors used when printing messages
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    pub text_color: Color,
    pub accent_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    pub link_color: Color,

    // Message role colors
    pub user_msg_color: Color,
    pub assistant_msg_color: Color,
    pub system_msg_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "leozin",
            text_color: Color::Rgb(230, 230, 230),
            accent_color: Color::Rgb(96, 165, 250),
            dim_color: Color::DarkGray,
            border_color: Color::Rgb(34, 211, 238),
            link_color: Color::Rgb(125, 211, 252),
            user_msg_color: Color::Rgb(74, 222, 128),
            assistant_msg_color: Color::Rgb(96, 165, 250),
            system_msg_color: Color::Rgb(250, 204, 21),
        }
    }
}

impl Theme {
    /// Black/white/yellow palette for the high-contrast preference
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            text_color: Color::White,
            accent_color: Color::LightYellow,
            dim_color: Color::Gray,
            border_color: Color::White,
            link_color: Color::LightYellow,
            user_msg_color: Color::White,
            assistant_msg_color: Color::LightYellow,
            system_msg_color: Color::LightYellow,
        }
    }

    pub fn for_contrast(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::default()
        }
    }
}
