use ratatui::style::Color;

/// Runtime theme for the carousel screen
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub border: Color,
    pub indicator_active: Color,
    pub indicator_inactive: Color,
    pub control: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            border: Color::Rgb(0x7c, 0x6f, 0x64),
            indicator_active: Color::Rgb(0xd8, 0xa6, 0x57),
            indicator_inactive: Color::Rgb(0x7c, 0x6f, 0x64),
            control: Color::Rgb(0x7d, 0xae, 0xa3),
        }
    }
}
