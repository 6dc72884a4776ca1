//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xe6, 0xe6, 0xe6),
        grey: Color::Rgb(0x62, 0x72, 0xa4),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
        border: Color::Rgb(0x62, 0x72, 0xa4),
        indicator_active: Color::Rgb(0xff, 0x79, 0xc6),
        indicator_inactive: Color::Rgb(0x62, 0x72, 0xa4),
        control: Color::Rgb(0x8b, 0xe9, 0xfd),
    }
}
