//! Light and dark palettes for the feed screen
//!
//! Every color the UI uses comes from the active [`Theme`], so flipping
//! [`ThemeMode`] restyles the whole screen on the next draw. The mode is
//! not persisted; the app starts in light mode.

use ratatui::style::Color;

const NAVY: Color = Color::Rgb(0x07, 0x17, 0x39);
const STEEL: Color = Color::Rgb(0xa4, 0xb5, 0xc4);
const MIST: Color = Color::Rgb(0xcd, 0xd5, 0xdb);
const SAND: Color = Color::Rgb(0xe3, 0xc3, 0x9d);
const SLATE: Color = Color::Rgb(0x22, 0x3a, 0x59);
const MIDNIGHT: Color = Color::Rgb(0x19, 0x19, 0x70);
const PARCHMENT: Color = Color::Rgb(0xe5, 0xe2, 0xd3);
const ALERT: Color = Color::Rgb(0xdb, 0x22, 0x2a);
const ROSE: Color = Color::Rgb(0xff, 0xc0, 0xcb);
const ERROR_RED: Color = Color::Rgb(0xd8, 0x00, 0x0c);
const SPINNER_CYAN: Color = Color::Rgb(0x00, 0xff, 0xff);

/// Presentational flag, flipped by the theme switch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::LIGHT,
            ThemeMode::Dark => Theme::DARK,
        }
    }
}

/// Concrete colors for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub heading: Color,
    pub form_bg: Color,
    pub input_bg: Color,
    pub input_fg: Color,
    pub card_bg: Color,
    pub card_title: Color,
    pub card_body: Color,
    pub list_caption: Color,
    pub empty: Color,
    pub banner_bg: Color,
    pub banner_fg: Color,
    pub spinner: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: STEEL,
        heading: NAVY,
        form_bg: MIST,
        input_bg: STEEL,
        input_fg: Color::White,
        card_bg: NAVY,
        card_title: SAND,
        card_body: MIST,
        list_caption: PARCHMENT,
        empty: ALERT,
        banner_bg: ROSE,
        banner_fg: ERROR_RED,
        spinner: SPINNER_CYAN,
    };

    pub const DARK: Theme = Theme {
        background: NAVY,
        heading: STEEL,
        form_bg: STEEL,
        input_bg: MIST,
        input_fg: Color::Black,
        card_bg: STEEL,
        card_title: MIDNIGHT,
        card_body: SLATE,
        list_caption: PARCHMENT,
        empty: ALERT,
        banner_bg: ROSE,
        banner_fg: ERROR_RED,
        spinner: SPINNER_CYAN,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mode = ThemeMode::Light;
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(mode.toggled().toggled().palette(), mode.palette());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::LIGHT, Theme::DARK);
        assert_ne!(Theme::LIGHT.background, Theme::DARK.background);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
