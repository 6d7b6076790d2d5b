//! Design System Theme Constants
//!
//! Centralized theme definitions for the search screen.
//!
//! # Color Philosophy
//! - Near-black slate background
//! - Off-white surfaces for the input and the button
//! - Semantic colors for warnings and errors only

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Theme};

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    /// Screen background
    /// Hex: #1E2022
    pub const BASE: Color = Color::from_rgb(
        0x1e as f32 / 255.0,
        0x20 as f32 / 255.0,
        0x22 as f32 / 255.0,
    );

    /// Input and button surfaces, header text
    /// Hex: #F0F5F9
    pub const SURFACE_LIGHT: Color = Color::from_rgb(
        0xf0 as f32 / 255.0,
        0xf5 as f32 / 255.0,
        0xf9 as f32 / 255.0,
    );

    /// Hovered button
    /// Hex: #C9D6DF
    pub const SURFACE_LIGHT_HOVER: Color = Color::from_rgb(
        0xc9 as f32 / 255.0,
        0xd6 as f32 / 255.0,
        0xdf as f32 / 255.0,
    );

    /// Text drawn on light surfaces
    /// Hex: #1E2022
    pub const TEXT_ON_LIGHT: Color = BASE;

    /// Secondary text on the dark background
    /// Hex: #8A949C
    pub const TEXT_MUTED: Color = Color::from_rgb(
        0x8a as f32 / 255.0,
        0x94 as f32 / 255.0,
        0x9c as f32 / 255.0,
    );

    /// Borders around light surfaces
    /// Hex: #52616B
    pub const BORDER: Color = Color::from_rgb(
        0x52 as f32 / 255.0,
        0x61 as f32 / 255.0,
        0x6b as f32 / 255.0,
    );

    /// Warning banner
    /// Hex: #F59E0B
    pub const WARNING: Color = Color::from_rgb(
        0xf5 as f32 / 255.0,
        0x9e as f32 / 255.0,
        0x0b as f32 / 255.0,
    );

    /// Failure text
    /// Hex: #EF4444
    pub const ERROR: Color = Color::from_rgb(
        0xef as f32 / 255.0,
        0x44 as f32 / 255.0,
        0x44 as f32 / 255.0,
    );
}

// =============================================================================
// SPACING, RADIUS, TYPOGRAPHY
// =============================================================================

pub mod spacing {
    /// Small spacing - component padding
    pub const SM: u16 = 8;

    /// Medium spacing - between related items
    pub const MD: u16 = 12;

    /// Major section spacing
    pub const XL: u16 = 24;
}

pub mod radius {
    /// Buttons
    pub const MD: f32 = 10.0;

    /// Input box
    pub const LG: f32 = 15.0;
}

pub mod typography {
    /// Screen header
    pub const SIZE_HEADER: u16 = 30;

    /// Body text
    pub const SIZE_BODY: u16 = 15;

    /// Status lines
    pub const SIZE_SMALL: u16 = 13;
}

pub mod layout {
    /// Artwork edge length in pixels
    pub const ARTWORK_SIZE: f32 = 300.0;

    /// Search input width
    pub const INPUT_WIDTH: f32 = 250.0;

    /// Search button width
    pub const BUTTON_WIDTH: f32 = 100.0;
}

// =============================================================================
// STYLE HELPERS
// =============================================================================

/// Full-screen background
pub fn screen_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color::BASE)),
        text_color: Some(color::SURFACE_LIGHT),
        ..Default::default()
    }
}

/// Light, rounded search input
pub fn search_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: iced::Background::Color(color::SURFACE_LIGHT),
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: radius::LG.into(),
        },
        icon: color::TEXT_MUTED,
        placeholder: color::TEXT_MUTED,
        value: color::TEXT_ON_LIGHT,
        selection: color::SURFACE_LIGHT_HOVER,
    }
}

/// Light search button
pub fn search_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text) = match status {
        button::Status::Active | button::Status::Pressed => {
            (color::SURFACE_LIGHT, color::TEXT_ON_LIGHT)
        }
        button::Status::Hovered => (color::SURFACE_LIGHT_HOVER, color::TEXT_ON_LIGHT),
        button::Status::Disabled => (color::BORDER, color::TEXT_MUTED),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: text,
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Warning banner for configuration problems
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: 0.15,
            ..color::WARNING
        })),
        text_color: Some(color::WARNING),
        border: Border {
            color: color::WARNING,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
