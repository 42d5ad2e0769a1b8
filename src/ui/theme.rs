//! Styles for the menu board screen
//!
//! Centralized so the view code stays free of color constants. The
//! palette follows the original black-and-white board: the active tab
//! and buttons invert, everything else stays plain.

use ratatui::style::{Color, Modifier, Style};

pub fn title() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

pub fn counts() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

pub fn tab() -> Style {
    Style::new()
}

pub fn active_tab() -> Style {
    Style::new()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn field_label() -> Style {
    Style::new().fg(Color::DarkGray)
}

pub fn focused_field_label() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::new().fg(Color::DarkGray)
}

pub fn item_name() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

pub fn item_course() -> Style {
    Style::new()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

pub fn item_price() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}
