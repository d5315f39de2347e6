//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── table ──────────────────────────────────────────────────
    pub fn header_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_style() -> Style {
        Style::default().fg(Color::White)
    }

    /// Every other row, to keep long tables readable.
    pub fn alt_row_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn loading_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    // ── pager ──────────────────────────────────────────────────
    pub fn button_style() -> Style {
        Style::default().fg(Color::White).bg(Color::Blue)
    }

    pub fn button_disabled_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn page_active_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn page_style() -> Style {
        Style::default().fg(Color::White)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn page_input_style() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
