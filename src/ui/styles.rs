use ratatui::style::{Color, Modifier, Style};

const LIGHT_BG: Color = Color::Rgb(0xe9, 0xf5, 0xec);
const DARK_BG: Color = Color::Rgb(0x12, 0x12, 0x12);
const FOREST: Color = Color::Rgb(0x2d, 0x6a, 0x4f);
const SAGE: Color = Color::Rgb(0x80, 0xa4, 0x96);
const DONE_RED: Color = Color::Rgb(0xb5, 0x00, 0x00);

/// Screen background and default text
pub fn default_style(dark: bool) -> Style {
    if dark {
        Style::default().fg(Color::White).bg(DARK_BG)
    } else {
        Style::default().fg(Color::Black).bg(LIGHT_BG)
    }
}

/// Header title style
pub fn title_style(dark: bool) -> Style {
    let fg = if dark { Color::White } else { FOREST };
    default_style(dark).fg(fg).add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(dark: bool) -> Style {
    let fg = if dark { Color::Gray } else { FOREST };
    default_style(dark).fg(fg)
}

/// Selected row highlight style
pub fn selected_style(dark: bool) -> Style {
    let bg = if dark { Color::DarkGray } else { SAGE };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Completed task title
pub fn completed_style(dark: bool) -> Style {
    default_style(dark)
        .fg(DONE_RED)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Active filter tab
pub fn active_filter_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(FOREST)
        .add_modifier(Modifier::BOLD)
}

/// Text being typed (draft or inline edit)
pub fn input_style(dark: bool) -> Style {
    if dark {
        Style::default().fg(Color::White).bg(Color::Rgb(0x33, 0x33, 0x33))
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    }
}

/// Keybinding hint style
pub fn hint_style(dark: bool) -> Style {
    default_style(dark).fg(Color::DarkGray)
}

/// "syncing..." indicator
pub fn syncing_style(dark: bool) -> Style {
    default_style(dark).fg(Color::Yellow)
}
