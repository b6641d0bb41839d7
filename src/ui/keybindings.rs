use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the focused input
pub fn hints(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " ↑/↓ select   ",
            "a add   ",
            "Enter/e edit   ",
            "Space done   ",
            "d delete   ",
            "Tab/1-3 filter   ",
            "t dark   ",
            "r refresh   ",
            "q quit",
        ],
        UiMode::Drafting => vec![" Enter add   ", "Esc leave input"],
        UiMode::Editing => vec![" Enter save   ", "↑/↓/Tab save & move   ", "Esc cancel"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, dark: bool, area: Rect) {
    let line = Line::from(hints(mode).into_iter().map(Span::raw).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(hint_style(dark));
    f.render_widget(paragraph, area);
}
