use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, hint_style, input_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-task input
pub fn render_input_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.controller.dark_mode;
    let focused = app.ui_mode == UiMode::Drafting;
    let draft = &app.controller.draft;

    let line = if draft.is_empty() && !focused {
        Line::from(Span::styled("Add new task... (a)", hint_style(dark)))
    } else {
        let mut spans = vec![Span::styled(draft.clone(), input_style(dark))];
        if focused {
            spans.push(Span::styled("█", input_style(dark)));
        }
        Line::from(spans)
    };

    let border = if focused {
        title_style(dark)
    } else {
        border_style(dark)
    };

    let paragraph = Paragraph::new(line).style(input_style(dark)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" New task ", border)),
    );
    f.render_widget(paragraph, area);
}
