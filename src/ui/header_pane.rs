use crate::app::AppState;
use crate::domain::compute_counts;
use crate::ui::styles::{default_style, syncing_style, title_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn sync_label(last_synced: Option<DateTime<Local>>) -> String {
    match last_synced {
        Some(at) => format!("synced {}", at.format("%H:%M:%S")),
        None => "not synced".to_string(),
    }
}

/// Title, counts, dark-mode switch and sync status
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.controller.dark_mode;
    let (completed, pending) = compute_counts(app.controller.tasks());

    let mut spans = vec![
        Span::styled(" 📝 Todo List ", title_style(dark)),
        Span::raw(format!(" {} done · {} pending   ", completed, pending)),
        Span::raw(format!("Dark mode [{}]   ", if dark { "on" } else { "off" })),
    ];

    if app.is_syncing() {
        spans.push(Span::styled("syncing…", syncing_style(dark)));
    } else {
        spans.push(Span::raw(sync_label(app.controller.last_synced())));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(default_style(dark));
    f.render_widget(paragraph, area);
}
