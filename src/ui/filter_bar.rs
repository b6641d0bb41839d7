use crate::domain::Filter;
use crate::ui::styles::{active_filter_style, default_style};
use ratatui::{layout::Rect, text::Line, widgets::Tabs, Frame};

/// Render the All / Completed / Pending tabs
pub fn render_filter_bar(f: &mut Frame, current: Filter, dark: bool, area: Rect) {
    let titles: Vec<Line> = Filter::all()
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::from(format!("{} {}", i + 1, filter.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(default_style(dark))
        .highlight_style(active_filter_style())
        .divider(" ");
    f.render_widget(tabs, area);
}
