use crate::app::AppState;
use crate::domain::{status_badge, Task, UiMode};
use crate::ui::styles::{
    border_style, completed_style, default_style, input_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the task list under the current filter
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.controller.dark_mode;
    let edit = app.controller.edit();

    let items: Vec<ListItem> = app
        .controller
        .visible_tasks()
        .into_iter()
        .map(|task| {
            let pending = edit
                .buffer()
                .filter(|_| edit.is_editing(&task.id))
                .map(|buffer| {
                    let mark = if app.ui_mode == UiMode::Editing {
                        EditMark::Cursor
                    } else if app.is_saving(&task.id) {
                        EditMark::Saving
                    } else {
                        EditMark::Unsaved
                    };
                    (buffer, mark)
                });
            ListItem::new(create_task_line(task, pending, app.use_emoji, dark))
        })
        .collect();

    let empty = items.is_empty();
    let title = format!(" {} ", app.controller.filter.label());

    let list = List::new(items)
        .style(default_style(dark))
        .highlight_style(selected_style(dark))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(dark))
                .title(Span::styled(title, title_style(dark))),
        );

    let mut state = ListState::default();
    if !empty {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Decoration after an edit buffer shown in place of the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMark {
    /// The buffer has input focus
    Cursor,
    /// A save for this row is in flight
    Saving,
    /// Left behind by a save the store did not accept
    Unsaved,
}

/// One row: checkbox, then either the title or the pending edit buffer
pub fn create_task_line(
    task: &Task,
    edit: Option<(&str, EditMark)>,
    use_emoji: bool,
    dark: bool,
) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(
        " {} ",
        status_badge(task.completed, use_emoji)
    ))];

    match edit {
        Some((buffer, mark)) => {
            spans.push(Span::styled(buffer.to_string(), input_style(dark)));
            match mark {
                EditMark::Cursor => spans.push(Span::styled("█", input_style(dark))),
                EditMark::Saving => spans.push(Span::raw(" (saving)")),
                EditMark::Unsaved => spans.push(Span::raw(" (unsaved)")),
            }
        }
        None if task.completed => {
            spans.push(Span::styled(task.title.clone(), completed_style(dark)));
        }
        None => spans.push(Span::raw(task.title.clone())),
    }

    Line::from(spans)
}
