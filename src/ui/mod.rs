pub mod filter_bar;
pub mod header_pane;
pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use filter_bar::render_filter_bar;
use header_pane::render_header;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{widgets::Block, Frame};
use styles::default_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let dark = app.controller.dark_mode;
    let layout = create_layout(size);

    // Paint the background first so the palette covers the whole screen
    f.render_widget(Block::default().style(default_style(dark)), size);

    render_header(f, app, layout.header_area);
    render_input_bar(f, app, layout.input_area);
    render_filter_bar(f, app.controller.filter, dark, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_keybindings(f, app.ui_mode, dark, layout.keybindings_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TaskListController;
    use crate::domain::Task;
    use crate::store::mock::MockTaskStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_render_full_screen() {
        let store = Arc::new(MockTaskStore::new(vec![
            Task::new(1, "milk", false),
            Task::new(2, "bread", true),
        ]));
        let mut app = AppState::new(TaskListController::new(store), false);
        app.spawn_refresh();
        app.settle().await;

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("milk"));
        assert!(text.contains("bread"));
        assert!(text.contains("1 done"));
        assert!(text.contains("Pending"));

        app.toggle_dark_mode();
        terminal.draw(|f| render(f, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Dark mode [on]"));
    }
}
