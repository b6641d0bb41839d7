use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout, top to bottom:
/// - Header: title, dark-mode state, last sync (1 row)
/// - New-task input (3 rows, bordered)
/// - Filter tabs (1 row)
/// - Task list (rest)
/// - Keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input
            Constraint::Length(1), // Filters
            Constraint::Min(0),    // List
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        input_area: chunks[1],
        filter_area: chunks[2],
        list_area: chunks[3],
        keybindings_area: chunks[4],
    }
}
