use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.blur();
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Drafting => handle_drafting_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Focus the new-task input
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.start_draft();
            Ok(false)
        }

        // Inline edit
        KeyCode::Enter | KeyCode::Char('e') => {
            app.start_edit_selected();
            Ok(false)
        }

        // Toggle complete
        KeyCode::Char(' ') | KeyCode::Char('c') => {
            app.toggle_selected();
            Ok(false)
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Filters
        KeyCode::Tab | KeyCode::Char('f') => {
            app.cycle_filter();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Completed);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Pending);
            Ok(false)
        }

        KeyCode::Char('t') => {
            app.toggle_dark_mode();
            Ok(false)
        }

        KeyCode::Char('r') => {
            app.spawn_refresh();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_drafting_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_draft();
            Ok(false)
        }
        // Leave the input; the draft is kept
        KeyCode::Esc | KeyCode::Down | KeyCode::Tab => {
            app.leave_draft();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.draft_pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.draft_push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while editing a task title inline
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.save_edit();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_edit();
            Ok(false)
        }
        // Leaving the field commits, same as save
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Tab => {
            app.blur();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.edit_pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.edit_push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
