use crate::ui::app::{App, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.mode() {
        Mode::Compose { .. } => handle_compose_key(app, key),
        Mode::Browse => handle_browse_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('f') => app.request_fetch(),
        KeyCode::Char('c') => app.request_cancel_retry(),
        KeyCode::Char('a') => app.begin_compose(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        _ => {}
    }
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.abort_compose(),
        KeyCode::Tab => app.next_field(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
