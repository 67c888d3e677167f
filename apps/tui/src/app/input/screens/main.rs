use crate::app::state::App;
use crate::ui::screens::main::search_button_area;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

pub fn handle_main_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('u') {
            app.edit_input("");
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Enter => app.submit(),
        KeyCode::Left => app.select_previous(),
        KeyCode::Right => app.select_next(),
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Esc => {
            app.running = false;
        }
        _ => {}
    }
}

pub fn handle_main_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if app.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if search_button_area(area).contains(Position::new(mouse.column, mouse.row)) {
        app.submit();
    }
}
