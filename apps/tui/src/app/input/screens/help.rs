use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_quit_chord(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return true;
    }

    false
}

pub fn handle_help_toggle(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key.code == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}
