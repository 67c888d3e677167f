use crate::app::state::App;
use crossterm::event::KeyEvent;

mod help;
pub mod main;

pub fn dispatch_input(app: &mut App, key: KeyEvent) {
    if help::handle_quit_chord(app, key) {
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    main::handle_main_input(app, key);
}
