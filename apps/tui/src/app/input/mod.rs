pub mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;

pub fn handle_input(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    screens::dispatch_input(app, key);
}

/// `area` is the full terminal area the last frame was drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    screens::main::handle_main_mouse(app, mouse, area);
}
