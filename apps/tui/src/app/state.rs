use crate::address::abbreviate;
use crate::app::actions::{AppActions, FetchFinished};
use crate::app::gallery::{AddressGallery, GalleryView};
use crate::app::input::helpers::{grid_down, grid_up, wrap_decrement, wrap_increment};
use crate::domain::{AssetItem, GalleryState};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

const THROBBER_TICK: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub gallery: AddressGallery,
    pub actions: AppActions,
    pub status_message: String,
    pub show_help: bool,
    pub selected_index: usize,
    pub throbber_state: ThrobberState,
    pub last_tick: Instant,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            gallery: AddressGallery::default(),
            actions,
            status_message: String::new(),
            show_help: false,
            selected_index: 0,
            throbber_state: ThrobberState::default(),
            last_tick: Instant::now(),
        }
    }

    /// Advances the busy indicator while a request is in flight.
    pub fn update(&mut self) {
        if !self.gallery.is_loading() {
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= THROBBER_TICK {
            self.throbber_state.calc_next();
            self.last_tick = now;
        }
    }

    pub fn edit_input(&mut self, text: &str) {
        self.gallery.set_input(text);
        self.after_edit();
    }

    pub fn push_char(&mut self, c: char) {
        self.gallery.push_char(c);
        self.after_edit();
    }

    pub fn pop_char(&mut self) {
        self.gallery.pop_char();
        self.after_edit();
    }

    fn after_edit(&mut self) {
        if self.gallery.input().is_empty() {
            self.selected_index = 0;
            self.status_message.clear();
        }
    }

    /// Issues a request for the current address. Disabled while the address
    /// is empty or invalid.
    pub fn submit(&mut self) {
        let Some(ticket) = self.gallery.submit() else {
            tracing::debug!(input = self.gallery.input(), "submit ignored");
            return;
        };

        tracing::info!(
            address = %ticket.address,
            generation = ticket.generation,
            "submitting owner query"
        );
        self.status_message = format!("Searching {}...", abbreviate(&ticket.address));
        self.selected_index = 0;
        self.actions.spawn_fetch(ticket);
    }

    /// Applies every completed fetch waiting on the channel.
    pub fn drain_messages(&mut self) {
        while let Some(finished) = self.actions.try_recv() {
            self.apply_fetch(finished);
        }
    }

    pub fn apply_fetch(&mut self, finished: FetchFinished) {
        let FetchFinished {
            generation,
            address,
            outcome,
        } = finished;

        if !self.gallery.complete(generation, outcome) {
            tracing::debug!(generation, %address, "discarding stale response");
            return;
        }

        self.selected_index = 0;
        self.status_message = match self.gallery.state() {
            GalleryState::Loaded(items) => {
                format!("{} images for {}", items.len(), abbreviate(&address))
            }
            GalleryState::Errored(message) => format!("Error: {message}"),
            GalleryState::Idle | GalleryState::Loading => String::new(),
        };
    }

    /// Items currently laid out in the grid, empty unless the grid is shown.
    pub fn grid_items(&self) -> &[AssetItem] {
        match self.gallery.view() {
            GalleryView::Grid(items) => items,
            _ => &[],
        }
    }

    pub fn selected_item(&self) -> Option<&AssetItem> {
        self.grid_items().get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        self.selected_index = wrap_increment(self.selected_index, self.grid_items().len());
    }

    pub fn select_previous(&mut self) {
        self.selected_index = wrap_decrement(self.selected_index, self.grid_items().len());
    }

    pub fn select_down(&mut self) {
        self.selected_index = grid_down(self.selected_index, self.grid_items().len());
    }

    pub fn select_up(&mut self) {
        self.selected_index = grid_up(self.selected_index);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.grid_items().len().saturating_sub(1);
    }
}
