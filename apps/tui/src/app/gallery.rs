use crate::address::{AddressValidator, EvmAddressValidator};
use crate::domain::{AssetItem, GalleryState};
use crate::provider::FetchError;

pub const WRONG_ADDRESS: &str = "Wrong address";
pub const NOTHING_FOUND: &str = "There is nothing!";
pub const GRID_COLUMNS: usize = 4;

/// Handed out by [`AddressGallery::submit`]; identifies one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub address: String,
}

/// What the content area should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryView<'a> {
    InputOnly,
    Busy,
    Nothing,
    Grid(&'a [AssetItem]),
    Error(&'a str),
}

/// The address form and the result of its last submission.
///
/// All transitions go through `set_input`, `submit` and `complete`; every
/// submission gets a fresh generation, and completions for an older generation
/// are dropped so a slow response can never overwrite a newer one.
#[derive(Debug)]
pub struct AddressGallery<V = EvmAddressValidator> {
    validator: V,
    input: String,
    valid: bool,
    state: GalleryState,
    generation: u64,
}

impl Default for AddressGallery<EvmAddressValidator> {
    fn default() -> Self {
        Self::new(EvmAddressValidator)
    }
}

impl<V: AddressValidator> AddressGallery<V> {
    pub const fn new(validator: V) -> Self {
        Self {
            validator,
            input: String::new(),
            valid: true,
            state: GalleryState::Idle,
            generation: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    pub const fn state(&self) -> &GalleryState {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True when a submission would issue a request.
    pub fn can_submit(&self) -> bool {
        self.valid && !self.input.is_empty()
    }

    /// Inline validation message, if any.
    pub const fn validation_message(&self) -> Option<&'static str> {
        if self.valid {
            None
        } else {
            Some(WRONG_ADDRESS)
        }
    }

    /// Replaces the address text. Clearing it also drops any result or error.
    pub fn set_input(&mut self, text: &str) {
        if text.is_empty() {
            self.input.clear();
            self.valid = true;
            if self.state != GalleryState::Idle {
                // Anything still in flight belongs to the discarded state.
                self.generation += 1;
            }
            self.state = GalleryState::Idle;
            return;
        }

        self.input = text.to_string();
        self.valid = self.validator.is_valid(text);
    }

    pub fn push_char(&mut self, c: char) {
        let mut text = self.input.clone();
        text.push(c);
        self.set_input(&text);
    }

    pub fn pop_char(&mut self) {
        let mut text = self.input.clone();
        text.pop();
        self.set_input(&text);
    }

    /// Starts a request for the current address, or does nothing when the
    /// address is empty or invalid.
    pub fn submit(&mut self) -> Option<FetchTicket> {
        if !self.can_submit() {
            return None;
        }

        self.generation += 1;
        self.state = GalleryState::Loading;

        Some(FetchTicket {
            generation: self.generation,
            address: self.input.clone(),
        })
    }

    /// Applies the outcome of a request. Returns `false` when the response was
    /// stale and left the state untouched.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<Vec<AssetItem>, FetchError>,
    ) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            return false;
        }

        self.state = match outcome {
            Ok(items) => GalleryState::Loaded(items),
            Err(err) => GalleryState::Errored(err.to_string()),
        };
        true
    }

    pub fn view(&self) -> GalleryView<'_> {
        match &self.state {
            GalleryState::Idle => GalleryView::InputOnly,
            GalleryState::Loading => GalleryView::Busy,
            GalleryState::Loaded(items) if items.len() <= 1 => GalleryView::Nothing,
            GalleryState::Loaded(items) => GalleryView::Grid(items),
            GalleryState::Errored(message) => GalleryView::Error(message),
        }
    }
}
