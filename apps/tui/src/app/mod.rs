// App module for address-gallery
// Handles application state and the address/gallery state machine

pub mod actions;
pub mod gallery;
pub mod input;
pub mod state;

pub use actions::{fetch_images, AppActions, FetchFinished};
pub use gallery::{AddressGallery, FetchTicket, GalleryView};
pub use input::{handle_input, handle_mouse};
pub use state::App;
