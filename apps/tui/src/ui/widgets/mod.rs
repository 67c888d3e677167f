pub mod grid;
pub mod popup;
