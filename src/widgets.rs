pub mod popup;
pub mod spinner;
