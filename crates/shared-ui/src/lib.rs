//! Themed widget library and theme store shared by every CampusLink page.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::*;
