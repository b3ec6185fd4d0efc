//! Terminal UI for the modtrim binary

pub mod context;
pub mod live_region;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
