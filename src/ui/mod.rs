//! Terminal presentation layer
//!
//! Renders the single menu-board screen with ratatui and owns the
//! terminal lifecycle. Rendering only reads controller state; all
//! writes go back through application events.

pub mod terminal;
pub mod theme;
pub mod view;
