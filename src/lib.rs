//! NU CHEF — a single-screen menu board for the terminal
//!
//! A chef types a dish name, description, and price, picks a course,
//! and submits; the board keeps the menu in memory for the session,
//! tallies counts per course, and lists the dishes behind the selected
//! course tab.
//!
//! Layering:
//! - [`domain`] — pure menu logic, no terminal knowledge
//! - [`app`] — form state, events, and the controller that owns the store
//! - [`input`] — raw key events mapped to application events
//! - [`ui`] — ratatui rendering and terminal lifecycle

pub mod app;
pub mod domain;
pub mod input;
pub mod ui;
