//! Application state management and coordination
//!
//! Holds the transient form state, the event vocabulary produced by the
//! input layer, and the controller that wires both to the menu store.

pub mod controller;
pub mod state;
