//! Domain logic and core data structures
//!
//! This module contains pure business logic that is independent
//! of the terminal backend and any presentation concerns.

pub mod menu;
pub mod store;
