//! Input handling
//!
//! Translates raw terminal key events into application events. The
//! mapping is a pure function so it can be tested without a terminal.

pub mod keyboard;
