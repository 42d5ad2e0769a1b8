//! Core menu types
//!
//! This module defines the pure domain types for the menu: the fixed
//! course enumeration, the opaque item identifier, the immutable
//! `MenuItem`, and the transient `MenuDraft` a chef edits before
//! submission. None of these know anything about the UI.

use std::fmt;

/// One of the three fixed dish categories
///
/// A course classifies a `MenuItem` and also selects the active display
/// filter, but those are two independent pieces of state (see
/// `AppController`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Course {
    #[default]
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// All courses in their canonical display order
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Singular display label ("Starter")
    pub fn label(self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    /// Plural label used for the course tabs ("Starters")
    pub fn tab_label(self) -> &'static str {
        match self {
            Course::Starter => "Starters",
            Course::Main => "Mains",
            Course::Dessert => "Desserts",
        }
    }

    /// Position of this course within [`Course::ALL`]
    pub fn index(self) -> usize {
        match self {
            Course::Starter => 0,
            Course::Main => 1,
            Course::Dessert => 2,
        }
    }

    /// The next course in display order, wrapping around
    pub fn next(self) -> Course {
        Course::ALL[(self.index() + 1) % Course::ALL.len()]
    }

    /// The previous course in display order, wrapping around
    pub fn prev(self) -> Course {
        Course::ALL[(self.index() + Course::ALL.len() - 1) % Course::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque, unique identifier for a menu item
///
/// Identifiers are assigned by the `MenuStore` from a monotonic counter,
/// so rapid successive insertions can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuItemId(u64);

impl MenuItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dish on the menu
///
/// Immutable once created; the collection only grows, there is no edit
/// or delete in scope. `image` is an optional reference carried for the
/// presentation layer and unused by core logic.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
    pub image: Option<String>,
}

/// Transient, unvalidated field values being edited before submission
///
/// The price is held as raw text exactly as typed; it is parsed only
/// when the draft is submitted to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: Course,
    pub image: Option<String>,
}

impl MenuDraft {
    /// Checks the presence guard: name, description, and price text
    /// must all be non-empty (whitespace-only counts as empty).
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.price.trim().is_empty()
    }

    /// Parses the price text into a usable price
    ///
    /// # Returns
    /// The parsed value if it is a finite, non-negative number; None for
    /// anything else (unparseable, NaN/infinite, or negative input).
    pub fn parsed_price(&self) -> Option<f64> {
        let price: f64 = self.price.trim().parse().ok()?;
        (price.is_finite() && price >= 0.0).then_some(price)
    }
}
