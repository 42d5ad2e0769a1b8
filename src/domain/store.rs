//! In-memory menu store and its derived views
//!
//! The store owns the insertion-ordered collection of menu items for
//! the lifetime of a session. It validates drafts on submission,
//! assigns unique ids, and computes counts and filtered listings on
//! demand rather than caching them.

use crate::domain::menu::{Course, MenuDraft, MenuItem, MenuItemId};

/// Owns the menu collection and mediates all additions to it
///
/// Created at session start and dropped at session end; nothing is
/// persisted. The collection is append-only: items are never edited or
/// removed once accepted.
///
/// # Example
/// ```rust
/// use nu_chef::domain::{menu::MenuDraft, store::MenuStore};
///
/// let mut store = MenuStore::new();
/// let draft = MenuDraft {
///     name: "Soup".into(),
///     description: "Hot soup".into(),
///     price: "45.50".into(),
///     ..Default::default()
/// };
/// assert!(store.add_item(&draft).is_some());
/// assert_eq!(store.count_all(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl MenuStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to append a new item built from the given draft
    ///
    /// The guard is deliberately soft: an incomplete draft (any of
    /// name, description, or price empty) or a price that does not
    /// parse to a finite non-negative number makes the call a no-op.
    /// No error is raised in either case.
    ///
    /// # Returns
    /// The id of the freshly appended item, or None if the draft was
    /// rejected and the collection is unchanged.
    pub fn add_item(&mut self, draft: &MenuDraft) -> Option<MenuItemId> {
        if !draft.is_complete() {
            return None;
        }
        let price = draft.parsed_price()?;

        let id = MenuItemId::new(self.next_id);
        self.next_id += 1;
        self.items.push(MenuItem {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            course: draft.course,
            price,
            image: draft.image.clone(),
        });
        Some(id)
    }

    /// Total number of items on the menu
    pub fn count_all(&self) -> usize {
        self.items.len()
    }

    /// Number of items classified under the given course
    pub fn count_by_course(&self, course: Course) -> usize {
        self.filter_by_course(course).count()
    }

    /// Items belonging to the given course, in insertion order
    pub fn filter_by_course(&self, course: Course) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.course == course)
    }

    /// The full collection in insertion order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}
