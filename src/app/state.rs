//! Form state and application events
//!
//! `FormState` holds the transient draft a chef is editing plus which
//! field currently has keyboard focus. The state machine is trivial:
//! the form is either empty or partially filled, and a successful
//! submission transitions it back to empty (course kept, so the chef
//! can keep adding dishes to the same course).

use crate::domain::menu::{Course, MenuDraft};

/// The three editable text fields of the add-dish form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Price,
}

impl FormField {
    /// All fields in focus-cycling order
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Description, FormField::Price];

    /// Label shown next to the field on screen
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Dish name",
            FormField::Description => "Description",
            FormField::Price => "Price",
        }
    }

    /// The field after this one, wrapping around
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Price,
            FormField::Price => FormField::Name,
        }
    }

    /// The field before this one, wrapping around
    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Price,
            FormField::Description => FormField::Name,
            FormField::Price => FormField::Description,
        }
    }
}

/// Transient input state of the add-dish form
///
/// No validation happens at this layer; raw keystrokes land in the
/// focused buffer as typed and are judged only on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: MenuDraft,
    pub focus: FormField,
}

impl FormState {
    /// Creates an empty form focused on the name field
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to a field's current text
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Description => &self.draft.description,
            FormField::Price => &self.draft.price,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.draft.name,
            FormField::Description => &mut self.draft.description,
            FormField::Price => &mut self.draft.price,
        }
    }

    /// Appends a typed character to the focused field
    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Removes the last character of the focused field, if any
    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Moves focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Cycles the draft's course forward
    pub fn next_course(&mut self) {
        self.draft.course = self.draft.course.next();
    }

    /// Cycles the draft's course backward
    pub fn prev_course(&mut self) {
        self.draft.course = self.draft.course.prev();
    }

    /// Resets the form after a successful submission
    ///
    /// Name, description, and price are cleared; the course selection is
    /// left unchanged. Focus returns to the name field so the next dish
    /// can be typed straight away.
    pub fn clear_after_submit(&mut self) {
        self.draft.name.clear();
        self.draft.description.clear();
        self.draft.price.clear();
        self.focus = FormField::Name;
    }
}

/// Events the presentation layer feeds into the controller
///
/// This is the entire write surface of the application: every mutation
/// of form, filter, or store state starts as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Printable character typed into the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Move focus to the next form field
    FocusNext,
    /// Move focus to the previous form field
    FocusPrev,
    /// Select a display tab directly
    SelectTab(Course),
    /// Move the display tab forward
    NextTab,
    /// Move the display tab backward
    PrevTab,
    /// Cycle the draft's course forward
    NextDraftCourse,
    /// Cycle the draft's course backward
    PrevDraftCourse,
    /// Attempt to add the current draft to the menu
    Submit,
    /// Leave the application
    Quit,
}
