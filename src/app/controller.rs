//! Application controller and coordination layer
//!
//! The controller owns the menu store, the form state, and the display
//! filter, and is the single place where application events turn into
//! state changes. Every event is handled synchronously and to
//! completion before the next one is read, so no locking is needed.

use crate::app::state::{AppEvent, FormState};
use crate::domain::menu::Course;
use crate::domain::store::MenuStore;
use crate::ui::terminal::TerminalError;

/// Errors that can surface out of the application
///
/// Domain-level submission failures are deliberately not errors (an
/// incomplete draft is a silent no-op); the only failures left are at
/// the terminal boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal setup failed: {0}")]
    Terminal(#[from] TerminalError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Owns the whole session state: store, form, and display filter
///
/// The store is created here at session start and dropped with the
/// controller at session end; nothing outlives the process and nothing
/// is ambient or global. The course assigned to a new dish
/// (`form.draft.course`) and the course tab being displayed (`filter`)
/// are independent state variables on purpose.
#[derive(Debug, Default)]
pub struct AppController {
    store: MenuStore,
    form: FormState,
    filter: Course,
}

impl AppController {
    /// Creates a controller with an empty menu, an empty form, and the
    /// Starter tab selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one application event to the session state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(c) => self.form.push_char(c),
            AppEvent::Backspace => self.form.pop_char(),
            AppEvent::FocusNext => self.form.focus_next(),
            AppEvent::FocusPrev => self.form.focus_prev(),
            AppEvent::SelectTab(course) => self.filter = course,
            AppEvent::NextTab => self.filter = self.filter.next(),
            AppEvent::PrevTab => self.filter = self.filter.prev(),
            AppEvent::NextDraftCourse => self.form.next_course(),
            AppEvent::PrevDraftCourse => self.form.prev_course(),
            AppEvent::Submit => self.submit(),
            // The event loop exits on Quit before it reaches here.
            AppEvent::Quit => {}
        }
    }

    /// Hands the current draft to the store; clears the text fields
    /// only if the store accepted it
    fn submit(&mut self) {
        if self.store.add_item(&self.form.draft).is_some() {
            self.form.clear_after_submit();
        }
    }

    /// The menu store (read access for the presentation layer)
    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// The form state (read access for the presentation layer)
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The currently displayed course tab
    pub fn filter(&self) -> Course {
        self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FormField;

    fn type_str(app: &mut AppController, text: &str) {
        for c in text.chars() {
            app.handle_event(AppEvent::Input(c));
        }
    }

    /// Drives the full form flow: type the three fields and submit.
    fn submit_dish(app: &mut AppController, name: &str, description: &str, price: &str) {
        type_str(app, name);
        app.handle_event(AppEvent::FocusNext);
        type_str(app, description);
        app.handle_event(AppEvent::FocusNext);
        type_str(app, price);
        app.handle_event(AppEvent::Submit);
    }

    #[test]
    fn new_controller_shows_the_starter_tab() {
        let app = AppController::new();
        assert_eq!(app.filter(), Course::Starter);
        assert_eq!(app.store().count_all(), 0);
    }

    #[test]
    fn full_submit_flow_adds_an_item_and_clears_the_form() {
        let mut app = AppController::new();
        submit_dish(&mut app, "Soup", "Hot soup", "45.50");

        assert_eq!(app.store().count_all(), 1);
        assert_eq!(app.store().count_by_course(Course::Starter), 1);
        assert!(app.form().draft.name.is_empty());
        assert!(app.form().draft.description.is_empty());
        assert!(app.form().draft.price.is_empty());
        assert_eq!(app.form().focus, FormField::Name);
    }

    #[test]
    fn failed_submit_keeps_the_typed_values() {
        let mut app = AppController::new();
        // Description left empty on purpose.
        type_str(&mut app, "Soup");
        app.handle_event(AppEvent::FocusNext);
        app.handle_event(AppEvent::FocusNext);
        type_str(&mut app, "45.50");
        app.handle_event(AppEvent::Submit);

        assert_eq!(app.store().count_all(), 0);
        assert_eq!(app.form().draft.name, "Soup");
        assert_eq!(app.form().draft.price, "45.50");
    }

    #[test]
    fn selecting_a_tab_does_not_touch_the_draft_course() {
        let mut app = AppController::new();
        app.handle_event(AppEvent::SelectTab(Course::Dessert));

        assert_eq!(app.filter(), Course::Dessert);
        assert_eq!(app.form().draft.course, Course::Starter);
    }

    #[test]
    fn cycling_the_draft_course_does_not_touch_the_tab() {
        let mut app = AppController::new();
        app.handle_event(AppEvent::NextDraftCourse);

        assert_eq!(app.form().draft.course, Course::Main);
        assert_eq!(app.filter(), Course::Starter);
    }

    #[test]
    fn submit_changes_neither_tab_nor_draft_course() {
        let mut app = AppController::new();
        app.handle_event(AppEvent::SelectTab(Course::Main));
        app.handle_event(AppEvent::NextDraftCourse); // draft course -> Main
        submit_dish(&mut app, "Steak", "Rump, 300g", "180");

        assert_eq!(app.filter(), Course::Main);
        assert_eq!(app.form().draft.course, Course::Main);
        assert_eq!(app.store().count_by_course(Course::Main), 1);
    }

    #[test]
    fn tab_arrows_wrap_around() {
        let mut app = AppController::new();
        app.handle_event(AppEvent::PrevTab);
        assert_eq!(app.filter(), Course::Dessert);
        app.handle_event(AppEvent::NextTab);
        assert_eq!(app.filter(), Course::Starter);
    }

    #[test]
    fn mains_filter_returns_only_mains_in_submission_order() {
        let mut app = AppController::new();
        app.handle_event(AppEvent::NextDraftCourse); // draft course -> Main
        submit_dish(&mut app, "Steak", "Rump, 300g", "180");
        app.handle_event(AppEvent::NextDraftCourse); // -> Dessert
        submit_dish(&mut app, "Cake", "Chocolate", "60");
        app.handle_event(AppEvent::PrevDraftCourse); // -> Main
        submit_dish(&mut app, "Pasta", "Fresh tagliatelle", "120");

        let mains: Vec<&str> = app
            .store()
            .filter_by_course(Course::Main)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(mains, ["Steak", "Pasta"]);
    }

    #[test]
    fn quit_event_leaves_state_untouched() {
        let mut app = AppController::new();
        type_str(&mut app, "Soup");
        app.handle_event(AppEvent::Quit);

        assert_eq!(app.form().draft.name, "Soup");
        assert_eq!(app.store().count_all(), 0);
    }
}
