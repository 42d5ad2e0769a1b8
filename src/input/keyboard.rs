//! Key event mapping
//!
//! Maps crossterm key events to `AppEvent`s. Only key presses are
//! acted on; release and repeat reporting from kitty-style terminals
//! would otherwise double every keystroke.
//!
//! Bindings:
//! - printable characters type into the focused field
//! - Tab / Shift-Tab move field focus
//! - Left / Right switch the display tab, F1..F3 select one directly
//! - Up / Down cycle the course assigned to the new dish
//! - Enter submits, Esc or Ctrl-C quits

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::state::AppEvent;
use crate::domain::menu::Course;

/// Maps one key event to an application event
///
/// # Returns
/// The corresponding `AppEvent`, or None for keys that have no binding.
pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        }
        KeyCode::Enter => Some(AppEvent::Submit),
        KeyCode::Tab => Some(AppEvent::FocusNext),
        KeyCode::BackTab => Some(AppEvent::FocusPrev),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Left => Some(AppEvent::PrevTab),
        KeyCode::Right => Some(AppEvent::NextTab),
        KeyCode::Up => Some(AppEvent::PrevDraftCourse),
        KeyCode::Down => Some(AppEvent::NextDraftCourse),
        KeyCode::F(1) => Some(AppEvent::SelectTab(Course::Starter)),
        KeyCode::F(2) => Some(AppEvent::SelectTab(Course::Main)),
        KeyCode::F(3) => Some(AppEvent::SelectTab(Course::Dessert)),
        // Chorded characters are not text input.
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(AppEvent::Input(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn printable_characters_become_input() {
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(AppEvent::Input('a')));
        assert_eq!(map_key(press(KeyCode::Char('4'))), Some(AppEvent::Input('4')));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(AppEvent::Input(' ')));
    }

    #[test]
    fn navigation_and_submission_keys() {
        assert_eq!(map_key(press(KeyCode::Tab)), Some(AppEvent::FocusNext));
        assert_eq!(map_key(press(KeyCode::BackTab)), Some(AppEvent::FocusPrev));
        assert_eq!(map_key(press(KeyCode::Left)), Some(AppEvent::PrevTab));
        assert_eq!(map_key(press(KeyCode::Right)), Some(AppEvent::NextTab));
        assert_eq!(map_key(press(KeyCode::Up)), Some(AppEvent::PrevDraftCourse));
        assert_eq!(map_key(press(KeyCode::Down)), Some(AppEvent::NextDraftCourse));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(AppEvent::Submit));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(AppEvent::Backspace));
    }

    #[test]
    fn function_keys_select_tabs_directly() {
        assert_eq!(map_key(press(KeyCode::F(1))), Some(AppEvent::SelectTab(Course::Starter)));
        assert_eq!(map_key(press(KeyCode::F(2))), Some(AppEvent::SelectTab(Course::Main)));
        assert_eq!(map_key(press(KeyCode::F(3))), Some(AppEvent::SelectTab(Course::Dessert)));
        assert_eq!(map_key(press(KeyCode::F(4))), None);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(AppEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(AppEvent::Quit));
    }

    #[test]
    fn other_control_chords_are_ignored() {
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_x), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = press(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
