//! Key binding definitions for the artwork table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::PageNav;

/// Actions available while the artwork table has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the row cursor down.
    CursorDown,
    /// Move the row cursor up.
    CursorUp,
    /// Toggle the checkbox of the row under the cursor.
    ToggleRow,
    /// Toggle every checkbox on the page.
    TogglePage,
    /// Move through the pages.
    Page(PageNav),
    /// Open or close the select-rows prompt.
    SelectRowsPrompt,
    /// Open the artwork under the cursor in a browser.
    OpenInBrowser,
    /// Show the help screen.
    Help,
    /// Quit the application.
    Quit,
}

/// Key binding configuration.
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Resolve a key press to a table action.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        let action = match (key.code, key.modifiers) {
            (KeyCode::Down, _) => Action::CursorDown,
            (KeyCode::Up, _) => Action::CursorUp,
            (KeyCode::Char(' '), _) => Action::ToggleRow,
            (KeyCode::Char('a'), KeyModifiers::NONE) => Action::TogglePage,
            (KeyCode::Right | KeyCode::PageDown, _) => Action::Page(PageNav::Next),
            (KeyCode::Left | KeyCode::PageUp, _) => Action::Page(PageNav::Previous),
            (KeyCode::Home, _) => Action::Page(PageNav::First),
            (KeyCode::End, _) => Action::Page(PageNav::Last),
            (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Page(PageNav::Reload),
            (KeyCode::Char('s'), KeyModifiers::NONE) => Action::SelectRowsPrompt,
            (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenInBrowser,
            (KeyCode::Char('?'), _) => Action::Help,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            _ if self.vim_mode => return self.vim_action_for(key),
            _ => return None,
        };
        Some(action)
    }

    /// Vim-style movement keys.
    fn vim_action_for(&self, key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) => Some(Action::CursorDown),
            (KeyCode::Char('k'), KeyModifiers::NONE) => Some(Action::CursorUp),
            (KeyCode::Char('l'), KeyModifiers::NONE) => Some(Action::Page(PageNav::Next)),
            (KeyCode::Char('h'), KeyModifiers::NONE) => Some(Action::Page(PageNav::Previous)),
            (KeyCode::Char('g'), KeyModifiers::NONE) => Some(Action::Page(PageNav::First)),
            (KeyCode::Char('G'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                Some(Action::Page(PageNav::Last))
            }
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(key(KeyCode::Down)), Some(Action::CursorDown));
        assert_eq!(bindings.action_for(key(KeyCode::Up)), Some(Action::CursorUp));
        assert_eq!(
            bindings.action_for(key(KeyCode::Right)),
            Some(Action::Page(PageNav::Next))
        );
        assert_eq!(
            bindings.action_for(key(KeyCode::Left)),
            Some(Action::Page(PageNav::Previous))
        );
    }

    #[test]
    fn test_selection_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action_for(key(KeyCode::Char(' '))),
            Some(Action::ToggleRow)
        );
        assert_eq!(
            bindings.action_for(key(KeyCode::Char('a'))),
            Some(Action::TogglePage)
        );
        assert_eq!(
            bindings.action_for(key(KeyCode::Char('s'))),
            Some(Action::SelectRowsPrompt)
        );
    }

    #[test]
    fn test_vim_keys_enabled() {
        let bindings = KeyBindings::new(true);
        assert_eq!(
            bindings.action_for(key(KeyCode::Char('j'))),
            Some(Action::CursorDown)
        );
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(Action::Page(PageNav::Last))
        );
    }

    #[test]
    fn test_vim_keys_disabled() {
        let bindings = KeyBindings::new(false);
        assert_eq!(bindings.action_for(key(KeyCode::Char('j'))), None);
        assert_eq!(bindings.action_for(key(KeyCode::Char('l'))), None);
        assert_eq!(bindings.action_for(key(KeyCode::Down)), Some(Action::CursorDown));
    }

    #[test]
    fn test_ctrl_q_is_not_quit() {
        let bindings = KeyBindings::default();
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(bindings.action_for(ctrl_q), None);
    }
}
