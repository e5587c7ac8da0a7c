//! Key handling for the TUI.
//!
//! Translates key presses into [`Action`]s. What a key means depends on
//! whether the search box has focus and whether a game is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    CloseHelp,
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    MoveUp,
    MoveDown,
    SelectHighlighted,
    Home,
    ToggleFullscreen,
    OpenInBrowser,
    Reload,
}

/// Which part of the UI receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Browsing the grid with navigation keys.
    Grid,
    /// Typing into the search box.
    Search,
    /// A game is open in the player.
    Player,
    /// The help overlay is shown.
    Help,
}

/// Maps a key press to an action, if it means anything in this focus.
pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match focus {
        Focus::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::CloseHelp),
            _ => None,
        },
        Focus::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::BlurSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::SearchInput(c))
            }
            _ => None,
        },
        Focus::Grid => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Tab => Some(Action::FocusSearch),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Enter => Some(Action::SelectHighlighted),
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Esc => Some(Action::ClearSearch),
            _ => None,
        },
        Focus::Player => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Some(Action::Home),
            KeyCode::Char('f') => Some(Action::ToggleFullscreen),
            KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenInBrowser),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_type_into_search() {
        assert_eq!(
            map_key(Focus::Search, key(KeyCode::Char('q'))),
            Some(Action::SearchInput('q'))
        );
        assert_eq!(
            map_key(Focus::Grid, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_chorded_letters_do_not_type_into_search() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(map_key(Focus::Search, ctrl_a), None);
        assert_eq!(map_key(Focus::Search, alt_x), None);

        let shift_s = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(map_key(Focus::Search, shift_s), Some(Action::SearchInput('S')));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [Focus::Grid, Focus::Search, Focus::Player, Focus::Help] {
            assert_eq!(map_key(focus, ctrl_c), Some(Action::Quit));
        }
    }

    #[test]
    fn test_escape_depends_on_focus() {
        assert_eq!(map_key(Focus::Search, key(KeyCode::Esc)), Some(Action::BlurSearch));
        assert_eq!(map_key(Focus::Player, key(KeyCode::Esc)), Some(Action::Home));
        assert_eq!(map_key(Focus::Help, key(KeyCode::Esc)), Some(Action::CloseHelp));
        assert_eq!(map_key(Focus::Grid, key(KeyCode::Esc)), Some(Action::ClearSearch));
    }

    #[test]
    fn test_player_keys() {
        assert_eq!(
            map_key(Focus::Player, key(KeyCode::Char('f'))),
            Some(Action::ToggleFullscreen)
        );
        assert_eq!(
            map_key(Focus::Player, key(KeyCode::Char('o'))),
            Some(Action::OpenInBrowser)
        );
        assert_eq!(map_key(Focus::Player, key(KeyCode::Char('j'))), None);
    }
}
