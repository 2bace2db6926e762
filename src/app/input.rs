//! Input/keyboard event handling
//!
//! This module handles all keyboard input for different application modes:
//! - Normal mode (process list navigation and actions)
//! - Filter mode (text input for filtering)
//! - Confirm kill mode (Y/N confirmation)
//! - Detail view mode
//! - Help overlay

use crossterm::event::{KeyCode, KeyModifiers};

use crate::monitor::SortField;

use super::{App, ViewMode};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Continue running the application
    Continue,
    /// Exit the application
    Exit,
}

impl App {
    /// Routes a key press to the handler for the current mode.
    ///
    /// `page_rows` is the number of table rows visible on screen.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, page_rows: usize) -> KeyAction {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Exit;
        }

        // Clear status message on any key press
        self.status_message = None;

        match self.view_mode {
            ViewMode::Help => self.handle_help_key(code),
            ViewMode::ConfirmKill => self.handle_confirm_kill_key(code),
            ViewMode::FilterInput => self.handle_filter_key(code),
            ViewMode::DetailView => self.handle_detail_view_key(code),
            ViewMode::ProcessList => self.handle_normal_key(code, page_rows),
        }
    }

    /// Handles key events when help overlay is shown
    fn handle_help_key(&mut self, _code: KeyCode) -> KeyAction {
        // Any key closes help
        self.view_mode = ViewMode::ProcessList;
        KeyAction::Continue
    }

    /// Handles key events in confirm kill mode
    fn handle_confirm_kill_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_kill(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_kill(),
            _ => {}
        }
        KeyAction::Continue
    }

    /// Handles key events in filter mode
    fn handle_filter_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.view_mode = ViewMode::ProcessList;
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.apply_filter();
            }
            KeyCode::Char(c) => {
                self.filter.push(c);
                self.apply_filter();
            }
            _ => {}
        }
        KeyAction::Continue
    }

    /// Handles key events in detail view mode
    fn handle_detail_view_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.close_detail_view();
            }
            KeyCode::Char('k') | KeyCode::Char('K') => {
                // Allow terminating from detail view
                self.close_detail_view();
                self.request_kill();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.toggle_suspend();
            }
            _ => {}
        }
        KeyAction::Continue
    }

    /// Handles key events in normal mode (process list).
    fn handle_normal_key(&mut self, code: KeyCode, page_rows: usize) -> KeyAction {
        let page = isize::try_from(page_rows).unwrap_or(isize::MAX);
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Exit,
            KeyCode::Char('k') | KeyCode::Char('K') => self.request_kill(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.toggle_suspend(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.cycle_sort(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.toggle_sort_order(),
            KeyCode::Char(c @ '1'..='7') => {
                let index = (c as usize) - ('1' as usize);
                self.request_sort(SortField::ALL[index]);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_processes(),
            KeyCode::Char('/') => self.view_mode = ViewMode::FilterInput,
            KeyCode::Char('?') => self.view_mode = ViewMode::Help,
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Enter => self.open_detail_view(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-page),
            KeyCode::PageDown => self.move_selection(page),
            KeyCode::Home => self.select_index(0),
            KeyCode::End => self.select_index(usize::MAX),
            _ => {}
        }
        KeyAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_app;
    use crate::monitor::{SortDirection, SortSpec};

    fn press(app: &mut App, code: KeyCode) -> KeyAction {
        app.handle_key(code, KeyModifiers::NONE, 10)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Exit);
        assert_eq!(
            app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL, 10),
            KeyAction::Exit
        );
    }

    #[test]
    fn test_typing_filter_updates_live() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.view_mode.is_filter_input());

        for c in "ngi".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.visible.len(), 1);

        // 'q' is text while editing, not quit
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Continue);
        assert!(app.visible.is_empty());
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.visible.len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view_mode, ViewMode::ProcessList);
        assert_eq!(app.dashboard.filter().term(), "ngi");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.visible.len(), 4);
    }

    #[test]
    fn test_number_keys_request_sort() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.dashboard.sort(),
            SortSpec::new(SortField::Pid, SortDirection::Ascending)
        );
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.dashboard.sort(),
            SortSpec::new(SortField::Pid, SortDirection::Descending)
        );
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.dashboard.sort().field, SortField::Priority);
    }

    #[test]
    fn test_kill_flow_through_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('k'));
        assert!(app.view_mode.is_confirm_kill());
        press(&mut app, KeyCode::Char('x'));
        assert!(app.view_mode.is_confirm_kill(), "other keys keep the prompt");
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.dashboard.registry().len(), 3);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = test_app();
        app.handle_key(KeyCode::PageDown, KeyModifiers::NONE, 2);
        assert_eq!(app.selected_index, 2);
        app.handle_key(KeyCode::PageDown, KeyModifiers::NONE, 2);
        assert_eq!(app.selected_index, 3);
        app.handle_key(KeyCode::PageUp, KeyModifiers::NONE, 2);
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected().map(|p| p.pid), Some(1002));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 3);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected().map(|p| p.pid), Some(1001));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.view_mode.is_help());
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.view_mode, ViewMode::ProcessList);
    }

    #[test]
    fn test_detail_view_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.view_mode.is_detail_view());
        press(&mut app, KeyCode::Char('k'));
        assert!(app.view_mode.is_confirm_kill());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view_mode, ViewMode::ProcessList);
    }
}
