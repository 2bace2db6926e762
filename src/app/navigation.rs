//! Cursor movement over the visible rows
//!
//! Every move ends in `select_index`, so the cursor can never point past the
//! last row, and an empty table leaves it at zero.

use super::state::App;

impl App {
    /// Puts the cursor on row `index`, clamped to the visible rows.
    pub fn select_index(&mut self, index: usize) {
        self.selected_index = index.min(self.visible.len().saturating_sub(1));
    }

    /// Moves the cursor by `delta` rows. Negative values move up.
    pub fn move_selection(&mut self, delta: isize) {
        self.select_index(self.selected_index.saturating_add_signed(delta));
    }

    /// Moves the cursor to the row showing `pid`, if it is visible.
    pub fn select_pid(&mut self, pid: u32) -> bool {
        match self.visible.iter().position(|p| p.pid == pid) {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::tests::test_app;

    #[test]
    fn test_select_index_clamps_to_last_row() {
        let mut app = test_app();
        app.select_index(usize::MAX);
        assert_eq!(app.selected_index, 3);
        app.select_index(1);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_relative_moves_stay_in_bounds() {
        let mut app = test_app();
        app.move_selection(-1);
        assert_eq!(app.selected_index, 0);

        app.move_selection(2);
        assert_eq!(app.selected_index, 2);
        app.move_selection(10);
        assert_eq!(app.selected_index, 3);
        app.move_selection(isize::MIN);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_select_pid() {
        let mut app = test_app();
        assert!(app.select_pid(1002));
        assert_eq!(app.selected().map(|p| p.pid), Some(1002));

        assert!(!app.select_pid(9999));
        assert_eq!(app.selected().map(|p| p.pid), Some(1002));
    }

    #[test]
    fn test_empty_table_keeps_cursor_at_zero() {
        let mut app = test_app();
        app.visible.clear();
        app.select_index(5);
        assert_eq!(app.selected_index, 0);
        app.move_selection(3);
        assert_eq!(app.selected_index, 0);
        assert!(app.selected().is_none());
    }
}
