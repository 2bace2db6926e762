//! Detail view management

use crate::monitor::ProcessRecord;

use super::state::App;
use super::ViewMode;

impl App {
    /// Opens detail view for the currently selected process
    pub fn open_detail_view(&mut self) {
        let pid = match self.selected() {
            Some(process) => process.pid,
            None => return,
        };
        self.view_mode = ViewMode::DetailView;
        self.detail_view_pid = Some(pid);
    }

    /// Closes the detail view and returns to process list
    pub fn close_detail_view(&mut self) {
        if self.view_mode.is_detail_view() {
            self.view_mode = ViewMode::ProcessList;
        }
        self.detail_view_pid = None;
    }

    /// Live record of the process in the detail view
    pub fn detail_record(&self) -> Option<&ProcessRecord> {
        self.detail_view_pid
            .and_then(|pid| self.dashboard.registry().get(pid))
    }
}
