//! Application state and core logic

use crate::monitor::{Dashboard, ProcessRecord, SortField};

use super::ViewMode;

/// Interactive state layered over a `Dashboard`
pub struct App {
    /// Monitor state (registry, history, timers)
    pub dashboard: Dashboard,
    /// Sorted and filtered rows currently shown
    pub visible: Vec<ProcessRecord>,
    /// Currently selected row index
    pub selected_index: usize,
    /// Scroll offset for the process list
    pub scroll_offset: usize,
    /// Status message to display (if any)
    pub status_message: Option<String>,
    /// Filter text being edited
    pub filter: String,
    /// Current view/input mode
    pub view_mode: ViewMode,
    /// PID of process pending terminate confirmation
    pub pending_kill_pid: Option<u32>,
    /// Name of process pending terminate confirmation
    pub pending_kill_name: Option<String>,
    /// PID of process in detail view
    pub detail_view_pid: Option<u32>,
}

impl App {
    /// Creates the interactive state around an existing dashboard.
    pub fn new(dashboard: Dashboard) -> Self {
        let filter = dashboard.filter().term().to_string();
        let mut app = Self {
            dashboard,
            visible: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            status_message: None,
            filter,
            view_mode: ViewMode::default(),
            pending_kill_pid: None,
            pending_kill_name: None,
            detail_view_pid: None,
        };
        app.refresh_view();
        app
    }

    /// Runs due ticks and rebuilds the visible rows if anything changed.
    pub fn on_tick(&mut self) {
        if self.dashboard.tick().any() {
            self.refresh_view();
        }
    }

    /// Recomputes visible rows from the dashboard.
    ///
    /// The selection follows the previously selected pid when it is still
    /// visible, otherwise it is clamped to the list.
    pub fn refresh_view(&mut self) {
        let selected_pid = self.selected().map(|p| p.pid);
        self.visible = self.dashboard.processes();

        let followed = selected_pid.is_some_and(|pid| self.select_pid(pid));
        if !followed {
            self.select_index(self.selected_index);
        }

        if let Some(pid) = self.detail_view_pid {
            if self.dashboard.registry().get(pid).is_none() {
                self.status_message = Some(format!("Process {} no longer exists", pid));
                self.close_detail_view();
            }
        }
    }

    /// The row under the cursor
    pub fn selected(&self) -> Option<&ProcessRecord> {
        self.visible.get(self.selected_index)
    }

    /// Applies the edited filter text.
    pub fn apply_filter(&mut self) {
        self.dashboard.set_filter(&self.filter);
        self.refresh_view();
    }

    /// Clears the filter.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.apply_filter();
    }

    /// Sorts by `field`; the active column reverses instead.
    pub fn request_sort(&mut self, field: SortField) {
        self.dashboard.set_sort(field);
        self.refresh_view();
    }

    /// Cycles to the next sort column.
    ///
    /// Order: PID → Process → CPU% → Memory → User → Status → Priority
    pub fn cycle_sort(&mut self) {
        let next = self.dashboard.sort().field.next();
        self.request_sort(next);
    }

    /// Toggles sort order between ascending and descending.
    pub fn toggle_sort_order(&mut self) {
        let current = self.dashboard.sort().field;
        self.request_sort(current);
    }

    /// Shows the total or filtered process count
    pub fn process_count_label(&self) -> String {
        if self.dashboard.filter().is_empty() {
            format!("Processes: {}", self.dashboard.registry().len())
        } else {
            format!(
                "Showing: {}/{}",
                self.visible.len(),
                self.dashboard.registry().len()
            )
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::monitor::process::ProcessStatus;
    use crate::monitor::source::testing::{record, ScriptedSource};
    use crate::monitor::{DashboardConfig, SortDirection, SortSpec};

    pub(crate) fn test_app() -> App {
        let source = ScriptedSource::with_processes(vec![
            record(1000, "chrome", 5.0, ProcessStatus::Running),
            record(1001, "nginx", 9.0, ProcessStatus::Sleeping),
            record(1002, "sshd", 1.0, ProcessStatus::Stopped),
            record(1003, "java", 3.0, ProcessStatus::Zombie),
        ]);
        App::new(Dashboard::new(&DashboardConfig::default(), Box::new(source)))
    }

    fn visible_pids(app: &App) -> Vec<u32> {
        app.visible.iter().map(|p| p.pid).collect()
    }

    #[test]
    fn test_initial_view_uses_default_sort() {
        let app = test_app();
        assert_eq!(visible_pids(&app), vec![1001, 1000, 1003, 1002]);
        assert_eq!(app.selected().map(|p| p.pid), Some(1001));
    }

    #[test]
    fn test_selection_follows_pid_across_resort() {
        let mut app = test_app();
        app.selected_index = 1; // chrome
        app.request_sort(SortField::Pid);
        assert_eq!(visible_pids(&app), vec![1000, 1001, 1002, 1003]);
        assert_eq!(app.selected().map(|p| p.pid), Some(1000));
    }

    #[test]
    fn test_toggle_and_cycle_sort() {
        let mut app = test_app();
        app.toggle_sort_order();
        assert_eq!(
            app.dashboard.sort(),
            SortSpec::new(SortField::Cpu, SortDirection::Ascending)
        );

        app.cycle_sort();
        assert_eq!(
            app.dashboard.sort(),
            SortSpec::new(SortField::Memory, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_filter_clamps_selection() {
        let mut app = test_app();
        app.selected_index = 3;
        app.filter = "nginx".to_string();
        app.apply_filter();
        assert_eq!(visible_pids(&app), vec![1001]);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.process_count_label(), "Showing: 1/4");

        app.clear_filter();
        assert_eq!(app.visible.len(), 4);
        assert_eq!(app.process_count_label(), "Processes: 4");
    }

    #[test]
    fn test_filter_with_no_matches() {
        let mut app = test_app();
        app.filter = "nothing-matches".to_string();
        app.apply_filter();
        assert!(app.visible.is_empty());
        assert_eq!(app.selected_index, 0);
        assert!(app.selected().is_none());
    }
}
