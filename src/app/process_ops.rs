//! Process actions (terminate, suspend, resume)
//!
//! These only edit the simulated registry; nothing is sent to the OS.

use crate::monitor::ProcessStatus;

use super::state::App;
use super::ViewMode;

impl App {
    /// Requests to terminate the currently selected process (shows confirmation)
    pub fn request_kill(&mut self) {
        let (pid, name) = match self.selected() {
            Some(process) => (process.pid, process.name.clone()),
            None => return,
        };

        self.pending_kill_pid = Some(pid);
        self.pending_kill_name = Some(name);
        self.view_mode = ViewMode::ConfirmKill;
    }

    /// Confirms and executes the pending terminate
    pub fn confirm_kill(&mut self) {
        let pid = match self.pending_kill_pid {
            Some(p) => p,
            None => return,
        };
        let name = self.pending_kill_name.clone().unwrap_or_default();

        if self.dashboard.terminate(pid) {
            self.status_message = Some(format!("Process {} ({}) has been terminated", name, pid));
        } else {
            self.status_message = Some(format!("Process {} is already gone", pid));
        }

        self.cancel_kill();
        self.refresh_view();
    }

    /// Cancels the pending terminate
    pub fn cancel_kill(&mut self) {
        self.view_mode = ViewMode::ProcessList;
        self.pending_kill_pid = None;
        self.pending_kill_name = None;
    }

    /// Suspends a running process, resumes anything else.
    ///
    /// Zombies cannot be resumed from the UI even though the registry
    /// would accept it.
    pub fn toggle_suspend(&mut self) {
        let (pid, name, status) = match self.selected() {
            Some(process) => (process.pid, process.name.clone(), process.status),
            None => return,
        };

        match status {
            ProcessStatus::Running => {
                self.dashboard.suspend(pid);
                self.status_message = Some(format!("Process {} ({}) has been suspended", name, pid));
            }
            status if !status.is_resumable() => {
                self.status_message = Some(format!("Cannot resume {} process {} ({})", status, name, pid));
            }
            _ => {
                self.dashboard.resume(pid);
                self.status_message = Some(format!("Process {} ({}) has been resumed", name, pid));
            }
        }

        self.refresh_view();
    }
}
