//! Which screen owns the keyboard

/// Exactly one mode is active; it decides how keys are routed and what the
/// bottom bar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Dashboard with the process table
    #[default]
    ProcessList,
    /// Editing the filter text; keys are typed into it
    FilterInput,
    /// Waiting for Y/N on a pending terminate
    ConfirmKill,
    DetailView,
    /// Key binding overlay, closed by any key
    Help,
}

impl ViewMode {
    pub fn is_detail_view(self) -> bool {
        self == ViewMode::DetailView
    }

    pub fn is_help(self) -> bool {
        self == ViewMode::Help
    }

    pub fn is_filter_input(self) -> bool {
        self == ViewMode::FilterInput
    }

    pub fn is_confirm_kill(self) -> bool {
        self == ViewMode::ConfirmKill
    }

    /// Key hints shown on the last line while this mode is active
    pub fn key_hint(self) -> &'static str {
        match self {
            ViewMode::ProcessList => {
                " ?:Help | q:Quit | Enter:Details | k:Kill | p:Suspend/Resume | s:Sort | 1-7:Column | r:Reverse | /:Filter | e:Export"
            }
            ViewMode::FilterInput => " Type to filter | Enter/Esc:Done",
            ViewMode::ConfirmKill => " Y:Confirm | N/Esc:Cancel",
            ViewMode::DetailView => " Esc/Enter: Back to process list  |  k: Terminate  |  p: Suspend/Resume",
            ViewMode::Help => " Press any key to close",
        }
    }
}
