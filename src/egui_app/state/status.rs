/// Severity of the status-bar message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    pub tone: StatusTone,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Choose a facility to browse units".into(),
            tone: StatusTone::Idle,
        }
    }

    pub fn badge_label(&self) -> &'static str {
        match self.tone {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Loading",
            StatusTone::Info => "Ready",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}
