//! Transient notifications.

/// Visual severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Visible alerts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub alerts: Vec<Alert>,
    next_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertAction {
    Show { message: String, severity: Severity },
    Hide(u64),
    Clear,
}

impl AlertAction {
    pub fn show(message: impl Into<String>, severity: Severity) -> Self {
        Self::Show {
            message: message.into(),
            severity,
        }
    }
}

impl AlertState {
    pub fn apply(&mut self, action: AlertAction) {
        match action {
            AlertAction::Show { message, severity } => {
                self.next_id += 1;
                self.alerts.push(Alert {
                    id: self.next_id,
                    message,
                    severity,
                });
            }
            AlertAction::Hide(id) => self.alerts.retain(|alert| alert.id != id),
            AlertAction::Clear => self.alerts.clear(),
        }
    }
}
