/// Blocking page dialogs (`alert` / `confirm`).
pub trait Dialogs {
    fn alert(&mut self, message: &str);

    /// Returns `true` when the user accepted.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Dialogs answered from a fixed script, remembering everything shown.
/// Used for headless runs and tests.
#[derive(Debug, Clone)]
pub struct ScriptedDialogs {
    pub accept_confirm: bool,
    pub alerts: Vec<String>,
    pub confirms: Vec<String>,
}

impl ScriptedDialogs {
    pub fn accepting() -> Self {
        Self {
            accept_confirm: true,
            alerts: Vec::new(),
            confirms: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self {
            accept_confirm: false,
            ..Self::accepting()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.accept_confirm
    }
}

/// Dialogs that only log; confirmations are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDialogs;

impl Dialogs for LogDialogs {
    fn alert(&mut self, message: &str) {
        tracing::info!(%message, "alert");
    }

    fn confirm(&mut self, message: &str) -> bool {
        tracing::info!(%message, "confirm accepted");
        true
    }
}
