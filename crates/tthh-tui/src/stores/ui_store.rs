/// UIStore manages UI-specific state (active tab, help, messages)
use crate::actions::{Action, TabId};
use std::sync::{Arc, PoisonError, RwLock};

/// Internal state for UI
#[derive(Debug, Clone)]
pub struct UIState {
    /// Currently active tab
    pub active_tab: TabId,

    /// Whether help overlay is visible
    pub show_help: bool,

    /// Error message to display (if any)
    pub error_message: Option<String>,

    /// Confirmation of the last submitted request
    pub status_message: Option<String>,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            active_tab: TabId::Form,
            show_help: false,
            error_message: None,
            status_message: None,
            should_exit: false,
        }
    }
}

/// Store that holds UI-related state
#[derive(Clone, Default)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::SwitchTab(tab_id) => {
                state.active_tab = *tab_id;
            }

            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::RequestSubmitted(request) => {
                state.error_message = None;
                state.status_message = Some(format!("Solicitud lista: {}", request.summary()));
            }

            Action::ShowError(message) => {
                state.error_message = Some(message.clone());
                state.status_message = None;
            }

            Action::ClearError | Action::ResetForm => {
                state.error_message = None;
                state.status_message = None;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsenceKind, AbsenceRequest};
    use chrono::NaiveDate;

    #[test]
    fn test_initial_state() {
        let store = UIStore::new();
        let state = store.get_state();
        assert_eq!(state.active_tab, TabId::Form);
        assert!(!state.show_help);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_switch_tab_and_help() {
        let store = UIStore::new();
        store.reduce(&Action::SwitchTab(TabId::Logs));
        store.reduce(&Action::ToggleHelp);
        let state = store.get_state();
        assert_eq!(state.active_tab, TabId::Logs);
        assert!(state.show_help);

        store.reduce(&Action::ToggleHelp);
        assert!(!store.get_state().show_help);
    }

    #[test]
    fn test_error_and_status_replace_each_other() {
        let store = UIStore::new();
        store.reduce(&Action::ShowError("end date is required".to_string()));
        assert_eq!(
            store.get_state().error_message.as_deref(),
            Some("end date is required")
        );

        store.reduce(&Action::RequestSubmitted(AbsenceRequest {
            employee: "Ana".to_string(),
            kind: AbsenceKind::Vacation,
            start_date: NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
            end_date: "2025-05-15".to_string(),
            days: 1,
        }));
        let state = store.get_state();
        assert_eq!(state.error_message, None);
        assert_eq!(
            state.status_message.as_deref(),
            Some("Solicitud lista: Vacaciones del 15/05/25 (1 día)")
        );
    }

    #[test]
    fn test_quit() {
        let store = UIStore::new();
        store.reduce(&Action::Quit);
        assert!(store.should_exit());
    }
}
