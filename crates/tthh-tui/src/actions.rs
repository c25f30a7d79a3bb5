/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use crate::models::AbsenceRequest;
use tthh_core::{CalendarStep, DateFieldEvent};

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// User switched to a different tab
    SwitchTab(TabId),

    /// User toggled the help overlay
    ToggleHelp,

    /// Move input focus to a specific field
    FocusField(FieldId),

    /// Tab / Shift+Tab between form fields
    FocusNext,
    FocusPrev,

    /// Leave the focused field without moving to another one
    BlurField,

    /// Key routed to the focused date field
    FieldKey(FieldKey),

    /// Cycle the absence kind selector
    CycleAbsenceKind,

    /// Validate the form and hand the request to effects
    SubmitRequest,

    /// Start over with an empty form
    ResetForm,

    // ===== System/Effect Actions (emitted by Effects) =====
    /// Request passed validation and was handed off
    RequestSubmitted(AbsenceRequest),

    /// Generic error to display to user
    ShowError(String),

    /// Clear any displayed errors
    ClearError,

    /// Application should exit
    Quit,
}

/// Identifies different tabs in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Form,
    Logs,
}

/// Focusable inputs of the absence form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    StartDate,
    EndDate,
    Kind,
    HireDate,
}

impl FieldId {
    /// Fields reachable with Tab. The hire date is read-only
    pub const FOCUS_ORDER: [FieldId; 3] = [FieldId::StartDate, FieldId::EndDate, FieldId::Kind];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StartDate => "Fecha inicio",
            Self::EndDate => "Fecha fin",
            Self::Kind => "Tipo",
            Self::HireDate => "Fecha de ingreso",
        }
    }

    pub fn is_date(&self) -> bool {
        !matches!(self, Self::Kind)
    }

    pub fn next(current: Option<FieldId>) -> FieldId {
        let order = Self::FOCUS_ORDER;
        match current.and_then(|f| order.iter().position(|o| *o == f)) {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        }
    }

    pub fn prev(current: Option<FieldId>) -> FieldId {
        let order = Self::FOCUS_ORDER;
        match current.and_then(|f| order.iter().position(|o| *o == f)) {
            Some(0) | None => order[order.len() - 1],
            Some(i) => order[i - 1],
        }
    }
}

/// Keystrokes a date field understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Char(char),
    Backspace,
    Enter,
    OpenCalendar,
    CloseCalendar,
    Calendar(CalendarStep),
    PickHighlighted,
}

impl FieldKey {
    pub fn into_event<V>(self) -> DateFieldEvent<V> {
        match self {
            Self::Char(c) => DateFieldEvent::TypeChar(c),
            Self::Backspace => DateFieldEvent::Backspace,
            Self::Enter => DateFieldEvent::Submit,
            Self::OpenCalendar => DateFieldEvent::OpenCalendar,
            Self::CloseCalendar => DateFieldEvent::CloseCalendar,
            Self::Calendar(step) => DateFieldEvent::StepCalendar(step),
            Self::PickHighlighted => DateFieldEvent::SelectHighlighted,
        }
    }
}
