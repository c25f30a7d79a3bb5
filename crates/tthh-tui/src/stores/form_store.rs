/// Store for the absence request form and its date fields
use crate::actions::{Action, FieldId, FieldKey};
use crate::models::{AbsenceKind, AbsenceRequest, Employee, FormError};
use chrono::NaiveDate;
use std::sync::{Arc, PoisonError, RwLock};
use tthh_core::{
    Change, CommitOutcome, DateFieldProps, DateInput, DateStringInput, InputConfig, format_iso,
};

/// State of the absence form
#[derive(Debug, Clone)]
pub struct FormState {
    /// Employee the request is for
    pub employee: Employee,

    /// First day of the absence, held as a date
    pub start_date: DateInput,

    /// Last day of the absence, held as an ISO string
    pub end_date: DateStringInput,

    /// Read-only, shown for reference
    pub hire_date: DateInput,

    pub kind: AbsenceKind,

    /// Field receiving keystrokes, if any
    pub focused_field: Option<FieldId>,

    /// Last request that passed validation
    pub last_submitted: Option<AbsenceRequest>,
}

impl FormState {
    pub fn new(config: &InputConfig, employee: Employee) -> Self {
        let hire_date = DateInput::new(employee.hire_date)
            .with_config(config)
            .with_props(DateFieldProps {
                id: Some("fecha_ingreso".to_string()),
                placeholder: "--/--/--".to_string(),
                disabled: true,
            });

        Self {
            start_date: DateInput::new(None)
                .with_config(config)
                .with_id("fecha_inicio"),
            end_date: DateStringInput::new(None)
                .with_config(config)
                .with_id("fecha_fin"),
            hire_date,
            kind: AbsenceKind::default(),
            focused_field: None,
            last_submitted: None,
            employee,
        }
    }

    /// The field whose calendar panel is open, with its highlighted day
    pub fn open_calendar(&self) -> Option<(FieldId, NaiveDate)> {
        if let Some(day) = self.start_date.calendar_cursor() {
            return Some((FieldId::StartDate, day));
        }
        self.end_date
            .calendar_cursor()
            .map(|day| (FieldId::EndDate, day))
    }

    /// Validate the canonical values and assemble the request
    pub fn build_request(&self) -> Result<AbsenceRequest, FormError> {
        let start = self.start_date.date().ok_or(FormError::MissingStartDate)?;
        let end = self.end_date.date().ok_or(FormError::MissingEndDate)?;

        if end < start {
            return Err(FormError::EndBeforeStart { start, end });
        }
        if let Some(hire_date) = self.hire_date.date() {
            if start < hire_date {
                return Err(FormError::BeforeHireDate { start, hire_date });
            }
        }

        Ok(AbsenceRequest {
            employee: self.employee.name.clone(),
            kind: self.kind,
            start_date: start,
            end_date: format_iso(end),
            days: (end - start).num_days() + 1,
        })
    }

    fn move_focus(&mut self, target: Option<FieldId>) {
        if target == Some(FieldId::HireDate) {
            log::debug!("{} is read-only, focus unchanged", FieldId::HireDate.label());
            return;
        }
        if self.focused_field == target {
            return;
        }

        match self.focused_field {
            Some(FieldId::StartDate) => {
                let commit = self.start_date.blur();
                log_commit(FieldId::StartDate, commit.outcome);
                if let Some(change) = commit.change {
                    self.start_date_changed(change);
                }
            }
            Some(FieldId::EndDate) => {
                let commit = self.end_date.blur();
                log_commit(FieldId::EndDate, commit.outcome);
                if let Some(change) = commit.change {
                    self.end_date_changed(change);
                }
            }
            _ => {}
        }

        self.focused_field = target;
        match target {
            Some(FieldId::StartDate) => self.start_date.focus(),
            Some(FieldId::EndDate) => self.end_date.focus(),
            _ => {}
        }
    }

    fn apply_key(&mut self, key: FieldKey) {
        match self.focused_field {
            Some(FieldId::StartDate) => {
                if let Some(change) = self.start_date.handle(key.into_event()) {
                    self.start_date_changed(change);
                }
            }
            Some(FieldId::EndDate) => {
                if let Some(change) = self.end_date.handle(key.into_event()) {
                    self.end_date_changed(change);
                }
            }
            _ => {}
        }
    }

    /// onChange of the start date. An empty end date follows the start date
    fn start_date_changed(&mut self, change: Change<NaiveDate>) {
        log::info!("{} changed: {:?}", FieldId::StartDate.label(), change);
        if let Change::Set(start) = change {
            if self.end_date.value().is_none() {
                self.end_date.sync_value(Some(format_iso(start)));
            }
        }
    }

    /// onChange of the end date
    fn end_date_changed(&mut self, change: Change<String>) {
        log::info!("{} changed: {:?}", FieldId::EndDate.label(), change);
    }
}

fn log_commit(field: FieldId, outcome: CommitOutcome) {
    log::debug!("{} left with {:?}", field.label(), outcome);
}

/// Store for the absence form
#[derive(Clone)]
pub struct FormStore {
    state: Arc<RwLock<FormState>>,
    config: InputConfig,
}

impl FormStore {
    pub fn new(config: InputConfig, employee: Employee) -> Self {
        Self {
            state: Arc::new(RwLock::new(FormState::new(&config, employee))),
            config,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> FormState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn build_request(&self) -> Result<AbsenceRequest, FormError> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .build_request()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::FocusField(field) => state.move_focus(Some(*field)),

            Action::FocusNext => {
                let next = FieldId::next(state.focused_field);
                state.move_focus(Some(next));
            }

            Action::FocusPrev => {
                let prev = FieldId::prev(state.focused_field);
                state.move_focus(Some(prev));
            }

            // leaving the form commits whatever is being typed
            Action::BlurField | Action::SubmitRequest | Action::SwitchTab(_) => {
                state.move_focus(None)
            }

            Action::FieldKey(key) => state.apply_key(*key),

            Action::CycleAbsenceKind => {
                state.kind = state.kind.next();
            }

            Action::RequestSubmitted(request) => {
                state.last_submitted = Some(request.clone());
            }

            Action::ResetForm => {
                let employee = state.employee.clone();
                *state = FormState::new(&self.config, employee);
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tthh_core::CalendarStep;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> FormStore {
        let config = InputConfig {
            reference_year: Some(2025),
            ..InputConfig::default()
        };
        FormStore::new(config, Employee::new("Ana Torres", Some(ymd(2020, 3, 1))))
    }

    fn type_keys(store: &FormStore, text: &str) {
        for c in text.chars() {
            store.reduce(&Action::FieldKey(FieldKey::Char(c)));
        }
    }

    #[test]
    fn test_tab_commits_field_being_left() {
        let store = store();
        store.reduce(&Action::FocusNext);
        type_keys(&store, "1505");
        assert_eq!(store.get_state().start_date.display(), "15/05/");

        store.reduce(&Action::FocusNext);
        let state = store.get_state();
        assert_eq!(state.focused_field, Some(FieldId::EndDate));
        assert_eq!(state.start_date.value(), Some(&ymd(2025, 5, 15)));
        assert_eq!(state.start_date.display(), "15/05/25");
    }

    #[test]
    fn test_end_date_follows_start_date_when_empty() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "02062025");
        store.reduce(&Action::BlurField);

        let state = store.get_state();
        assert_eq!(state.end_date.value().map(String::as_str), Some("2025-06-02"));
        assert_eq!(state.end_date.display(), "02/06/25");
    }

    #[test]
    fn test_end_date_is_not_overwritten_once_set() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::EndDate));
        type_keys(&store, "300625");
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "010625");
        store.reduce(&Action::BlurField);

        let state = store.get_state();
        assert_eq!(state.end_date.value().map(String::as_str), Some("2025-06-30"));
    }

    #[test]
    fn test_invalid_text_reverts_on_tab() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "100124");
        store.reduce(&Action::FieldKey(FieldKey::Enter));
        for _ in 0..8 {
            store.reduce(&Action::FieldKey(FieldKey::Backspace));
        }
        type_keys(&store, "9999");
        store.reduce(&Action::FocusNext);

        let state = store.get_state();
        assert_eq!(state.start_date.display(), "10/01/24");
        assert_eq!(state.start_date.value(), Some(&ymd(2024, 1, 10)));
    }

    #[test]
    fn test_calendar_pick() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::EndDate));
        type_keys(&store, "010725");
        store.reduce(&Action::FieldKey(FieldKey::Enter));
        store.reduce(&Action::FieldKey(FieldKey::OpenCalendar));
        assert_eq!(
            store.get_state().open_calendar(),
            Some((FieldId::EndDate, ymd(2025, 7, 1)))
        );

        store.reduce(&Action::FieldKey(FieldKey::Calendar(CalendarStep::NextWeek)));
        store.reduce(&Action::FieldKey(FieldKey::PickHighlighted));

        let state = store.get_state();
        assert_eq!(state.open_calendar(), None);
        assert_eq!(state.end_date.value().map(String::as_str), Some("2025-07-08"));
        assert_eq!(state.end_date.display(), "08/07/25");
    }

    #[test]
    fn test_hire_date_is_read_only() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::HireDate));
        let state = store.get_state();
        assert_eq!(state.focused_field, None);
        assert_eq!(state.hire_date.display(), "01/03/20");
        assert!(state.hire_date.is_disabled());
        assert_eq!(state.hire_date.id(), Some("fecha_ingreso"));
    }

    #[test]
    fn test_missing_hire_date_shows_dashes() {
        let store = FormStore::new(InputConfig::default(), Employee::new("Luis Gil", None));
        let state = store.get_state();
        assert_eq!(state.hire_date.date(), None);
        assert_eq!(state.hire_date.text_or_placeholder(), "--/--/--");
        assert!(state.hire_date.is_disabled());
        assert_eq!(state.start_date.text_or_placeholder(), "DD/MM/AA");
    }

    #[test]
    fn test_submit_validation() {
        let store = store();
        assert_eq!(store.build_request(), Err(FormError::MissingStartDate));

        store.reduce(&Action::FocusField(FieldId::EndDate));
        type_keys(&store, "010625");
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "100625");
        store.reduce(&Action::SubmitRequest);

        assert_eq!(
            store.build_request(),
            Err(FormError::EndBeforeStart {
                start: ymd(2025, 6, 10),
                end: ymd(2025, 6, 1)
            })
        );
    }

    #[test]
    fn test_start_before_hire_date_is_rejected() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "01012019");
        store.reduce(&Action::SubmitRequest);

        assert_eq!(
            store.build_request(),
            Err(FormError::BeforeHireDate {
                start: ymd(2019, 1, 1),
                hire_date: ymd(2020, 3, 1)
            })
        );
    }

    #[test]
    fn test_valid_request() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "1505");
        store.reduce(&Action::FocusNext);
        // end date was filled in from the start date; extend it
        for _ in 0..8 {
            store.reduce(&Action::FieldKey(FieldKey::Backspace));
        }
        type_keys(&store, "190525");
        store.reduce(&Action::CycleAbsenceKind);
        store.reduce(&Action::SubmitRequest);

        let request = store.build_request().unwrap();
        assert_eq!(request.employee, "Ana Torres");
        assert_eq!(request.kind, AbsenceKind::SickLeave);
        assert_eq!(request.start_date, ymd(2025, 5, 15));
        assert_eq!(request.end_date, "2025-05-19");
        assert_eq!(request.days, 5);
        assert_eq!(store.get_state().focused_field, None);
    }

    #[test]
    fn test_reset_keeps_employee() {
        let store = store();
        store.reduce(&Action::FocusField(FieldId::StartDate));
        type_keys(&store, "150525");
        store.reduce(&Action::ResetForm);

        let state = store.get_state();
        assert_eq!(state.start_date.value(), None);
        assert_eq!(state.focused_field, None);
        assert_eq!(state.employee.name, "Ana Torres");
    }
}
