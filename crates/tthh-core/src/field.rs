/// The date field: a display string being edited and the canonical value it
/// projects, kept in step by focus, commit and calendar selection.
use crate::calendar::{self, CalendarStep};
use crate::canonical::{Canonical, IsoStringValue, NaiveDateValue};
use crate::config::{InputConfig, TTHH_DATE_PLACEHOLDER};
use crate::exceptions::DateParseError;
use crate::filter::{format_deletion, format_input};
use crate::parser::{format_display, parse_date_text_with_year};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Field holding a `chrono::NaiveDate`
pub type DateInput = DateField<NaiveDateValue>;

/// Field holding an ISO `YYYY-MM-DD` string
pub type DateStringInput = DateField<IsoStringValue>;

/// Configuration surface a form sets on a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFieldProps {
    /// association for external labels
    #[serde(default)]
    pub id: Option<String>,

    /// shown while the display string is empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// suppresses all interaction
    #[serde(default)]
    pub disabled: bool,
}

fn default_placeholder() -> String {
    TTHH_DATE_PLACEHOLDER.to_string()
}

impl Default for DateFieldProps {
    fn default() -> Self {
        Self {
            id: None,
            placeholder: default_placeholder(),
            disabled: false,
        }
    }
}

/// The value handed to the form's change handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<V> {
    Set(V),
    Cleared,
}

impl<V> Change<V> {
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Set(value) => Some(value),
            Self::Cleared => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// display text parsed and became the canonical value
    Committed,
    /// unparsable text replaced by the previous canonical value
    Reverted,
    /// canonical value emptied
    Cleared,
    /// text untouched since focus, display resynced from the canonical value
    Unchanged,
    /// field is disabled
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit<V> {
    pub outcome: CommitOutcome,
    pub change: Option<Change<V>>,
}

impl<V> Commit<V> {
    fn new(outcome: CommitOutcome, change: Option<Change<V>>) -> Self {
        Self { outcome, change }
    }
}

/// Everything a host can do to a field, for hosts that route input as data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFieldEvent<V> {
    Focus,
    Blur,
    /// full new text of the input after a keystroke or paste
    Input(String),
    TypeChar(char),
    Backspace,
    /// Enter key
    Submit,
    /// value pushed in from the owning form
    Sync(Option<V>),
    OpenCalendar,
    CloseCalendar,
    StepCalendar(CalendarStep),
    SelectDay(NaiveDate),
    SelectHighlighted,
}

#[derive(Debug, Clone)]
pub struct DateField<C: Canonical> {
    props: DateFieldProps,
    value: Option<C::Value>,
    display: String,
    focused: bool,
    /// display edited since the field last matched its canonical value
    dirty: bool,
    /// highlighted day while the calendar panel is open
    calendar: Option<NaiveDate>,
    reference_year: Option<i32>,
    _canonical: PhantomData<C>,
}

impl<C: Canonical> Default for DateField<C> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<C: Canonical> DateField<C> {
    pub fn new(value: Option<C::Value>) -> Self {
        let mut field = Self {
            props: DateFieldProps::default(),
            value,
            display: String::new(),
            focused: false,
            dirty: false,
            calendar: None,
            reference_year: None,
            _canonical: PhantomData,
        };
        field.resync_display();
        field
    }

    /// Apply form-wide settings: placeholder and reference year
    pub fn with_config(mut self, config: &InputConfig) -> Self {
        self.props.placeholder = config.placeholder.clone();
        self.reference_year = config.reference_year;
        self
    }

    pub fn with_props(mut self, props: DateFieldProps) -> Self {
        self.props = props;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.props.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
        if disabled {
            self.calendar = None;
        }
    }

    pub fn props(&self) -> &DateFieldProps {
        &self.props
    }

    pub fn id(&self) -> Option<&str> {
        self.props.id.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    pub fn value(&self) -> Option<&C::Value> {
        self.value.as_ref()
    }

    /// The canonical value as a calendar date
    pub fn date(&self) -> Option<NaiveDate> {
        self.value.as_ref().and_then(C::to_date)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Text to draw: the display string, or the placeholder when it is empty
    pub fn text_or_placeholder(&self) -> &str {
        if self.display.is_empty() {
            &self.props.placeholder
        } else {
            &self.display
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_calendar_open(&self) -> bool {
        self.calendar.is_some()
    }

    /// Highlighted day of the open calendar panel
    pub fn calendar_cursor(&self) -> Option<NaiveDate> {
        self.calendar
    }

    fn effective_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    fn log_name(&self) -> &str {
        self.props.id.as_deref().unwrap_or(C::NAME)
    }

    /// Copy the canonical value into the display string unless the user is
    /// typing
    fn resync_display(&mut self) {
        if !self.focused {
            self.show_value();
        }
    }

    fn show_value(&mut self) {
        self.display = self.date().map(format_display).unwrap_or_default();
        self.dirty = false;
    }

    pub fn focus(&mut self) {
        if self.props.disabled {
            return;
        }
        self.focused = true;
    }

    /// Commit what was typed, then drop focus and resync
    pub fn blur(&mut self) -> Commit<C::Value> {
        if self.props.disabled {
            return Commit::new(CommitOutcome::Ignored, None);
        }
        let commit = self.commit();
        self.focused = false;
        self.calendar = None;
        self.resync_display();
        commit
    }

    /// Enter key: commit immediately and keep focus
    pub fn submit(&mut self) -> Commit<C::Value> {
        self.commit()
    }

    /// Reconcile the display string with the canonical value.
    ///
    /// Parsed text becomes canonical and is normalized to DD/MM/YY. Empty text
    /// clears the value. Anything else reverts to the previous value, or
    /// clears when there is none.
    pub fn commit(&mut self) -> Commit<C::Value> {
        if self.props.disabled {
            return Commit::new(CommitOutcome::Ignored, None);
        }

        // untouched text only stands if it still mirrors the canonical value;
        // a value with no date behind it shows as empty and is cleared below
        let mirrors_value = self.value.is_none() || self.date().is_some();
        if !self.dirty && mirrors_value {
            self.show_value();
            return Commit::new(CommitOutcome::Unchanged, None);
        }
        self.dirty = false;

        match parse_date_text_with_year(&self.display, self.effective_year()) {
            Ok(date) => {
                let value = C::from_date(date);
                self.value = Some(value.clone());
                self.display = format_display(date);
                log::debug!("{} committed {}", self.log_name(), self.display);
                Commit::new(CommitOutcome::Committed, Some(Change::Set(value)))
            }
            Err(DateParseError::Empty) => self.clear(),
            Err(err) => match self.date() {
                Some(previous) => {
                    log::debug!("{}: {}, reverting", self.log_name(), err);
                    self.display = format_display(previous);
                    Commit::new(CommitOutcome::Reverted, None)
                }
                None => {
                    log::debug!("{}: {}, no previous value", self.log_name(), err);
                    self.clear()
                }
            },
        }
    }

    fn clear(&mut self) -> Commit<C::Value> {
        self.display.clear();
        self.value = None;
        log::debug!("{} cleared", self.log_name());
        Commit::new(CommitOutcome::Cleared, Some(Change::Cleared))
    }

    /// Change event carrying the full new text of the input
    pub fn input(&mut self, raw: &str) {
        if self.props.disabled {
            return;
        }
        self.focused = true;
        self.display = format_input(raw);
        self.dirty = true;
    }

    pub fn type_char(&mut self, c: char) {
        let mut raw = self.display.clone();
        raw.push(c);
        self.input(&raw);
    }

    pub fn backspace(&mut self) {
        if self.props.disabled || self.display.is_empty() {
            return;
        }
        self.focused = true;
        let mut raw = self.display.clone();
        raw.pop();
        self.display = format_deletion(&raw);
        self.dirty = true;
    }

    /// Value pushed in by the owning form. Always stored, only shown once
    /// the field is not focused
    pub fn sync_value(&mut self, value: Option<C::Value>) {
        self.value = value;
        self.resync_display();
    }

    pub fn open_calendar(&mut self) {
        if self.props.disabled {
            return;
        }
        self.calendar = Some(self.date().unwrap_or_else(|| Local::now().date_naive()));
    }

    pub fn close_calendar(&mut self) {
        self.calendar = None;
    }

    pub fn toggle_calendar(&mut self) {
        if self.calendar.is_some() {
            self.close_calendar();
        } else {
            self.open_calendar();
        }
    }

    pub fn step_calendar(&mut self, step: CalendarStep) {
        if let Some(cursor) = self.calendar {
            self.calendar = Some(calendar::step(cursor, step));
        }
    }

    /// Pick a day: sets both values, drops typed text, closes the panel
    pub fn select_day(&mut self, date: NaiveDate) -> Option<Change<C::Value>> {
        if self.props.disabled {
            return None;
        }
        let value = C::from_date(date);
        self.value = Some(value.clone());
        self.display = format_display(date);
        self.dirty = false;
        self.calendar = None;
        log::debug!("{} selected {} from calendar", self.log_name(), self.display);
        Some(Change::Set(value))
    }

    /// Pick the highlighted day of the open panel
    pub fn select_highlighted(&mut self) -> Option<Change<C::Value>> {
        let date = self.calendar?;
        self.select_day(date)
    }

    /// Route one event, returning the change to report to the form if any
    pub fn handle(&mut self, event: DateFieldEvent<C::Value>) -> Option<Change<C::Value>> {
        match event {
            DateFieldEvent::Focus => {
                self.focus();
                None
            }
            DateFieldEvent::Blur => self.blur().change,
            DateFieldEvent::Input(raw) => {
                self.input(&raw);
                None
            }
            DateFieldEvent::TypeChar(c) => {
                self.type_char(c);
                None
            }
            DateFieldEvent::Backspace => {
                self.backspace();
                None
            }
            DateFieldEvent::Submit => self.submit().change,
            DateFieldEvent::Sync(value) => {
                self.sync_value(value);
                None
            }
            DateFieldEvent::OpenCalendar => {
                self.open_calendar();
                None
            }
            DateFieldEvent::CloseCalendar => {
                self.close_calendar();
                None
            }
            DateFieldEvent::StepCalendar(step) => {
                self.step_calendar(step);
                None
            }
            DateFieldEvent::SelectDay(date) => self.select_day(date),
            DateFieldEvent::SelectHighlighted => self.select_highlighted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn field(value: Option<NaiveDate>) -> DateInput {
        DateInput::new(value).with_reference_year(2025)
    }

    #[test]
    fn test_initial_display_from_value() {
        let f = field(Some(ymd(2024, 1, 10)));
        assert_eq!(f.display(), "10/01/24");
        assert_eq!(f.text_or_placeholder(), "10/01/24");

        let empty = field(None);
        assert_eq!(empty.display(), "");
        assert_eq!(empty.text_or_placeholder(), "DD/MM/AA");
    }

    #[test]
    fn test_commit_parsed_text() {
        let mut f = field(None);
        f.focus();
        f.input("15/05/24");
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Committed);
        assert_eq!(commit.change, Some(Change::Set(ymd(2024, 5, 15))));
        assert_eq!(f.value(), Some(&ymd(2024, 5, 15)));
        assert_eq!(f.display(), "15/05/24");
        assert!(!f.is_focused());
    }

    #[test]
    fn test_long_year_is_normalized() {
        let mut f = field(None);
        f.input("15/05/2024");
        f.blur();
        assert_eq!(f.display(), "15/05/24");
    }

    #[test]
    fn test_revert_on_invalid_text() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.focus();
        f.input("");
        f.input("99/99");
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Reverted);
        assert_eq!(commit.change, None);
        assert_eq!(f.display(), "10/01/24");
        assert_eq!(f.value(), Some(&ymd(2024, 1, 10)));
    }

    #[test]
    fn test_invalid_without_previous_clears() {
        let mut f = field(None);
        f.input("31/02");
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Cleared);
        assert_eq!(commit.change, Some(Change::Cleared));
        assert_eq!(f.display(), "");
        assert_eq!(f.value(), None);
    }

    #[test]
    fn test_empty_commit_clears() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.focus();
        f.input("");
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Cleared);
        assert_eq!(commit.change, Some(Change::Cleared));
        assert_eq!(f.value(), None);
    }

    #[test]
    fn test_enter_commits_and_keeps_focus() {
        let mut f = field(None);
        f.focus();
        for c in "1505".chars() {
            f.type_char(c);
        }
        assert_eq!(f.display(), "15/05/");
        let commit = f.submit();
        assert_eq!(commit.change, Some(Change::Set(ymd(2025, 5, 15))));
        assert_eq!(f.display(), "15/05/25");
        assert!(f.is_focused());
        assert!(!f.is_dirty());
    }

    #[test]
    fn test_untouched_blur_is_unchanged() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.focus();
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Unchanged);
        assert_eq!(commit.change, None);
        assert_eq!(f.display(), "10/01/24");
    }

    #[test]
    fn test_focus_guard_holds_display() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.focus();
        f.input("12/0");
        f.sync_value(Some(ymd(2030, 6, 1)));
        assert_eq!(f.display(), "12/0");
        assert_eq!(f.value(), Some(&ymd(2030, 6, 1)));
    }

    #[test]
    fn test_external_value_shows_after_untouched_blur() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.focus();
        f.sync_value(Some(ymd(2030, 6, 1)));
        assert_eq!(f.display(), "10/01/24");
        f.blur();
        assert_eq!(f.display(), "01/06/30");
        assert_eq!(f.value(), Some(&ymd(2030, 6, 1)));
    }

    #[test]
    fn test_sync_while_blurred_updates_display() {
        let mut f = field(None);
        f.sync_value(Some(ymd(2024, 2, 29)));
        assert_eq!(f.display(), "29/02/24");
        f.sync_value(None);
        assert_eq!(f.display(), "");
    }

    #[test]
    fn test_backspace_can_remove_auto_slash() {
        let mut f = field(None);
        f.type_char('1');
        f.type_char('5');
        assert_eq!(f.display(), "15/");
        f.backspace();
        assert_eq!(f.display(), "15");
        f.backspace();
        assert_eq!(f.display(), "1");
    }

    #[test]
    fn test_calendar_opens_on_current_value() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.open_calendar();
        assert_eq!(f.calendar_cursor(), Some(ymd(2024, 1, 10)));
        f.step_calendar(CalendarStep::NextWeek);
        assert_eq!(f.calendar_cursor(), Some(ymd(2024, 1, 17)));
        f.close_calendar();
        assert!(!f.is_calendar_open());
        assert_eq!(f.value(), Some(&ymd(2024, 1, 10)));
    }

    #[test]
    fn test_calendar_without_value_opens_somewhere() {
        let mut f = field(None);
        f.toggle_calendar();
        assert!(f.calendar_cursor().is_some());
        f.toggle_calendar();
        assert!(f.calendar_cursor().is_none());
    }

    #[test]
    fn test_calendar_selection_discards_typed_text() {
        let mut f = field(Some(ymd(2024, 1, 10)));
        f.focus();
        f.input("03/0");
        f.open_calendar();
        let change = f.select_day(ymd(2024, 3, 8));
        assert_eq!(change, Some(Change::Set(ymd(2024, 3, 8))));
        assert_eq!(f.display(), "08/03/24");
        assert!(!f.is_calendar_open());
        assert!(!f.is_dirty());

        // leaving the field afterwards keeps the selection
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Unchanged);
        assert_eq!(f.value(), Some(&ymd(2024, 3, 8)));
    }

    #[test]
    fn test_blur_closes_calendar() {
        let mut f = field(None);
        f.focus();
        f.open_calendar();
        f.blur();
        assert!(!f.is_calendar_open());
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut f = field(Some(ymd(2024, 1, 10))).disabled(true);
        f.focus();
        assert!(!f.is_focused());
        f.input("01/01/01");
        f.backspace();
        assert_eq!(f.display(), "10/01/24");
        assert_eq!(f.blur().outcome, CommitOutcome::Ignored);
        f.open_calendar();
        assert!(!f.is_calendar_open());
        assert_eq!(f.select_day(ymd(2020, 1, 1)), None);
        assert_eq!(f.value(), Some(&ymd(2024, 1, 10)));
    }

    #[test]
    fn test_iso_string_variant() {
        let mut f = DateStringInput::new(Some("2024-01-10T00:00:00".to_string()))
            .with_reference_year(2025);
        assert_eq!(f.display(), "10/01/24");
        f.input("15/05");
        let commit = f.blur();
        assert_eq!(commit.change, Some(Change::Set("2025-05-15".to_string())));
        assert_eq!(f.value().map(String::as_str), Some("2025-05-15"));
    }

    #[test]
    fn test_iso_string_with_garbage_value_shows_empty() {
        let mut f = DateStringInput::new(Some("garbage".to_string())).with_reference_year(2025);
        assert_eq!(f.display(), "");
        f.input("99/99");
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Cleared);
        assert_eq!(f.value(), None);
    }

    #[test]
    fn test_untouched_blur_clears_value_without_a_date() {
        let mut f = DateStringInput::new(Some("garbage".to_string())).with_reference_year(2025);
        f.focus();
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Cleared);
        assert_eq!(commit.change, Some(Change::Cleared));
        assert_eq!(f.value(), None);
        assert_eq!(f.display(), "");
    }

    #[test]
    fn test_untouched_blur_of_empty_field_reports_nothing() {
        let mut f = field(None);
        f.focus();
        let commit = f.blur();
        assert_eq!(commit.outcome, CommitOutcome::Unchanged);
        assert_eq!(commit.change, None);
    }

    #[test]
    fn test_handle_routes_events() {
        let mut f = field(None);
        assert_eq!(f.handle(DateFieldEvent::Focus), None);
        assert_eq!(f.handle(DateFieldEvent::Input("1/2/24".to_string())), None);
        assert_eq!(
            f.handle(DateFieldEvent::Blur),
            Some(Change::Set(ymd(2024, 2, 1)))
        );
        f.handle(DateFieldEvent::OpenCalendar);
        f.handle(DateFieldEvent::StepCalendar(CalendarStep::NextDay));
        assert_eq!(
            f.handle(DateFieldEvent::SelectHighlighted),
            Some(Change::Set(ymd(2024, 2, 2)))
        );
    }

    #[test]
    fn test_config_applies_placeholder_and_year() {
        let config = InputConfig {
            placeholder: "dd/mm/aa".to_string(),
            reference_year: Some(2031),
        };
        let mut f = DateInput::new(None).with_config(&config).with_id("fecha");
        assert_eq!(f.text_or_placeholder(), "dd/mm/aa");
        assert_eq!(f.id(), Some("fecha"));
        f.input("02/03");
        f.blur();
        assert_eq!(f.value(), Some(&ymd(2031, 3, 2)));
    }

    #[test]
    fn test_props_deserialize_with_defaults() {
        let props: DateFieldProps = serde_json::from_str(r#"{"id": "fecha_inicio"}"#).unwrap();
        assert_eq!(props.id.as_deref(), Some("fecha_inicio"));
        assert_eq!(props.placeholder, "DD/MM/AA");
        assert!(!props.disabled);
    }

    #[test]
    fn test_change_into_value() {
        assert_eq!(Change::Set(3).into_value(), Some(3));
        assert_eq!(Change::<i32>::Cleared.into_value(), None);
    }
}
