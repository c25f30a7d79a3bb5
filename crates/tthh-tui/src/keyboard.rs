/// Keyboard input handling and key mapping
use crate::actions::{Action, FieldId, FieldKey, TabId};
use crate::stores::form_store::FormState;
use crate::stores::{AppLogsStore, FormStore, UIStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm;
use tthh_core::CalendarStep;

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    form_store: &FormStore,
    app_logs_store: &AppLogsStore,
) -> Option<Action> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::F(1) => return Some(Action::SwitchTab(TabId::Form)),
        KeyCode::F(2) => return Some(Action::SwitchTab(TabId::Logs)),
        _ => {}
    }

    let ui_state = ui_store.get_state();
    if ui_state.show_help {
        return match key_event.code {
            KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    match ui_state.active_tab {
        TabId::Form => handle_form_tab_keys(key_event, &form_store.get_state()),
        TabId::Logs => handle_logs_tab_keys(key_event, app_logs_store),
    }
}

fn is_back_tab(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::BackTab
        || (key_event.code == KeyCode::Tab && key_event.modifiers.contains(KeyModifiers::SHIFT))
}

fn handle_form_tab_keys(key_event: KeyEvent, form: &FormState) -> Option<Action> {
    if is_back_tab(&key_event) {
        return Some(Action::FocusPrev);
    }
    if key_event.code == KeyCode::Char('s') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::SubmitRequest);
    }

    if form.open_calendar().is_some() {
        return handle_calendar_keys(key_event);
    }

    match form.focused_field {
        Some(field) if field.is_date() => handle_date_field_keys(key_event),
        Some(_) => handle_kind_keys(key_event),
        None => handle_form_navigation_keys(key_event),
    }
}

/// Keys while a calendar panel is open below a date field
fn handle_calendar_keys(key_event: KeyEvent) -> Option<Action> {
    let key = match key_event.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::Esc => FieldKey::CloseCalendar,
        KeyCode::Left => FieldKey::Calendar(CalendarStep::PrevDay),
        KeyCode::Right => FieldKey::Calendar(CalendarStep::NextDay),
        KeyCode::Up => FieldKey::Calendar(CalendarStep::PrevWeek),
        KeyCode::Down => FieldKey::Calendar(CalendarStep::NextWeek),
        KeyCode::PageUp => FieldKey::Calendar(CalendarStep::PrevMonth),
        KeyCode::PageDown => FieldKey::Calendar(CalendarStep::NextMonth),
        KeyCode::Enter | KeyCode::Char(' ') => FieldKey::PickHighlighted,
        _ => return None,
    };
    Some(Action::FieldKey(key))
}

fn handle_date_field_keys(key_event: KeyEvent) -> Option<Action> {
    let key = match key_event.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::Esc => return Some(Action::BlurField),
        KeyCode::Enter => FieldKey::Enter,
        KeyCode::Backspace => FieldKey::Backspace,
        KeyCode::Char(' ') | KeyCode::Down => FieldKey::OpenCalendar,
        KeyCode::Char(c) if !c.is_control() => FieldKey::Char(c),
        _ => return None,
    };
    Some(Action::FieldKey(key))
}

fn handle_kind_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Esc => Some(Action::BlurField),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
            Some(Action::CycleAbsenceKind)
        }
        _ => None,
    }
}

/// Keys when no field has focus
fn handle_form_navigation_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('2') => Some(Action::SwitchTab(TabId::Logs)),
        KeyCode::Tab | KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::FocusNext),
        KeyCode::Char('1') => Some(Action::FocusField(FieldId::StartDate)),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::SubmitRequest),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ResetForm),
        KeyCode::Esc => Some(Action::ClearError),
        _ => None,
    }
}

fn handle_logs_tab_keys(key_event: KeyEvent, app_logs_store: &AppLogsStore) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('1') => Some(Action::SwitchTab(TabId::Form)),

        // Scroll logs
        KeyCode::Char('j') | KeyCode::Down => {
            app_logs_store.scroll_down(1);
            None // No action needed, store updated directly
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app_logs_store.scroll_up(1);
            None
        }
        KeyCode::PageDown => {
            app_logs_store.scroll_down(10);
            None
        }
        KeyCode::PageUp => {
            app_logs_store.scroll_up(10);
            None
        }
        KeyCode::Char('g') => {
            app_logs_store.scroll_to_bottom();
            None
        }

        _ => None,
    }
}
