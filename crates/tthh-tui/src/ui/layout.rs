/// Layout manager for the TUI application
use crate::actions::{FieldId, TabId};
use crate::common::{CalendarWidget, centered_rect, render_calendar_below};
use crate::stores::form_store::FormState;
use crate::stores::ui_store::UIState;
use crate::stores::{AppLogsStore, FormStore, UIStore};
use crate::ui::{FormPanel, LogsPanel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Widget},
};
use tthh_core::format_display;

/// Render the complete application layout
pub fn render_layout(
    frame: &mut Frame,
    ui_store: &UIStore,
    form_store: &FormStore,
    app_logs_store: &AppLogsStore,
) {
    let area = frame.area();
    let ui_state = ui_store.get_state();

    // Header | Tabs | Content | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let form_state = form_store.get_state();
    render_header(frame, vertical_chunks[0], &ui_state, &form_state);
    render_tabs(frame, vertical_chunks[1], &ui_state.active_tab);

    match ui_state.active_tab {
        TabId::Form => {
            let areas = FormPanel::new(&form_state).render(vertical_chunks[2], frame.buffer_mut());

            // calendar popover drawn last so it sits above the other inputs
            if let Some((field, highlighted)) = form_state.open_calendar() {
                let selected = match field {
                    FieldId::StartDate => form_state.start_date.date(),
                    _ => form_state.end_date.date(),
                };
                let calendar = CalendarWidget::new(highlighted)
                    .selected(selected)
                    .title(format!(" {} ", field.label()));
                render_calendar_below(area, areas.get(field), frame.buffer_mut(), calendar);
            }
        }
        TabId::Logs => {
            let logs_state = app_logs_store.get_state();
            LogsPanel::from_state(&logs_state).render(vertical_chunks[2], frame.buffer_mut());
        }
    }

    render_footer(frame, vertical_chunks[3], &ui_state, &form_state);

    if ui_state.show_help {
        render_help(frame, area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: &TabId) {
    let selected_index = match active_tab {
        TabId::Form => 0,
        TabId::Logs => 1,
    };

    let tabs = Tabs::new(vec!["F1: Solicitud", "F2: Registro"])
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected_index)
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_header(frame: &mut Frame, area: Rect, ui_state: &UIState, form_state: &FormState) {
    let hire_date = form_state
        .employee
        .hire_date
        .map(format_display)
        .unwrap_or_else(|| "-".to_string());

    let mut spans = vec![
        Span::styled(
            " TTHH ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " | {} | Ingreso: {} | ",
            form_state.employee.name, hire_date
        )),
    ];

    if let Some(error) = &ui_state.error_message {
        spans.push(Span::styled(error.clone(), Style::default().fg(Color::Red)));
    } else if let Some(status) = &ui_state.status_message {
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Green)));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn footer_hint(ui_state: &UIState, form_state: &FormState) -> &'static str {
    if ui_state.show_help {
        return "Esc/?: Cerrar ayuda";
    }
    match ui_state.active_tab {
        TabId::Logs => "q:Salir | F1/1:Solicitud | j/k:Desplazar | g:Final | ?:Ayuda",
        TabId::Form => {
            if form_state.open_calendar().is_some() {
                "←→:Día | ↑↓:Semana | PgUp/PgDn:Mes | Enter:Elegir | Esc:Cerrar"
            } else {
                match form_state.focused_field {
                    Some(FieldId::Kind) => "Enter/←→:Cambiar tipo | Tab:Siguiente | Esc:Salir del campo",
                    Some(_) => "DDMMAA:Escribir | Espacio:Calendario | Enter:Confirmar | Tab:Siguiente | Esc:Salir del campo | Ctrl+S:Enviar",
                    None => "q:Salir | Tab/e:Editar | Enter/s:Enviar | r:Limpiar | F2:Registro | ?:Ayuda",
                }
            }
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UIState, form_state: &FormState) {
    let footer_text = Line::from(vec![
        Span::raw(" "),
        Span::raw(footer_hint(ui_state, form_state)),
    ]);

    Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 70, area);
    Clear.render(popup, frame.buffer_mut());

    let key_style = Style::default().fg(Color::Yellow);
    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![Span::styled(format!("{key:<14}"), key_style), Span::raw(text)])
    };

    let lines = vec![
        Line::from(Span::styled(
            "Fechas",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        entry("DDMMAA", "las barras se agregan solas: 150525 -> 15/05/25"),
        entry("DD/MM", "toma el año actual"),
        entry("DD/MM/AAAA", "año completo, se muestra como DD/MM/AA"),
        entry("Texto inválido", "al salir vuelve al último valor válido"),
        entry("Borrar todo", "deja la fecha vacía"),
        Line::from(""),
        Line::from(Span::styled(
            "Teclas",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        entry("Tab / S-Tab", "campo siguiente / anterior"),
        entry("Espacio, ↓", "abrir calendario"),
        entry("Enter", "confirmar la fecha escrita"),
        entry("Ctrl+S", "enviar la solicitud"),
        entry("F1 / F2", "solicitud / registro"),
        entry("Ctrl+C", "salir"),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Ayuda ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(popup, frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::logger::LogBuffer;
    use crate::models::Employee;
    use ratatui::{Terminal, backend::TestBackend};
    use tthh_core::InputConfig;

    #[test]
    fn test_footer_follows_focus() {
        let ui = UIStore::new();
        let form = FormStore::new(InputConfig::default(), Employee::new("Ana", None));
        assert!(footer_hint(&ui.get_state(), &form.get_state()).starts_with("q:Salir"));

        form.reduce(&Action::FocusField(FieldId::Kind));
        assert!(footer_hint(&ui.get_state(), &form.get_state()).contains("Cambiar tipo"));
    }

    #[test]
    fn test_calendar_popover_renders_under_field() {
        let ui = UIStore::new();
        let form = FormStore::new(
            InputConfig {
                reference_year: Some(2025),
                ..InputConfig::default()
            },
            Employee::new("Ana", None),
        );
        let logs = AppLogsStore::new(LogBuffer::new(10));

        form.reduce(&Action::FocusField(FieldId::StartDate));
        for c in "150525".chars() {
            form.reduce(&Action::FieldKey(crate::actions::FieldKey::Char(c)));
        }
        form.reduce(&Action::FieldKey(crate::actions::FieldKey::Enter));
        form.reduce(&Action::FieldKey(crate::actions::FieldKey::OpenCalendar));

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render_layout(frame, &ui, &form, &logs))
            .unwrap();

        let buf = terminal.backend().buffer();
        let screen: String = (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("Mayo 2025"));
        assert!(screen.contains("Do Lu Ma Mi Ju Vi Sa"));
    }
}
