/// Absence request form: two editable date fields, the kind selector and the
/// read-only hire date
use crate::actions::FieldId;
use crate::stores::form_store::FormState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tthh_core::{Canonical, DateField};

const INPUT_WIDTH: u16 = 24;

/// Where each input was drawn, so popups can be anchored to them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAreas {
    pub start_date: Rect,
    pub end_date: Rect,
    pub kind: Rect,
    pub hire_date: Rect,
}

impl FieldAreas {
    pub fn get(&self, field: FieldId) -> Rect {
        match field {
            FieldId::StartDate => self.start_date,
            FieldId::EndDate => self.end_date,
            FieldId::Kind => self.kind,
            FieldId::HireDate => self.hire_date,
        }
    }
}

pub struct FormPanel<'a> {
    state: &'a FormState,
}

impl<'a> FormPanel<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> FieldAreas {
        let block = Block::default()
            .title(format!(" Solicitud de ausencia: {} ", self.state.employee.name))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // spacing
                Constraint::Length(3), // dates
                Constraint::Length(3), // kind + hire date
                Constraint::Length(1), // spacing
                Constraint::Min(0),    // summary
            ])
            .split(inner_area);

        let date_row = input_columns(rows[1]);
        let other_row = input_columns(rows[2]);

        let areas = FieldAreas {
            start_date: date_row[0],
            end_date: date_row[1],
            kind: other_row[0],
            hire_date: other_row[1],
        };

        self.render_date_input(areas.start_date, buf, FieldId::StartDate, &self.state.start_date);
        self.render_date_input(areas.end_date, buf, FieldId::EndDate, &self.state.end_date);
        self.render_kind(areas.kind, buf);
        self.render_date_input(areas.hire_date, buf, FieldId::HireDate, &self.state.hire_date);
        self.render_summary(rows[4], buf);

        areas
    }

    fn render_date_input<C: Canonical>(
        &self,
        area: Rect,
        buf: &mut Buffer,
        field: FieldId,
        input: &DateField<C>,
    ) {
        let is_focused = self.state.focused_field == Some(field);

        let (label, border_style) = if input.is_disabled() {
            (
                format!(" {} (solo lectura) ", field.label()),
                Style::default().fg(Color::DarkGray),
            )
        } else if is_focused {
            (
                format!(" {} ", field.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (format!(" {} ", field.label()), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner_area = block.inner(area);
        block.render(area, buf);

        let placeholder_style = Style::default().fg(Color::DarkGray);
        let text_style = if input.is_disabled() {
            placeholder_style
        } else if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let line = match (input.display().is_empty(), is_focused) {
            (true, true) => Line::from(vec![
                Span::styled("█", text_style),
                Span::styled(input.props().placeholder.clone(), placeholder_style),
            ]),
            (true, false) => Line::from(Span::styled(input.text_or_placeholder(), placeholder_style)),
            (false, true) => Line::from(Span::styled(format!("{}█", input.display()), text_style)),
            (false, false) => Line::from(Span::styled(input.display(), text_style)),
        };

        Paragraph::new(line).render(inner_area, buf);
    }

    fn render_kind(&self, area: Rect, buf: &mut Buffer) {
        let is_focused = self.state.focused_field == Some(FieldId::Kind);
        let style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(format!(" {} ", FieldId::Kind.label()))
            .borders(Borders::ALL)
            .border_style(style);

        let label = self.state.kind.label();
        let text = if is_focused {
            format!("◀ {} ▶", label)
        } else {
            label.to_string()
        };

        Paragraph::new(text)
            .style(style)
            .block(block)
            .render(area, buf);
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        match self.state.build_request() {
            Ok(request) => lines.push(Line::from(vec![
                Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
                Span::raw(request.summary()),
            ])),
            Err(e) => lines.push(Line::from(Span::styled(
                format!("Pendiente: {}", e),
                Style::default().fg(Color::DarkGray),
            ))),
        }

        if let Some(request) = &self.state.last_submitted {
            lines.push(Line::from(vec![
                Span::styled("Última solicitud: ", Style::default().fg(Color::Green)),
                Span::raw(request.summary()),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

fn input_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(INPUT_WIDTH),
            Constraint::Length(2),
            Constraint::Length(INPUT_WIDTH),
            Constraint::Min(0),
        ])
        .split(area)
        .iter()
        .step_by(2)
        .copied()
        .collect()
}
