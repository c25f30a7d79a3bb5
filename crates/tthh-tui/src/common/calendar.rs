/// Month calendar widget shown below a date field
use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tthh_core::month_weeks;

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const WEEKDAYS: &str = "Do Lu Ma Mi Ju Vi Sa";

pub const CALENDAR_WIDTH: u16 = 26;
pub const CALENDAR_HEIGHT: u16 = 12;

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Calendar widget that displays a monthly calendar view
pub struct CalendarWidget {
    /// Day under the keyboard cursor; its month is the one shown
    pub highlighted: NaiveDate,
    /// Current value of the field, if any
    pub selected: Option<NaiveDate>,
    pub title: Option<String>,
    pub today: Option<NaiveDate>,
}

impl CalendarWidget {
    pub fn new(highlighted: NaiveDate) -> Self {
        Self {
            highlighted,
            selected: None,
            title: None,
            today: Some(Local::now().date_naive()),
        }
    }

    pub fn selected(mut self, selected: Option<NaiveDate>) -> Self {
        self.selected = selected;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Day to mark as today, `None` to mark nothing
    pub fn today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    fn day_style(&self, day: NaiveDate) -> Style {
        if day == self.highlighted {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else if Some(day) == self.selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else if Some(day) == self.today {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} {}", month_name(self.highlighted), self.highlighted.year()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(WEEKDAYS, Style::default().fg(Color::Yellow))),
        ];

        for week in month_weeks(self.highlighted) {
            let spans: Vec<Span> = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => Span::styled(format!("{:>2} ", day.day()), self.day_style(*day)),
                    None => Span::raw("   "),
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.lines()).alignment(Alignment::Center);

        let title = self.title.as_deref().unwrap_or(" Calendario ");
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner_area = block.inner(area);
        block.render(area, buf);
        paragraph.render(inner_area, buf);
    }
}

/// Where a calendar anchored under `below_area` goes, kept on screen
pub fn calendar_area_below(screen_area: Rect, below_area: Rect) -> Rect {
    let x = below_area
        .x
        .min(screen_area.width.saturating_sub(CALENDAR_WIDTH));
    let y = (below_area.y + below_area.height)
        .min(screen_area.height.saturating_sub(CALENDAR_HEIGHT));

    Rect {
        x,
        y,
        width: CALENDAR_WIDTH.min(screen_area.width),
        height: CALENDAR_HEIGHT.min(screen_area.height),
    }
}

/// Render a calendar popup positioned below an input field
pub fn render_calendar_below(
    screen_area: Rect,
    below_area: Rect,
    buf: &mut Buffer,
    calendar: CalendarWidget,
) {
    let popup_area = calendar_area_below(screen_area, below_area);
    Clear.render(popup_area, buf);
    calendar.render(popup_area, buf);
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
