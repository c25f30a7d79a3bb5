/// Logs tab: the in-memory application log, newest at the bottom
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LogsPanel<'a> {
    pub logs: &'a [String],
    pub scroll_offset: usize,
}

impl<'a> LogsPanel<'a> {
    pub fn from_state(state: &'a AppLogsState) -> Self {
        Self {
            logs: &state.logs,
            scroll_offset: state.scroll_offset,
        }
    }

    /// Index range of the lines that fit in `height` rows
    pub fn visible_range(&self, height: usize) -> (usize, usize) {
        let total = self.logs.len();
        let end = total.saturating_sub(self.scroll_offset).max(height.min(total));
        let start = end.saturating_sub(height);
        (start, end)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Registro ")
            .border_style(Style::default().fg(Color::Cyan));

        if self.logs.is_empty() {
            Paragraph::new("Sin registros todavía...")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let total = self.logs.len();
        let (start, end) = self.visible_range(inner_height);

        let visible: Vec<Line> = self.logs[start..end]
            .iter()
            .map(|log| Line::from(log.as_str()))
            .collect();

        let block = if total > inner_height {
            block.title(format!(" Registro [{}/{}] ", end, total))
        } else {
            block
        };

        Paragraph::new(visible)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
