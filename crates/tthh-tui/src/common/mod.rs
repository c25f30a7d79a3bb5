// Reusable widgets
pub mod calendar;

pub use calendar::{CalendarWidget, centered_rect, render_calendar_below};
