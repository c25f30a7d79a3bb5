/// Month grid and highlighted-day navigation for the calendar picker
use chrono::{Datelike, Days, Months, NaiveDate};

/// One row of a month view, Sunday first. Cells outside the month are `None`
pub type Week = [Option<NaiveDate>; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarStep {
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
}

/// Move a highlighted day. Month steps keep the day of month where possible
/// and clamp it to the end of shorter months. Stepping past the supported
/// date range leaves the day where it was.
pub fn step(date: NaiveDate, step: CalendarStep) -> NaiveDate {
    let moved = match step {
        CalendarStep::PrevDay => date.checked_sub_days(Days::new(1)),
        CalendarStep::NextDay => date.checked_add_days(Days::new(1)),
        CalendarStep::PrevWeek => date.checked_sub_days(Days::new(7)),
        CalendarStep::NextWeek => date.checked_add_days(Days::new(7)),
        CalendarStep::PrevMonth => date.checked_sub_months(Months::new(1)),
        CalendarStep::NextMonth => date.checked_add_months(Months::new(1)),
    };
    moved.unwrap_or(date)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

/// Weeks of the month containing `date`
pub fn month_weeks(date: NaiveDate) -> Vec<Week> {
    let first = first_of_month(date);
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; 7];
    let mut slot = leading;

    for day in first.iter_days().take(days_in_month(date) as usize) {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }

    if slot != 0 {
        weeks.push(week);
    }
    weeks
}
