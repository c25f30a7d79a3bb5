/// Domain types of the absence request form
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tthh_core::format_display;

/// Kind of absence being requested, as the backend names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbsenceKind {
    #[default]
    Vacation,
    SickLeave,
    Personal,
    Training,
}

impl AbsenceKind {
    pub fn next(self) -> Self {
        match self {
            Self::Vacation => Self::SickLeave,
            Self::SickLeave => Self::Personal,
            Self::Personal => Self::Training,
            Self::Training => Self::Vacation,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vacation => "Vacaciones",
            Self::SickLeave => "Enfermedad",
            Self::Personal => "Asunto personal",
            Self::Training => "Capacitación",
        }
    }
}

/// Who the form is being filled for. Passed in explicitly by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Employee {
    pub name: String,
    pub hire_date: Option<NaiveDate>,
}

impl Employee {
    pub fn new(name: impl Into<String>, hire_date: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            hire_date,
        }
    }
}

/// A validated request, ready to be posted to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbsenceRequest {
    pub employee: String,
    pub kind: AbsenceKind,
    pub start_date: NaiveDate,
    /// ISO `YYYY-MM-DD`, as held by the end date field
    pub end_date: String,
    /// calendar days, both ends included
    pub days: i64,
}

impl AbsenceRequest {
    pub fn summary(&self) -> String {
        let unit = if self.days == 1 { "día" } else { "días" };
        format!(
            "{} del {} ({} {})",
            self.kind.label(),
            format_display(self.start_date),
            self.days,
            unit
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("start date is required")]
    MissingStartDate,
    #[error("end date is required")]
    MissingEndDate,
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("start date {start} is before hire date {hire_date}")]
    BeforeHireDate {
        start: NaiveDate,
        hire_date: NaiveDate,
    },
}
