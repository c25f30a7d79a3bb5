/// Adapters between a calendar date and the value a form stores for it.
use crate::parser::{format_iso, parse_iso};
use chrono::NaiveDate;
use std::fmt::Debug;

/// Representation of the authoritative value of a date field
pub trait Canonical {
    type Value: Clone + Debug + PartialEq;

    /// Short name used in logs
    const NAME: &'static str;

    /// Read the calendar date out of a stored value, if it holds one
    fn to_date(value: &Self::Value) -> Option<NaiveDate>;

    fn from_date(date: NaiveDate) -> Self::Value;
}

/// Structured dates, `chrono::NaiveDate`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveDateValue;

impl Canonical for NaiveDateValue {
    type Value = NaiveDate;
    const NAME: &'static str = "date";

    fn to_date(value: &NaiveDate) -> Option<NaiveDate> {
        Some(*value)
    }

    fn from_date(date: NaiveDate) -> NaiveDate {
        date
    }
}

/// ISO `YYYY-MM-DD` strings as exchanged with the REST backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoStringValue;

impl Canonical for IsoStringValue {
    type Value = String;
    const NAME: &'static str = "iso-string";

    fn to_date(value: &String) -> Option<NaiveDate> {
        parse_iso(value)
    }

    fn from_date(date: NaiveDate) -> String {
        format_iso(date)
    }
}
