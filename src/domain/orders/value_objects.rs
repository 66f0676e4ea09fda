use crate::domain::errors::ValidationError;
use crate::domain::orders::DailyRecord;
use chrono::NaiveDate;
use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Value Object - four digit calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{:04}", _0)]
pub struct Year(i32);

impl Year {
    pub const MIN: i32 = 1000;
    pub const MAX: i32 = 9999;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidYear(value.to_string()))
        }
    }

    /// Parses the `first-year` / `second-year` form fields.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidYear(input.to_string()));
        }
        trimmed
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidYear(input.to_string()))
            .and_then(Self::new)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Value Object - calendar month, rendered as `01`..`12`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, FromRepr, IntoStaticStr, Serialize, Deserialize,
)]
#[repr(u32)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn from_number(number: u32) -> Option<Self> {
        Self::from_repr(number)
    }

    /// Parses the `month` form field (`"01"`..`"12"`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.len() > 2 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidMonth(input.to_string()));
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| ValidationError::InvalidMonth(input.to_string()))
    }

    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number())
    }
}

/// Value Object - which DailyRecord field feeds the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display(fmt = "Orders")]
    #[strum(serialize = "orders")]
    Orders,
    #[display(fmt = "Revenue")]
    #[strum(serialize = "revenue")]
    Revenue,
}

impl Category {
    /// Parses the `category` radio value.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::from_str(input.trim()).map_err(|_| ValidationError::InvalidCategory(input.to_string()))
    }

    pub fn project(&self, record: &DailyRecord) -> f64 {
        match self {
            Category::Orders => record.orders as f64,
            Category::Revenue => record.revenue,
        }
    }
}

/// Value Object - half-open `[start, end)` interval covering one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub const QUERY_FORMAT: &'static str = "%Y-%m-%d";

    pub(crate) fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the covered month.
    pub fn days(&self) -> usize {
        (self.end - self.start).num_days() as usize
    }

    pub fn start_param(&self) -> String {
        self.start.format(Self::QUERY_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(Self::QUERY_FORMAT).to_string()
    }

    /// `start=2015-01-01&end=2015-02-01`
    pub fn query_string(&self) -> String {
        format!("start={}&end={}", self.start_param(), self.end_param())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_param(), self.end_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn month_parses_padded_and_bare_numbers() {
        assert_eq!(Month::parse("03").unwrap(), Month::March);
        assert_eq!(Month::parse("12").unwrap(), Month::December);
        assert_eq!(Month::parse("7").unwrap(), Month::July);
        assert!(Month::parse("00").is_err());
        assert!(Month::parse("13").is_err());
        assert!(Month::parse("-1").is_err());
        assert!(Month::parse("").is_err());
    }

    #[test]
    fn months_render_as_form_values() {
        let values: Vec<String> = Month::iter().map(|m| m.to_string()).collect();
        assert_eq!(values.first().map(String::as_str), Some("01"));
        assert_eq!(values.last().map(String::as_str), Some("12"));
        assert_eq!(values.len(), 12);
    }

    #[test]
    fn month_numbers_and_names_follow_calendar() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
        assert_eq!(Month::September.number(), 9);
        assert_eq!(Month::February.name(), "February");
    }

    #[test]
    fn year_requires_four_digits() {
        assert_eq!(Year::parse("2015").unwrap().value(), 2015);
        assert_eq!(Year::parse(" 2014 ").unwrap().to_string(), "2014");
        assert_eq!(
            Year::parse("15"),
            Err(ValidationError::InvalidYear("15".to_string()))
        );
        assert!(Year::parse("20a5").is_err());
        assert!(Year::parse("0999").is_err());
    }

    #[test]
    fn category_round_trips_form_values() {
        assert_eq!(Category::parse("orders").unwrap(), Category::Orders);
        assert_eq!(Category::parse("revenue").unwrap(), Category::Revenue);
        assert_eq!(Category::Revenue.as_ref(), "revenue");
        assert!(Category::parse("profit").is_err());
    }

    #[test]
    fn category_projects_matching_field() {
        let record = DailyRecord { day: 4, orders: 12, revenue: 250.5 };
        assert_eq!(Category::Orders.project(&record), 12.0);
        assert_eq!(Category::Revenue.project(&record), 250.5);
    }
}
