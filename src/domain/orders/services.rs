use crate::domain::errors::ValidationError;
use crate::domain::orders::{DateRange, Month, Year};
use chrono::NaiveDate;

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| ValidationError::InvalidYear(year.to_string()))
}

/// First day of the requested month, `YYYY-MM-01`.
pub fn compute_start(year: Year, month: Month) -> Result<NaiveDate, ValidationError> {
    first_of_month(year.value(), month.number())
}

/// First day of the following month, rolling over to January of the next year.
pub fn compute_end(year: Year, month: Month) -> Result<NaiveDate, ValidationError> {
    if month.number() < 12 {
        first_of_month(year.value(), month.number() + 1)
    } else {
        first_of_month(year.value() + 1, 1)
    }
}

pub fn compute_range(year: Year, month: Month) -> Result<DateRange, ValidationError> {
    Ok(DateRange::new(compute_start(year, month)?, compute_end(year, month)?))
}
