use crate::error::{ProcessingError, Result};
use crate::models::{CountryKeyed, MonthlyAggregate};
use crate::utils::constants::{FIRST_MONTH, LAST_MONTH};
use std::collections::HashSet;

/// Rows whose country is in `countries`. Works on either table.
pub fn filter_by_country<T, S>(table: &[T], countries: &[S]) -> Vec<T>
where
    T: CountryKeyed + Clone,
    S: AsRef<str>,
{
    let wanted: HashSet<&str> = countries.iter().map(|c| c.as_ref()).collect();
    table
        .iter()
        .filter(|row| wanted.contains(row.country()))
        .cloned()
        .collect()
}

pub fn check_month_range(lo: u32, hi: u32) -> Result<()> {
    let valid = (FIRST_MONTH..=LAST_MONTH).contains(&lo)
        && (FIRST_MONTH..=LAST_MONTH).contains(&hi)
        && lo <= hi;
    if valid {
        Ok(())
    } else {
        Err(ProcessingError::InvalidParameter(format!(
            "month range must satisfy {} <= lo <= hi <= {}, got ({}, {})",
            FIRST_MONTH, LAST_MONTH, lo, hi
        )))
    }
}

/// Monthly rows with `lo <= month_num <= hi`.
pub fn filter_by_month_range(
    table: &[MonthlyAggregate],
    lo: u32,
    hi: u32,
) -> Result<Vec<MonthlyAggregate>> {
    check_month_range(lo, hi)?;
    Ok(table
        .iter()
        .filter(|row| (lo..=hi).contains(&row.month_num))
        .cloned()
        .collect())
}
