use chrono::{Datelike, NaiveDate, Weekday};

/// Add business days to a date, skipping Saturdays and Sundays
///
/// Returns `None` only if the calendar runs out of representable dates.
pub fn add_business_days(start_date: NaiveDate, days: u32) -> Option<NaiveDate> {
    let mut current_date = start_date;
    let mut remaining_days = days;

    while remaining_days > 0 {
        current_date = current_date.succ_opt()?;

        if is_business_day(current_date) {
            remaining_days -= 1;
        }
    }

    Some(current_date)
}

/// Check if a date falls on a weekday
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
