//! Year grid geometry.
//!
//! Every calendar year is laid out as up to 53 week columns of 7 weekday
//! rows, Monday first. Column 0 starts at the Monday on or before January 1;
//! cells that fall into the previous or next year resolve to nothing.

use chrono::{Datelike, Duration, NaiveDate};

pub const WEEK_COLUMNS: i32 = 53;
pub const WEEKDAY_ROWS: u32 = 7;

/// Monday on or before January 1 of `year`. May belong to `year - 1`.
pub fn grid_origin(year: i32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    jan1.checked_sub_signed(Duration::days(week_year_offset(jan1)))
}

/// Days between the grid origin and January 1 (0 when Jan 1 is a Monday).
fn week_year_offset(jan1: NaiveDate) -> i64 {
    jan1.weekday().num_days_from_monday() as i64
}

/// Date shown at `(week, row)` of `year`'s grid, or `None` for a blank cell.
pub fn cell_to_date(year: i32, week: i32, row: u32) -> Option<NaiveDate> {
    if week < 0 || row >= WEEKDAY_ROWS {
        return None;
    }

    let days = week as i64 * 7 + row as i64;
    let date = grid_origin(year)?.checked_add_signed(Duration::days(days))?;

    (date.year() == year).then_some(date)
}

/// Whether the cell one column to the left (same row) is in a different month.
///
/// Both cells are resolved through [`cell_to_date`], so a blank neighbour
/// never counts as a boundary.
pub fn crosses_month_boundary(year: i32, week: i32, row: u32) -> bool {
    match (
        cell_to_date(year, week, row),
        cell_to_date(year, week - 1, row),
    ) {
        (Some(current), Some(left)) => current.month() != left.month(),
        _ => false,
    }
}
