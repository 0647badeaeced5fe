use chrono::{Datelike, NaiveDate};

/// Last month of the competition season. Scouting after it targets next year.
const SEASON_END_MONTH: u32 = 4;

/// The season teams are currently preparing for, as of `today`.
pub fn current_competition_year(today: NaiveDate) -> i32 {
    if today.month() > SEASON_END_MONTH {
        today.year() + 1
    } else {
        today.year()
    }
}
