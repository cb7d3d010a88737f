//! Calendar Grid
//!
//! Month navigation and grid construction for the calendar page.
//! Weeks start on Sunday, matching the column headers.

use chrono::{Datelike, NaiveDate};

use crate::state::global::Match;

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];

const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// The month currently shown on the calendar page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    /// Cursor for the current month
    pub fn now() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Previous month, rolling over December
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Next month, rolling over January
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// "Septembre 2026"
    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// Number of days in the cursor's month
fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Build the cells of the month grid.
///
/// Leading `None` cells pad the first week so day 1 lands under its
/// weekday column; the rest are `Some(day_number)`.
pub fn month_grid(cursor: MonthCursor) -> Vec<Option<u32>> {
    let first = match NaiveDate::from_ymd_opt(cursor.year, cursor.month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };

    // Sunday-first offset: chrono numbers Sunday as 7
    let leading = first.weekday().number_from_sunday() - 1;

    let mut cells: Vec<Option<u32>> = vec![None; leading as usize];
    for day in 1..=days_in_month(cursor.year, cursor.month) {
        cells.push(Some(day));
    }
    cells
}

/// Matches whose kick-off falls on the given day
pub fn matches_on(matches: &[Match], cursor: MonthCursor, day: u32) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| {
            chrono::DateTime::parse_from_rfc3339(&m.match_date)
                .map(|dt| {
                    dt.year() == cursor.year && dt.month() == cursor.month && dt.day() == day
                })
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_on(date: &str) -> Match {
        Match {
            id: "m".to_string(),
            home_team_id: "t1".to_string(),
            away_team_id: "t2".to_string(),
            home_team_score: None,
            away_team_score: None,
            match_date: date.to_string(),
            venue: "Stade Municipal".to_string(),
            status: "scheduled".to_string(),
            referee: None,
            attendance: None,
            notes: None,
            created_at: date.to_string(),
        }
    }

    #[test]
    fn test_cursor_rollover() {
        let dec = MonthCursor {
            year: 2026,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            MonthCursor {
                year: 2027,
                month: 1
            }
        );

        let jan = MonthCursor {
            year: 2026,
            month: 1,
        };
        assert_eq!(
            jan.prev(),
            MonthCursor {
                year: 2025,
                month: 12
            }
        );
    }

    #[test]
    fn test_cursor_label() {
        let cursor = MonthCursor {
            year: 2026,
            month: 9,
        };
        assert_eq!(cursor.label(), "Septembre 2026");
    }

    #[test]
    fn test_grid_september_2026() {
        // 1 September 2026 is a Tuesday: two leading blanks (Sun, Mon)
        let cells = month_grid(MonthCursor {
            year: 2026,
            month: 9,
        });
        assert_eq!(cells.len(), 2 + 30);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], None);
        assert_eq!(cells[2], Some(1));
        assert_eq!(cells.last(), Some(&Some(30)));
    }

    #[test]
    fn test_grid_month_starting_sunday() {
        // 1 November 2026 is a Sunday: no leading blanks
        let cells = month_grid(MonthCursor {
            year: 2026,
            month: 11,
        });
        assert_eq!(cells[0], Some(1));
        assert_eq!(cells.len(), 30);
    }

    #[test]
    fn test_grid_leap_february() {
        let cells = month_grid(MonthCursor {
            year: 2028,
            month: 2,
        });
        let days: Vec<u32> = cells.into_iter().flatten().collect();
        assert_eq!(days.len(), 29);
    }

    #[test]
    fn test_matches_on_day() {
        let matches = vec![
            match_on("2026-09-06T15:00:00+00:00"),
            match_on("2026-09-06T18:00:00+00:00"),
            match_on("2026-09-13T15:00:00+00:00"),
            match_on("2026-10-06T15:00:00+00:00"),
        ];
        let cursor = MonthCursor {
            year: 2026,
            month: 9,
        };

        assert_eq!(matches_on(&matches, cursor, 6).len(), 2);
        assert_eq!(matches_on(&matches, cursor, 13).len(), 1);
        assert_eq!(matches_on(&matches, cursor, 20).len(), 0);
    }
}
