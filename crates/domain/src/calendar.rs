use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::WorkoutID;

/// Number of cells in the calendar grid, six full weeks.
pub const CALENDAR_CELLS: usize = 42;

/// One cell of the workout calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub today: bool,
    pub workout_id: Option<WorkoutID>,
}

impl CalendarDay {
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    #[must_use]
    pub fn has_workout(&self) -> bool {
        self.workout_id.is_some()
    }
}

/// Build the 42-cell grid for the given month (1-based): days of the
/// previous month to align the 1st onto a Monday-start week, the whole
/// target month, then days of the next month to fill six weeks.
///
/// An invalid year/month combination yields an empty grid.
#[must_use]
pub fn build_calendar_days(
    year: i32,
    month: u32,
    workouts: &BTreeMap<NaiveDate, WorkoutID>,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = u64::from(first_of_month.weekday().num_days_from_monday());
    let start = first_of_month
        .checked_sub_days(Days::new(offset))
        .unwrap_or(first_of_month);

    start
        .iter_days()
        .take(CALENDAR_CELLS)
        .map(|date| CalendarDay {
            date,
            in_month: date.year() == year && date.month() == month,
            today: date == today,
            workout_id: workouts.get(&date).copied(),
        })
        .collect()
}

/// Count consecutive workout days ending at `today` or yesterday. The one
/// day of grace keeps a streak alive until the next workout is due.
///
/// `dates` must be distinct calendar days sorted in descending order.
#[must_use]
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&most_recent) = dates.first() else {
        return 0;
    };
    if most_recent != today && Some(most_recent) != today.pred_opt() {
        return 0;
    }

    let mut streak = 1;
    let mut previous = most_recent;
    for &date in &dates[1..] {
        if previous.pred_opt() != Some(date) {
            break;
        }
        streak += 1;
        previous = date;
    }
    streak
}

/// Human-readable month heading, e.g. "June 2024".
#[must_use]
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map_or_else(String::new, |date| date.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_build_calendar_days_june_2024() {
        // 2024-06-01 is a Saturday, so the grid leads with Mon May 27.
        let days = build_calendar_days(2024, 6, &BTreeMap::new(), date(2024, 6, 10));

        assert_eq!(days.len(), CALENDAR_CELLS);
        assert_eq!(days[0].date, date(2024, 5, 27));
        let first_of_month = days.iter().position(|d| d.date == date(2024, 6, 1)).unwrap();
        assert_eq!(first_of_month, 5);
        assert!(days[first_of_month].in_month);
        assert!(days[..first_of_month].iter().all(|d| {
            !d.in_month && d.date.month() == 5
        }));
        assert_eq!(days.last().unwrap().date, date(2024, 7, 7));
        assert!(!days.last().unwrap().in_month);
        assert_eq!(
            days.iter().filter(|d| d.in_month).count(),
            30
        );
        assert_eq!(
            days.iter().find(|d| d.today).map(|d| d.date),
            Some(date(2024, 6, 10))
        );
    }

    #[test]
    fn test_build_calendar_days_month_starting_on_monday() {
        // 2024-07-01 is a Monday, no leading days.
        let days = build_calendar_days(2024, 7, &BTreeMap::new(), date(2024, 6, 10));

        assert_eq!(days.len(), CALENDAR_CELLS);
        assert_eq!(days[0].date, date(2024, 7, 1));
        assert!(days[0].in_month);
        assert!(days.iter().all(|d| !d.today));
    }

    #[test]
    fn test_build_calendar_days_marks_workouts() {
        let workouts = BTreeMap::from([
            (date(2024, 6, 3), WorkoutID::from(1)),
            (date(2024, 5, 28), WorkoutID::from(2)),
        ]);
        let days = build_calendar_days(2024, 6, &workouts, date(2024, 6, 10));

        let workout_days = days.iter().filter(|d| d.has_workout()).collect::<Vec<_>>();
        assert_eq!(workout_days.len(), 2);
        assert_eq!(workout_days[0].date, date(2024, 5, 28));
        assert_eq!(workout_days[0].workout_id, Some(2.into()));
        assert_eq!(workout_days[1].date, date(2024, 6, 3));
        assert_eq!(workout_days[1].workout_id, Some(1.into()));
        assert_eq!(workout_days[1].day(), 3);
    }

    #[test]
    fn test_build_calendar_days_invalid_month() {
        assert_eq!(
            build_calendar_days(2024, 13, &BTreeMap::new(), date(2024, 6, 10)),
            vec![]
        );
    }

    #[rstest]
    #[case::empty(&[], (2024, 6, 10), 0)]
    #[case::ends_today(&[(2024, 6, 10), (2024, 6, 9), (2024, 6, 8)], (2024, 6, 10), 3)]
    #[case::ends_yesterday(&[(2024, 6, 9), (2024, 6, 8)], (2024, 6, 10), 2)]
    #[case::grace_expired(&[(2024, 6, 10), (2024, 6, 9), (2024, 6, 8)], (2024, 6, 12), 0)]
    #[case::single_day(&[(2024, 6, 10)], (2024, 6, 10), 1)]
    #[case::stops_at_gap(&[(2024, 6, 10), (2024, 6, 9), (2024, 6, 7), (2024, 6, 6)], (2024, 6, 10), 2)]
    #[case::across_month_boundary(&[(2024, 6, 1), (2024, 5, 31), (2024, 5, 30)], (2024, 6, 1), 3)]
    fn test_current_streak(
        #[case] dates: &[(i32, u32, u32)],
        #[case] today: (i32, u32, u32),
        #[case] expected: u32,
    ) {
        assert_eq!(
            current_streak(
                &dates
                    .iter()
                    .map(|(y, m, d)| date(*y, *m, *d))
                    .collect::<Vec<_>>(),
                date(today.0, today.1, today.2),
            ),
            expected
        );
    }

    #[rstest]
    #[case(2024, 6, "June 2024")]
    #[case(2023, 12, "December 2023")]
    #[case(2024, 13, "")]
    fn test_month_label(#[case] year: i32, #[case] month: u32, #[case] expected: &str) {
        assert_eq!(month_label(year, month), expected);
    }
}
