//! Urgency ranking and due-date labels.
//!
//! Every listing orders tasks by [`urgency_score`]: overdue first, then the
//! soonest due, and tasks without a due date last. Positional task numbers
//! ("complete #3") are assigned over that order and are only meaningful for
//! the listing they were printed in.

use crate::due::format_month_day;
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Score of a task without a due date. Larger than any real day difference.
pub const NO_DUE_DATE_SCORE: i64 = i64::MAX;

/// Tasks due within this many days (overdue included) count as urgent.
pub const URGENT_WITHIN_DAYS: i64 = 3;

/// Whole days from `today` to `due`; negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

pub fn urgency_score(due: Option<NaiveDate>, today: NaiveDate) -> i64 {
    due.map_or(NO_DUE_DATE_SCORE, |due| days_until(due, today))
}

pub fn is_urgent(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due.is_some_and(|due| days_until(due, today) <= URGENT_WITHIN_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Overdue,
    DueToday,
    DueTomorrow,
    NearTerm,
    Upcoming,
    FarFuture,
    NoDueDate,
}

impl SeverityBand {
    pub fn from_days(days: Option<i64>) -> Self {
        match days {
            None => SeverityBand::NoDueDate,
            Some(d) if d < 0 => SeverityBand::Overdue,
            Some(0) => SeverityBand::DueToday,
            Some(1) => SeverityBand::DueTomorrow,
            Some(2..=3) => SeverityBand::NearTerm,
            Some(4..=7) => SeverityBand::Upcoming,
            Some(_) => SeverityBand::FarFuture,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            SeverityBand::Overdue => "🔴",
            SeverityBand::DueToday => "⚡",
            SeverityBand::DueTomorrow => "🟠",
            SeverityBand::NearTerm => "🟡",
            SeverityBand::Upcoming => "🟢",
            SeverityBand::FarFuture => "🔵",
            SeverityBand::NoDueDate => "⚪",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityBand::Overdue => write!(f, "overdue"),
            SeverityBand::DueToday => write!(f, "due today"),
            SeverityBand::DueTomorrow => write!(f, "due tomorrow"),
            SeverityBand::NearTerm => write!(f, "near-term"),
            SeverityBand::Upcoming => write!(f, "upcoming"),
            SeverityBand::FarFuture => write!(f, "far future"),
            SeverityBand::NoDueDate => write!(f, "no due date"),
        }
    }
}

/// Display form of a due date relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueLabel {
    pub band: SeverityBand,
    pub due: Option<NaiveDate>,
    pub days: Option<i64>,
}

impl DueLabel {
    /// The label without its marker, e.g. `3日後 (06/13)`.
    pub fn text(&self) -> String {
        let (Some(due), Some(days)) = (self.due, self.days) else {
            return "期限なし".to_string();
        };
        let month_day = format_month_day(due);
        match self.band {
            SeverityBand::Overdue => format!("期限切れ ({})", month_day),
            SeverityBand::DueToday => format!("今日まで ({})", month_day),
            SeverityBand::DueTomorrow => format!("明日まで ({})", month_day),
            SeverityBand::NearTerm | SeverityBand::Upcoming => {
                format!("{}日後 ({})", days, month_day)
            }
            SeverityBand::FarFuture | SeverityBand::NoDueDate => month_day,
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.band.marker(), self.text())
    }
}

pub fn label(due: Option<NaiveDate>, today: NaiveDate) -> DueLabel {
    let days = due.map(|due| days_until(due, today));
    DueLabel {
        band: SeverityBand::from_days(days),
        due,
        days,
    }
}

/// Stable ascending sort by urgency score.
pub fn sort_by_urgency<T, F>(items: &mut [T], today: NaiveDate, due_of: F)
where
    F: Fn(&T) -> Option<NaiveDate>,
{
    items.sort_by_key(|item| urgency_score(due_of(item), today));
}

/// An item with its 1-based position in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numbered<'a, T> {
    pub number: usize,
    pub item: &'a T,
}

pub fn number_items<T>(items: &[T]) -> Vec<Numbered<'_, T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Numbered {
            number: index + 1,
            item,
        })
        .collect()
}

/// Pick the `number`-th item (1-based) of an already sorted listing.
pub fn select_numbered<T>(items: &[T], number: usize) -> Result<&T, CoreError> {
    if items.is_empty() {
        return Err(CoreError::NoTasks);
    }
    number
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .ok_or(CoreError::InvalidNumber {
            number,
            len: items.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::due::parse_due_date;
    use chrono::Days;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 10)
    }

    #[test]
    fn test_score() {
        assert_eq!(urgency_score(Some(date(2025, 6, 7)), today()), -3);
        assert_eq!(urgency_score(Some(today()), today()), 0);
        assert_eq!(urgency_score(Some(date(2025, 6, 20)), today()), 10);
        assert_eq!(urgency_score(None, today()), NO_DUE_DATE_SCORE);
    }

    #[rstest]
    #[case(Some(-10), SeverityBand::Overdue)]
    #[case(Some(-1), SeverityBand::Overdue)]
    #[case(Some(0), SeverityBand::DueToday)]
    #[case(Some(1), SeverityBand::DueTomorrow)]
    #[case(Some(2), SeverityBand::NearTerm)]
    #[case(Some(3), SeverityBand::NearTerm)]
    #[case(Some(4), SeverityBand::Upcoming)]
    #[case(Some(7), SeverityBand::Upcoming)]
    #[case(Some(8), SeverityBand::FarFuture)]
    #[case(None, SeverityBand::NoDueDate)]
    fn test_bands(#[case] days: Option<i64>, #[case] expected: SeverityBand) {
        assert_eq!(SeverityBand::from_days(days), expected);
    }

    #[test]
    fn test_markers_are_distinct() {
        let bands = [
            SeverityBand::Overdue,
            SeverityBand::DueToday,
            SeverityBand::DueTomorrow,
            SeverityBand::NearTerm,
            SeverityBand::Upcoming,
            SeverityBand::FarFuture,
            SeverityBand::NoDueDate,
        ];
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                assert_ne!(a.marker(), b.marker(), "{} and {}", a, b);
            }
        }
    }

    #[rstest]
    #[case(Some(date(2025, 6, 9)), "🔴 期限切れ (06/09)")]
    #[case(Some(date(2025, 6, 10)), "⚡ 今日まで (06/10)")]
    #[case(Some(date(2025, 6, 11)), "🟠 明日まで (06/11)")]
    #[case(Some(date(2025, 6, 13)), "🟡 3日後 (06/13)")]
    #[case(Some(date(2025, 6, 15)), "🟢 5日後 (06/15)")]
    #[case(Some(date(2025, 7, 30)), "🔵 07/30")]
    #[case(None, "⚪ 期限なし")]
    fn test_label_rendering(#[case] due: Option<NaiveDate>, #[case] expected: &str) {
        assert_eq!(label(due, today()).to_string(), expected);
    }

    #[test]
    fn test_urgent_includes_overdue() {
        assert!(is_urgent(Some(date(2025, 5, 1)), today()));
        assert!(is_urgent(Some(date(2025, 6, 13)), today()));
        assert!(!is_urgent(Some(date(2025, 6, 14)), today()));
        assert!(!is_urgent(None, today()));
    }

    #[test]
    fn test_listing_order() {
        let mut dues = vec![
            Some(date(2025, 6, 9)),
            None,
            Some(date(2025, 6, 10)),
            Some(date(2025, 6, 12)),
        ];
        sort_by_urgency(&mut dues, today(), |d| *d);
        assert_eq!(
            dues,
            vec![
                Some(date(2025, 6, 9)),
                Some(date(2025, 6, 10)),
                Some(date(2025, 6, 12)),
                None,
            ]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = vec![("b", None), ("a", Some(today())), ("c", None), ("d", Some(today()))];
        sort_by_urgency(&mut items, today(), |(_, due)| *due);
        let names: Vec<_> = items.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_numbering_and_selection() {
        let items = vec!["first", "second", "third"];
        let numbered = number_items(&items);
        assert_eq!(numbered[0].number, 1);
        assert_eq!(*numbered[2].item, "third");

        assert_eq!(*select_numbered(&items, 3).unwrap(), "third");
        assert!(matches!(
            select_numbered(&items, 0),
            Err(CoreError::InvalidNumber { number: 0, len: 3 })
        ));
        assert!(matches!(
            select_numbered(&items, 4),
            Err(CoreError::InvalidNumber { number: 4, len: 3 })
        ));
        let empty: Vec<&str> = vec![];
        assert!(matches!(select_numbered(&empty, 1), Err(CoreError::NoTasks)));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let tomorrow = parse_due_date("明日", today());
        assert_eq!(tomorrow, Some(date(2025, 6, 11)));
        assert_eq!(label(tomorrow, today()).band, SeverityBand::DueTomorrow);

        let friday = parse_due_date("金曜", today());
        assert_eq!(friday, Some(date(2025, 6, 13)));
        let friday_label = label(friday, today());
        assert_eq!(friday_label.band, SeverityBand::NearTerm);
        assert!(friday_label.text().starts_with("3日後"));

        let july = parse_due_date("7/30", today());
        assert_eq!(july, Some(date(2025, 7, 30)));
        assert_eq!(label(july, today()).band, SeverityBand::FarFuture);

        assert_eq!(parse_due_date("gibberish", today()), None);
    }

    proptest! {
        #[test]
        fn prop_score_is_monotonic(a in 1_u64..400, b in 1_u64..400, c in 1_u64..400) {
            let mut offsets = [a, b, c];
            offsets.sort_unstable();
            prop_assume!(offsets[0] < offsets[1] && offsets[1] < offsets[2]);
            let [d1, d2, d3] = offsets.map(|n| today() + Days::new(n));
            prop_assert!(urgency_score(Some(d1), today()) < urgency_score(Some(d2), today()));
            prop_assert!(urgency_score(Some(d2), today()) < urgency_score(Some(d3), today()));
        }

        #[test]
        fn prop_absent_sorts_last(offset in -100_000_i64..100_000) {
            let due = today().checked_add_signed(chrono::Duration::days(offset)).unwrap();
            prop_assert!(urgency_score(None, today()) > urgency_score(Some(due), today()));
        }
    }
}
