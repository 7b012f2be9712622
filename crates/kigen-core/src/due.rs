//! Natural-language due dates.
//!
//! [`DueDateParser`] turns the free text a user typed after a task name into a
//! calendar date, relative to a caller-supplied `today`. It understands the
//! Japanese and English shorthand the group actually uses:
//!
//! - `今日` / `明日` / `明後日` and `today` / `tomorrow` / `day after tomorrow`
//! - weekday names anywhere in the text (`金曜`, `friday`, `木`)
//! - `3日後`, `10 days later`
//! - `来週`, `再来週`, `来月` and `next week`, `week after next`, `next month`
//! - `2025-12-25`, `2025/12/25`, `12/25`, `12-25`
//!
//! Full-width digits (`１２/２５`) read the same as ASCII ones. Results past
//! year 9999 are treated as overflow, since they have no `YYYY-MM-DD` form.
//!
//! Text that matches none of these is not an error: the parser returns `None`
//! and the command decides whether that means "no due date" or a rejection.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const TODAY_WORDS: &[&str] = &["今日", "きょう", "today"];
const TOMORROW_WORDS: &[&str] = &["明日", "あした", "あす", "tomorrow"];
const DAY_AFTER_TOMORROW_WORDS: &[&str] = &["明後日", "あさって", "day after tomorrow"];

/// Weekday keywords in evaluation order.
///
/// The single kanji come first, so `月曜` is always claimed by `月` and a word
/// like `来月` or `3日後` resolves to a weekday under substring matching.
const WEEKDAY_KEYWORDS: &[(&str, Weekday)] = &[
    ("月", Weekday::Mon),
    ("火", Weekday::Tue),
    ("水", Weekday::Wed),
    ("木", Weekday::Thu),
    ("金", Weekday::Fri),
    ("土", Weekday::Sat),
    ("日", Weekday::Sun),
    ("月曜", Weekday::Mon),
    ("火曜", Weekday::Tue),
    ("水曜", Weekday::Wed),
    ("木曜", Weekday::Thu),
    ("金曜", Weekday::Fri),
    ("土曜", Weekday::Sat),
    ("日曜", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

const WEEK_AFTER_NEXT_WORDS: &[&str] = &["再来週", "week after next"];
const NEXT_WEEK_WORDS: &[&str] = &["来週", "next week"];
const NEXT_MONTH_WORDS: &[&str] = &["来月", "next month"];

const NEXT_WEEK_DAYS: u64 = 7;
const WEEK_AFTER_NEXT_DAYS: u64 = 14;
const NEXT_MONTH_DAYS: u64 = 30;

/// Last year with a four-digit `YYYY-MM-DD` rendering.
const MAX_ISO_YEAR: i32 = 9999;

lazy_static! {
    static ref DAYS_LATER: Regex = Regex::new(r"([0-9]+)\s*(?:日後|days?\s+later)").unwrap();
    static ref DATE_PATTERNS: Vec<(DatePattern, Regex)> = vec![
        (
            DatePattern::YearMonthDayDash,
            Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").unwrap(),
        ),
        (
            DatePattern::YearMonthDaySlash,
            Regex::new(r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})").unwrap(),
        ),
        (
            DatePattern::MonthDaySlash,
            Regex::new(r"([0-9]{1,2})/([0-9]{1,2})").unwrap(),
        ),
        (
            DatePattern::MonthDayDash,
            Regex::new(r"([0-9]{1,2})-([0-9]{1,2})").unwrap(),
        ),
    ];
}

/// How weekday names are located in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayMatching {
    /// Any keyword contained anywhere in the text matches, including the
    /// single-kanji abbreviations.
    #[default]
    Substring,
    /// Same containment test, but only the full keywords (`金曜`, `friday`).
    Strict,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseWeekdayMatchingError(String);

impl fmt::Display for ParseWeekdayMatchingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid weekday matching mode: {}", self.0)
    }
}

impl std::error::Error for ParseWeekdayMatchingError {}

impl FromStr for WeekdayMatching {
    type Err = ParseWeekdayMatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(WeekdayMatching::Substring),
            "strict" => Ok(WeekdayMatching::Strict),
            _ => Err(ParseWeekdayMatchingError(s.to_string())),
        }
    }
}

/// Explicit date layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    YearMonthDayDash,
    YearMonthDaySlash,
    MonthDaySlash,
    MonthDayDash,
}

impl DatePattern {
    fn has_year(self) -> bool {
        matches!(
            self,
            DatePattern::YearMonthDayDash | DatePattern::YearMonthDaySlash
        )
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePattern::YearMonthDayDash => write!(f, "YYYY-MM-DD"),
            DatePattern::YearMonthDaySlash => write!(f, "YYYY/MM/DD"),
            DatePattern::MonthDaySlash => write!(f, "MM/DD"),
            DatePattern::MonthDayDash => write!(f, "MM-DD"),
        }
    }
}

/// The rule that produced a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueRule {
    Keyword,
    Weekday(Weekday),
    DaysLater(u64),
    WeekAfterNext,
    NextWeek,
    NextMonth,
    Date(DatePattern),
}

impl fmt::Display for DueRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueRule::Keyword => write!(f, "keyword"),
            DueRule::Weekday(day) => write!(f, "weekday ({})", day),
            DueRule::DaysLater(days) => write!(f, "{} days later", days),
            DueRule::WeekAfterNext => write!(f, "week after next (+14)"),
            DueRule::NextWeek => write!(f, "next week (+7)"),
            DueRule::NextMonth => write!(f, "next month (+30)"),
            DueRule::Date(pattern) => write!(f, "date ({})", pattern),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub date: NaiveDate,
    pub rule: DueRule,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateParser {
    weekday_matching: WeekdayMatching,
}

impl DueDateParser {
    pub fn new(weekday_matching: WeekdayMatching) -> Self {
        Self { weekday_matching }
    }

    pub fn weekday_matching(&self) -> WeekdayMatching {
        self.weekday_matching
    }

    /// Resolve `text` to a date relative to `today`, or `None` when nothing matches.
    pub fn parse(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        self.resolve(text, today).map(|r| r.date)
    }

    /// Like [`parse`](Self::parse), but also reports which rule matched.
    ///
    /// Rules are tried in a fixed order and the first match wins: exact
    /// keywords, weekday names, `N days later`, week/month offsets, then
    /// explicit dates.
    pub fn resolve(&self, text: &str, today: NaiveDate) -> Option<Resolution> {
        let text = normalize(text);
        if text.is_empty() {
            return None;
        }

        match_keyword(&text, today)
            .or_else(|| self.match_weekday(&text, today))
            .or_else(|| match_days_later(&text, today))
            .or_else(|| match_week_or_month(&text, today))
            .or_else(|| match_explicit_date(&text, today))
            .filter(|r| (1..=MAX_ISO_YEAR).contains(&r.date.year()))
    }

    /// Deadline for the "this week" shortcut.
    ///
    /// Keeps the parsed date when it falls on or before this week's Sunday.
    /// Anything else lands on this week's Friday, or next week's Friday when
    /// today is Friday and the evening cutoff has passed.
    pub fn this_week_deadline(
        &self,
        text: Option<&str>,
        today: NaiveDate,
        after_cutoff: bool,
    ) -> Option<NaiveDate> {
        let week_end = week_end(today)?;

        if let Some(date) = text.and_then(|t| self.parse(t, today)) {
            if date <= week_end {
                return Some(date);
            }
        }

        let mut friday_offset = days_until(today.weekday(), Weekday::Fri);
        if friday_offset == 0 && after_cutoff {
            friday_offset = 7;
        }
        today.checked_add_days(Days::new(friday_offset))
    }

    fn match_weekday(&self, text: &str, today: NaiveDate) -> Option<Resolution> {
        let strict = self.weekday_matching == WeekdayMatching::Strict;
        WEEKDAY_KEYWORDS
            .iter()
            .filter(|(keyword, _)| !(strict && keyword.chars().count() == 1))
            .find(|(keyword, _)| text.contains(keyword))
            .and_then(|&(_, weekday)| {
                next_weekday(today, weekday).map(|date| Resolution {
                    date,
                    rule: DueRule::Weekday(weekday),
                })
            })
    }
}

/// Sunday of the Monday-started week containing `today`.
pub fn week_end(today: NaiveDate) -> Option<NaiveDate> {
    let days_from_monday = u64::from(today.weekday().num_days_from_monday());
    today.checked_add_days(Days::new(6 - days_from_monday))
}

/// Trimmed, lower-cased, full-width digits folded to ASCII.
fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '０'..='９' => {
                char::from_u32(u32::from(c) - u32::from('０') + u32::from('0')).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Resolve with the default (substring) parser.
pub fn parse_due_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    DueDateParser::default().parse(text, today)
}

fn match_keyword(text: &str, today: NaiveDate) -> Option<Resolution> {
    let offset = if TODAY_WORDS.contains(&text) {
        0
    } else if TOMORROW_WORDS.contains(&text) {
        1
    } else if DAY_AFTER_TOMORROW_WORDS.contains(&text) {
        2
    } else {
        return None;
    };

    today.checked_add_days(Days::new(offset)).map(|date| Resolution {
        date,
        rule: DueRule::Keyword,
    })
}

fn match_days_later(text: &str, today: NaiveDate) -> Option<Resolution> {
    let captures = DAYS_LATER.captures(text)?;
    let days: u64 = captures[1].parse().ok()?;
    today.checked_add_days(Days::new(days)).map(|date| Resolution {
        date,
        rule: DueRule::DaysLater(days),
    })
}

fn match_week_or_month(text: &str, today: NaiveDate) -> Option<Resolution> {
    let contains_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

    // 再来週 contains 来週, so it has to be tested first.
    let (days, rule) = if contains_any(WEEK_AFTER_NEXT_WORDS) {
        (WEEK_AFTER_NEXT_DAYS, DueRule::WeekAfterNext)
    } else if contains_any(NEXT_WEEK_WORDS) {
        (NEXT_WEEK_DAYS, DueRule::NextWeek)
    } else if contains_any(NEXT_MONTH_WORDS) {
        (NEXT_MONTH_DAYS, DueRule::NextMonth)
    } else {
        return None;
    };

    today
        .checked_add_days(Days::new(days))
        .map(|date| Resolution { date, rule })
}

fn match_explicit_date(text: &str, today: NaiveDate) -> Option<Resolution> {
    DATE_PATTERNS.iter().find_map(|(pattern, regex)| {
        let captures = regex.captures(text)?;
        let date = if pattern.has_year() {
            let year: i32 = captures[1].parse().ok()?;
            let month: u32 = captures[2].parse().ok()?;
            let day: u32 = captures[3].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)?
        } else {
            let month: u32 = captures[1].parse().ok()?;
            let day: u32 = captures[2].parse().ok()?;
            month_day_on_or_after(today, month, day)?
        };
        Some(Resolution {
            date,
            rule: DueRule::Date(*pattern),
        })
    })
}

/// Month/day in the current year, or next year when that is already past.
/// Fails when the chosen year has no such day (Feb 29).
fn month_day_on_or_after(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(date)
    }
}

fn days_until(from: Weekday, to: Weekday) -> u64 {
    let from = i64::from(from.num_days_from_monday());
    let to = i64::from(to.num_days_from_monday());
    (to - from).rem_euclid(7) as u64
}

/// Next `weekday` strictly after `today`.
fn next_weekday(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead = match days_until(today.weekday(), weekday) {
        0 => 7,
        n => n,
    };
    today.checked_add_days(Days::new(ahead))
}

/// Storage form, `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverse of [`format_iso`]. Anything else reads as no date.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Display form, `MM/DD`.
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2025-06-10 is a Tuesday.
    fn tuesday() -> NaiveDate {
        date(2025, 6, 10)
    }

    #[rstest]
    #[case("today", date(2025, 6, 10))]
    #[case("  Today ", date(2025, 6, 10))]
    #[case("今日", date(2025, 6, 10))]
    #[case("きょう", date(2025, 6, 10))]
    #[case("tomorrow", date(2025, 6, 11))]
    #[case("TOMORROW", date(2025, 6, 11))]
    #[case("明日", date(2025, 6, 11))]
    #[case("あす", date(2025, 6, 11))]
    #[case("明後日", date(2025, 6, 12))]
    #[case("あさって", date(2025, 6, 12))]
    #[case("day after tomorrow", date(2025, 6, 12))]
    fn test_keywords(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, tuesday()), Some(expected));
    }

    #[rstest]
    #[case("金曜", date(2025, 6, 13))]
    #[case("金", date(2025, 6, 13))]
    #[case("friday", date(2025, 6, 13))]
    #[case("Friday", date(2025, 6, 13))]
    #[case("月曜", date(2025, 6, 16))]
    #[case("monday", date(2025, 6, 16))]
    #[case("日曜", date(2025, 6, 15))]
    #[case("wednesday", date(2025, 6, 11))]
    #[case("by thursday please", date(2025, 6, 12))]
    fn test_weekdays(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, tuesday()), Some(expected));
    }

    #[test]
    fn test_same_weekday_is_next_week() {
        assert_eq!(parse_due_date("火曜", tuesday()), Some(date(2025, 6, 17)));
        assert_eq!(parse_due_date("tuesday", tuesday()), Some(date(2025, 6, 17)));
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // 日 and 月 are weekday abbreviations, so these never reach the later rules.
        let parser = DueDateParser::default();
        let resolved = parser.resolve("3日後", tuesday()).unwrap();
        assert_eq!(resolved.rule, DueRule::Weekday(Weekday::Sun));
        assert_eq!(resolved.date, date(2025, 6, 15));

        let resolved = parser.resolve("来月", tuesday()).unwrap();
        assert_eq!(resolved.rule, DueRule::Weekday(Weekday::Mon));
    }

    #[test]
    fn test_strict_matching_skips_single_kanji() {
        let parser = DueDateParser::new(WeekdayMatching::Strict);
        assert_eq!(parser.parse("3日後", tuesday()), Some(date(2025, 6, 13)));
        assert_eq!(parser.parse("来月", tuesday()), Some(date(2025, 7, 10)));
        assert_eq!(parser.parse("金曜", tuesday()), Some(date(2025, 6, 13)));
        assert_eq!(parser.parse("金", tuesday()), None);
    }

    #[test]
    fn test_compound_next_week_weekday_keeps_weekday_precedence() {
        let resolved = DueDateParser::default()
            .resolve("来週金曜", tuesday())
            .unwrap();
        assert_eq!(resolved.rule, DueRule::Weekday(Weekday::Fri));
        assert_eq!(resolved.date, date(2025, 6, 13));
    }

    #[rstest]
    #[case("3 days later", date(2025, 6, 13))]
    #[case("10 days later", date(2025, 6, 20))]
    #[case("1 day later", date(2025, 6, 11))]
    #[case("0 days later", date(2025, 6, 10))]
    fn test_days_later(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, tuesday()), Some(expected));
    }

    #[test]
    fn test_days_later_overflow_is_unrecognized() {
        assert_eq!(parse_due_date("99999999999999999999 days later", tuesday()), None);
        assert_eq!(parse_due_date("9999999999 days later", tuesday()), None);
    }

    #[test]
    fn test_dates_past_year_9999_are_unrecognized() {
        assert_eq!(parse_due_date("9999999 days later", tuesday()), None);
        assert_eq!(parse_due_date("1/1", date(9999, 12, 31)), None);
        assert_eq!(parse_due_date("next week", date(9999, 12, 30)), None);
        assert_eq!(parse_due_date("tomorrow", date(9999, 12, 30)), Some(date(9999, 12, 31)));
    }

    #[test]
    fn test_latest_reachable_date_round_trips() {
        let today = tuesday();
        let far = parse_due_date("2912647 days later", today).unwrap();
        assert_eq!(far, date(9999, 12, 31));
        assert_eq!(parse_due_date(&format_iso(far), today), Some(far));
    }

    #[rstest]
    #[case("１２/２５", date(2025, 12, 25))]
    #[case("２０２５-１２-２５", date(2025, 12, 25))]
    #[case("２０２５/１２/２５", date(2025, 12, 25))]
    #[case("３ days later", date(2025, 6, 13))]
    #[case("締切 ８/１", date(2025, 8, 1))]
    fn test_full_width_digits(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, tuesday()), Some(expected));
    }

    #[rstest]
    #[case("next week", date(2025, 6, 17))]
    #[case("来週", date(2025, 6, 17))]
    #[case("week after next", date(2025, 6, 24))]
    #[case("再来週", date(2025, 6, 24))]
    #[case("next month", date(2025, 7, 10))]
    fn test_week_and_month_offsets(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, tuesday()), Some(expected));
    }

    #[test]
    fn test_next_month_is_a_fixed_thirty_days() {
        assert_eq!(
            parse_due_date("next month", date(2025, 1, 31)),
            Some(date(2025, 3, 2))
        );
    }

    #[rstest]
    #[case("2025-12-25", date(2025, 12, 25))]
    #[case("2025/12/25", date(2025, 12, 25))]
    #[case("2024-2-29", date(2024, 2, 29))]
    #[case("7/30", date(2025, 7, 30))]
    #[case("12-25", date(2025, 12, 25))]
    #[case("6/10", date(2025, 6, 10))]
    #[case("6/9", date(2026, 6, 9))]
    #[case("締切 8/1", date(2025, 8, 1))]
    fn test_explicit_dates(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, tuesday()), Some(expected));
    }

    #[test]
    fn test_month_day_before_today_rolls_to_next_year() {
        let today = date(2025, 1, 10);
        assert_ne!(parse_due_date("01/05", today), Some(date(2025, 1, 5)));
        assert_eq!(parse_due_date("01/05", today), Some(date(2026, 1, 5)));
    }

    #[rstest]
    #[case("2025-13-01")]
    #[case("2025-02-30")]
    #[case("2/29")]
    #[case("13/01")]
    #[case("4/31")]
    fn test_invalid_calendar_values_fall_through(#[case] input: &str) {
        assert_eq!(parse_due_date(input, tuesday()), None);
    }

    #[test]
    fn test_leap_day_without_year() {
        assert_eq!(parse_due_date("2/29", date(2024, 1, 1)), Some(date(2024, 2, 29)));
        // Already past in 2024 and 2025 has no Feb 29.
        assert_eq!(parse_due_date("2/29", date(2024, 3, 1)), None);
    }

    #[test]
    fn test_invalid_full_date_falls_through_to_later_pattern() {
        // The first pattern fails on month 13; MM/DD then finds 1/05.
        let resolved = DueDateParser::default()
            .resolve("2025-13-01 or 1/05", date(2025, 1, 1))
            .unwrap();
        assert_eq!(resolved.rule, DueRule::Date(DatePattern::MonthDaySlash));
        assert_eq!(resolved.date, date(2025, 1, 5));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("gibberish")]
    #[case("someday")]
    fn test_unrecognized(#[case] input: &str) {
        assert_eq!(parse_due_date(input, tuesday()), None);
    }

    #[test]
    fn test_resolve_reports_rule() {
        let parser = DueDateParser::default();
        assert_eq!(
            parser.resolve("tomorrow", tuesday()).map(|r| r.rule),
            Some(DueRule::Keyword)
        );
        assert_eq!(
            parser.resolve("10 days later", tuesday()).map(|r| r.rule),
            Some(DueRule::DaysLater(10))
        );
        assert_eq!(
            parser.resolve("2025/12/25", tuesday()).map(|r| r.rule),
            Some(DueRule::Date(DatePattern::YearMonthDaySlash))
        );
    }

    #[rstest]
    // Tuesday: Friday of this week.
    #[case(date(2025, 6, 10), None, false, date(2025, 6, 13))]
    // Explicit weekday inside the week is kept.
    #[case(date(2025, 6, 10), Some("wednesday"), false, date(2025, 6, 11))]
    #[case(date(2025, 6, 10), Some("日曜"), false, date(2025, 6, 15))]
    // Beyond Sunday falls back to Friday.
    #[case(date(2025, 6, 10), Some("next week"), false, date(2025, 6, 13))]
    #[case(date(2025, 6, 10), Some("gibberish"), false, date(2025, 6, 13))]
    // Friday before and after the cutoff.
    #[case(date(2025, 6, 13), None, false, date(2025, 6, 13))]
    #[case(date(2025, 6, 13), None, true, date(2025, 6, 20))]
    // Saturday: Friday of next week.
    #[case(date(2025, 6, 14), None, false, date(2025, 6, 20))]
    fn test_this_week_deadline(
        #[case] today: NaiveDate,
        #[case] text: Option<&str>,
        #[case] after_cutoff: bool,
        #[case] expected: NaiveDate,
    ) {
        let parser = DueDateParser::default();
        assert_eq!(
            parser.this_week_deadline(text, today, after_cutoff),
            Some(expected)
        );
    }

    #[test]
    fn test_formats() {
        let d = date(2025, 7, 3);
        assert_eq!(format_iso(d), "2025-07-03");
        assert_eq!(format_month_day(d), "07/03");
        assert_eq!(parse_iso("2025-07-03"), Some(d));
        assert_eq!(parse_iso(" 2025-07-03 "), Some(d));
        assert_eq!(parse_iso("07/03"), None);
        assert_eq!(parse_iso(""), None);
    }

    #[test]
    fn test_weekday_matching_from_str() {
        assert_eq!("strict".parse(), Ok(WeekdayMatching::Strict));
        assert_eq!("Substring".parse(), Ok(WeekdayMatching::Substring));
        assert!("fuzzy".parse::<WeekdayMatching>().is_err());
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1_i32..=3_000_000).prop_map(|n| NaiveDate::from_num_days_from_ce_opt(n).unwrap())
    }

    fn iso_year_date() -> impl Strategy<Value = NaiveDate> {
        (1_i32..=MAX_ISO_YEAR, 1_u32..=12, 1_u32..=31)
            .prop_filter_map("valid calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    proptest! {
        #[test]
        fn prop_today_and_tomorrow(today in any_date()) {
            prop_assert_eq!(parse_due_date("today", today), Some(today));
            prop_assert_eq!(parse_due_date("tomorrow", today), today.succ_opt());
        }

        #[test]
        fn prop_weekday_is_strictly_after_today(
            today in any_date(),
            index in 0..WEEKDAY_KEYWORDS.len(),
        ) {
            let (keyword, weekday) = WEEKDAY_KEYWORDS[index];
            let resolved = parse_due_date(keyword, today).unwrap();
            prop_assert!(resolved > today);
            prop_assert!(resolved <= today + Days::new(7));
            prop_assert_eq!(resolved.weekday(), weekday);
        }

        #[test]
        fn prop_days_later(today in any_date(), n in 0_u64..1000) {
            let text = format!("{} days later", n);
            prop_assert_eq!(parse_due_date(&text, today), Some(today + Days::new(n)));
        }

        #[test]
        fn prop_iso_round_trip(resolved in iso_year_date(), today in any_date()) {
            prop_assert_eq!(parse_due_date(&format_iso(resolved), today), Some(resolved));
        }

        #[test]
        fn prop_month_day_never_before_today(today in any_date(), m in 1_u32..=12, d in 1_u32..=31) {
            let text = format!("{}/{}", m, d);
            if let Some(resolved) = parse_due_date(&text, today) {
                prop_assert!(resolved >= today);
                prop_assert_eq!((resolved.month(), resolved.day()), (m, d));
            }
        }
    }
}
