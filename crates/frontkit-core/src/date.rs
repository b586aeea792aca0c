//! # Date Helpers
//!
//! Calendar helpers for display text, age checks and report ranges.
//!
//! ## Input Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BACKEND TIMESTAMPS                     USER-TYPED DATES                │
//! │  ──────────────────                     ────────────────                │
//! │  2022-02-01T12:16:13                    22/11/2021  (DD/MM/YYYY)        │
//! │  2022-02-01T12:16:13+05:30                 │                            │
//! │  2022-02-01                                ▼  digits only               │
//! │     │                                   2021-11-22  (YYYY-MM-DD)        │
//! │     ▼                                      │                            │
//! │  get_date_from_long_value(..., fmt)        ▼                            │
//! │     "01 Feb, 12:16 PM"                  is_valid_date / age checks      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Functions that depend on "today" come in pairs: one reads the local
//! clock, the `_on` variant takes the date explicitly.

use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::general::Emptiness;

/// Format used by [`get_date_from_long_value`] when callers have no preference.
pub const DEFAULT_DATE_FORMAT: &str = "DD MMM YYYY";

/// Oldest age accepted as a date of birth.
pub const MAX_AGE_YEARS: i32 = 120;

/// Age below which a person is a minor.
pub const AGE_OF_MAJORITY: i32 = 18;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

// =============================================================================
// Month Names
// =============================================================================

/// Month abbreviation for a 1-based month number.
///
/// ## Example
/// ```rust
/// use frontkit_core::date::get_month_abbr_by_index;
///
/// assert_eq!(get_month_abbr_by_index(2), "Feb");
/// assert_eq!(get_month_abbr_by_index(13), "");
/// ```
pub fn get_month_abbr_by_index(month_number: i64) -> &'static str {
    if !(1..=12).contains(&month_number) {
        return "";
    }

    MONTH_ABBR[(month_number - 1) as usize]
}

// =============================================================================
// Long Value Formatting
// =============================================================================

/// Reads a backend timestamp.
///
/// Accepts RFC 3339 (the offset is kept, the wall-clock time is used),
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
pub fn parse_long_date_value(value: &str) -> CoreResult<NaiveDateTime> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, layout) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|err| CoreError::InvalidDate {
            input: value.to_string(),
            reason: err.to_string(),
        })
}

/// Reformats a backend timestamp with a day.js-style format string.
///
/// Returns an empty string for an empty format or an unreadable timestamp.
///
/// ## Tokens
/// ```text
/// YYYY 2022   YY 22      MMMM February   MMM Feb   MM 02   M 2
/// DD   01     D  1       dddd Tuesday    ddd Tue   dd Tu   d 2 (weekday)
/// HH   13     H  13      hh   01         h   1
/// mm   05     m  5       ss   09         s   9     SSS 042
/// A    PM     a  pm      [text] literal
/// ```
///
/// ## Example
/// ```rust
/// use frontkit_core::date::get_date_from_long_value;
///
/// assert_eq!(get_date_from_long_value("2022-02-01T12:16:13", "DD MMM, hh:mm A"), "01 Feb, 12:16 PM");
/// assert_eq!(get_date_from_long_value("2022-01-25T12:08:12", "DD MMM YYYY,  hh:mm A"), "25 Jan 2022,  12:08 PM");
/// assert_eq!(get_date_from_long_value("not a date", "DD MMM"), "");
/// ```
pub fn get_date_from_long_value(long_date_value: &str, date_format: &str) -> String {
    if date_format.is_empty_value() {
        return String::new();
    }

    match parse_long_date_value(long_date_value) {
        Ok(date_time) => format_date_time(&date_time, date_format),
        Err(err) => {
            debug!(input = long_date_value, error = %err, "Invalid date for formatting");
            String::new()
        }
    }
}

/// Renders `date_time` with day.js-style tokens. See [`get_date_from_long_value`].
pub fn format_date_time(date_time: &NaiveDateTime, format: &str) -> String {
    const TOKENS: [&str; 23] = [
        "YYYY", "MMMM", "dddd", "MMM", "ddd", "SSS", "YY", "MM", "DD", "dd", "HH", "hh", "mm",
        "ss", "M", "D", "d", "H", "h", "m", "s", "A", "a",
    ];

    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;

    while !rest.is_empty() {
        if let Some(literal) = rest.strip_prefix('[') {
            if let Some(end) = literal.find(']') {
                out.push_str(&literal[..end]);
                rest = &literal[end + 1..];
                continue;
            }
        }

        match TOKENS.iter().find(|token| rest.starts_with(*token)) {
            Some(token) => {
                out.push_str(&render_token(date_time, token));
                rest = &rest[token.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    out.push(ch);
                }
                rest = chars.as_str();
            }
        }
    }

    out
}

fn render_token(dt: &NaiveDateTime, token: &str) -> String {
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let month0 = dt.month0() as usize;

    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "MMMM" => MONTH_NAMES[month0].to_string(),
        "MMM" => MONTH_ABBR[month0].to_string(),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => WEEKDAY_NAMES[weekday].to_string(),
        "ddd" => WEEKDAY_NAMES[weekday][..3].to_string(),
        "dd" => WEEKDAY_NAMES[weekday][..2].to_string(),
        "d" => weekday.to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{:02}", hour12),
        "h" => hour12.to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "SSS" => format!("{:03}", dt.nanosecond() / 1_000_000 % 1000),
        "A" => (if dt.hour() < 12 { "AM" } else { "PM" }).to_string(),
        "a" => (if dt.hour() < 12 { "am" } else { "pm" }).to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// Age
// =============================================================================

/// Age in whole years on `today`.
///
/// One year is taken off when `today` falls before the birthday in the
/// current year.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use frontkit_core::date::age_on;
///
/// let dob = NaiveDate::from_ymd_opt(1993, 10, 10).unwrap();
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2022, 10, 9).unwrap()), 28);
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2022, 10, 10).unwrap()), 29);
/// ```
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    let month_difference = today.month() as i32 - birth_date.month() as i32;

    if month_difference < 0 || (month_difference == 0 && today.day() < birth_date.day()) {
        age -= 1;
    }

    age
}

/// Age in whole years as of the local date.
pub fn get_age_from_date_of_birth(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, Local::now().date_naive())
}

// =============================================================================
// Date Arithmetic
// =============================================================================

/// The same day of the previous month, at the same time of day.
///
/// A day that does not exist in the previous month rolls over into the
/// following one, so 31 March gives 3 March (in a non-leap year).
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use frontkit_core::date::get_previous_month_date;
///
/// let date = NaiveDate::from_ymd_opt(2022, 3, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let previous = get_previous_month_date(date).unwrap();
/// assert_eq!(previous.date(), NaiveDate::from_ymd_opt(2022, 3, 3).unwrap());
/// ```
pub fn get_previous_month_date(date: NaiveDateTime) -> Option<NaiveDateTime> {
    let first_of_month = date.date().with_day(1)?;
    let first_of_previous = first_of_month.checked_sub_months(Months::new(1))?;
    let day = first_of_previous.checked_add_days(chrono::Days::new(u64::from(date.day() - 1)));

    if day.is_none() {
        warn!(input = %date, "Previous month date is out of range");
    }

    day.map(|d| d.and_time(date.time()))
}

/// Exactly 24 hours before `date`.
pub fn get_previous_day_date<Tz: TimeZone>(date: DateTime<Tz>) -> Option<DateTime<Tz>> {
    date.checked_sub_signed(Duration::hours(24))
}

/// `YYYY-MM-DD` for any calendar date.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use frontkit_core::date::get_date_in_iso_format;
///
/// assert_eq!(get_date_in_iso_format(&NaiveDate::from_ymd_opt(2022, 2, 4).unwrap()), "2022-02-04");
/// ```
pub fn get_date_in_iso_format<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

// =============================================================================
// User-Typed Dates
// =============================================================================

/// Rearranges the digits of a `DD/MM/YYYY` (or `DD-MM-YYYY`, `DDMMYYYY`)
/// string into `YYYY-MM-DD`.
///
/// Only the digit positions matter; the result is not checked against the
/// calendar. Anything other than exactly 8 digits is logged and gives an
/// empty string.
///
/// ## Example
/// ```rust
/// use frontkit_core::date::convert_str_to_valid_date_format;
///
/// assert_eq!(convert_str_to_valid_date_format("22/11/2021"), "2021-11-22");
/// assert_eq!(convert_str_to_valid_date_format("03-25-2015"), "2015-25-03");
/// assert_eq!(convert_str_to_valid_date_format("1/1/2021"), "");
/// ```
pub fn convert_str_to_valid_date_format(date: &str) -> String {
    rearrange_date_digits(date).unwrap_or_else(|err| {
        error!(input = date, error = %err, "Error in converting date's format");
        String::new()
    })
}

fn rearrange_date_digits(date: &str) -> CoreResult<String> {
    let digits: String = date.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != 8 {
        return Err(CoreError::InvalidDate {
            input: date.to_string(),
            reason: format!("expected 8 digits, found {}", digits.len()),
        });
    }

    Ok(format!("{}-{}-{}", &digits[4..8], &digits[2..4], &digits[0..2]))
}

/// Checks that `year{d}month{d}day` names a real calendar date.
///
/// ## Example
/// ```rust
/// use frontkit_core::date::is_valid_date;
///
/// assert!(is_valid_date("2021-11-22", "-"));
/// assert!(is_valid_date("2024/02/29", "/"));
/// assert!(!is_valid_date("2023-02-29", "-"));
/// assert!(!is_valid_date("", "-"));
/// ```
pub fn is_valid_date(date: &str, delimiter: &str) -> bool {
    parse_delimited_date(date, delimiter).is_ok()
}

fn parse_delimited_date(date: &str, delimiter: &str) -> CoreResult<NaiveDate> {
    let invalid = |reason: &str| CoreError::InvalidDate {
        input: date.to_string(),
        reason: reason.to_string(),
    };

    if date.is_empty_value() || delimiter.is_empty() {
        return Err(invalid("empty input"));
    }

    let parts: Vec<&str> = date.trim().split(delimiter).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid("expected year, month and day"));
    };

    let year: i32 = year.trim().parse().map_err(|_| invalid("year is not a number"))?;
    let month: u32 = month.trim().parse().map_err(|_| invalid("month is not a number"))?;
    let day: u32 = day.trim().parse().map_err(|_| invalid("day is not a number"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("no such calendar date"))
}

/// Inserts `/` after the day and month digits while a date is being typed.
///
/// ## Example
/// ```rust
/// use frontkit_core::date::format_date_with_back_slash;
///
/// assert_eq!(format_date_with_back_slash("1"), "1");
/// assert_eq!(format_date_with_back_slash("12"), "12/");
/// assert_eq!(format_date_with_back_slash("121"), "12/1");
/// assert_eq!(format_date_with_back_slash("1213"), "12/13");
/// assert_eq!(format_date_with_back_slash("12121212"), "12/12/1212");
/// ```
pub fn format_date_with_back_slash(input_date: &str) -> String {
    let digits: String = input_date.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    match len {
        0 | 1 => digits,
        2 => format!("{}/", digits),
        3 | 4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

fn parse_date_of_birth(dob: &str) -> CoreResult<NaiveDate> {
    let iso = rearrange_date_digits(dob)?;
    parse_delimited_date(&iso, "-")
}

/// Checks a typed date of birth (`DD/MM/YYYY` or `DDMMYYYY`) against `today`:
/// a real date, not in the future, and at most 120 years ago.
///
/// Minors pass; see [`is_age_minor_on`].
pub fn dob_validation_check_on(input_dob: &str, today: NaiveDate) -> bool {
    match parse_date_of_birth(input_dob) {
        Ok(dob) => dob <= today && age_on(dob, today) <= MAX_AGE_YEARS,
        Err(err) => {
            debug!(input = input_dob, error = %err, "Date of birth rejected");
            false
        }
    }
}

/// [`dob_validation_check_on`] as of the local date.
///
/// ## Example
/// ```rust
/// use frontkit_core::date::dob_validation_check;
///
/// assert!(dob_validation_check("10/10/2000"));
/// assert!(!dob_validation_check("10/10/1500"));
/// assert!(!dob_validation_check("31/02/2000"));
/// ```
pub fn dob_validation_check(input_dob: &str) -> bool {
    dob_validation_check_on(input_dob, Local::now().date_naive())
}

/// True when a typed date of birth is a real date and the person is under
/// 18 on `today`.
pub fn is_age_minor_on(dob: &str, today: NaiveDate) -> bool {
    parse_date_of_birth(dob).is_ok_and(|dob| age_on(dob, today) < AGE_OF_MAJORITY)
}

/// [`is_age_minor_on`] as of the local date.
pub fn is_age_minor(dob: &str) -> bool {
    is_age_minor_on(dob, Local::now().date_naive())
}

// =============================================================================
// Report Date Ranges
// =============================================================================

/// One financial year, April to March.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportDateRange {
    /// `Apr 2021`
    pub start_date: String,
    /// `Mar 2022`
    pub end_date: String,
}

/// Financial years from the current one (moved back by
/// `offset_from_current_financial_year`) down to `last_supported_year`,
/// newest first.
///
/// The financial year is taken to start in the year before `today` while
/// `today` falls in January to April.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use frontkit_core::date::report_date_ranges_on;
///
/// let today = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
/// let ranges = report_date_ranges_on(today, 2020, 1);
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[0].start_date, "Apr 2021");
/// assert_eq!(ranges[1].end_date, "Mar 2021");
/// ```
pub fn report_date_ranges_on(
    today: NaiveDate,
    last_supported_year: i32,
    offset_from_current_financial_year: i32,
) -> Vec<ReportDateRange> {
    let current_financial_year = if today.month0() < 4 {
        today.year() - 1 - offset_from_current_financial_year
    } else {
        today.year() - offset_from_current_financial_year
    };

    (last_supported_year..=current_financial_year)
        .rev()
        .map(|year| ReportDateRange {
            start_date: format!("Apr {}", year),
            end_date: format!("Mar {}", year + 1),
        })
        .collect()
}

/// [`report_date_ranges_on`] as of the local date.
pub fn get_report_date_input(
    last_supported_year: i32,
    offset_from_current_financial_year: i32,
) -> Vec<ReportDateRange> {
    report_date_ranges_on(
        Local::now().date_naive(),
        last_supported_year,
        offset_from_current_financial_year,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_month_abbr_by_index() {
        assert_eq!(get_month_abbr_by_index(1), "Jan");
        assert_eq!(get_month_abbr_by_index(2), "Feb");
        assert_eq!(get_month_abbr_by_index(12), "Dec");
        assert_eq!(get_month_abbr_by_index(0), "");
        assert_eq!(get_month_abbr_by_index(13), "");
        assert_eq!(get_month_abbr_by_index(-1), "");
    }

    #[test]
    fn test_get_date_from_long_value() {
        assert_eq!(
            get_date_from_long_value("2022-01-28T12:54:40", "DD MMM, hh:mm A"),
            "28 Jan, 12:54 PM"
        );
        assert_eq!(get_date_from_long_value("2022-02-01", DEFAULT_DATE_FORMAT), "01 Feb 2022");
        assert_eq!(
            get_date_from_long_value("2022-02-01T09:05:03+05:30", "H:m:s a"),
            "9:5:3 am"
        );
        assert_eq!(get_date_from_long_value("2022-02-01", ""), "");
        assert_eq!(get_date_from_long_value("", DEFAULT_DATE_FORMAT), "");
    }

    #[test]
    fn test_format_date_time_tokens() {
        let dt = ymd(2022, 2, 1).and_hms_milli_opt(0, 7, 9, 42).unwrap();
        assert_eq!(format_date_time(&dt, "dddd, MMMM D YY"), "Tuesday, February 1 22");
        assert_eq!(format_date_time(&dt, "ddd dd d"), "Tue Tu 2");
        assert_eq!(format_date_time(&dt, "hh:mm:ss.SSS A"), "12:07:09.042 AM");
        assert_eq!(format_date_time(&dt, "[Today is] D/M"), "Today is 1/2");
    }

    #[test]
    fn test_age_on() {
        let dob = ymd(1993, 10, 10);
        assert_eq!(age_on(dob, ymd(2022, 2, 4)), 28);
        assert_eq!(age_on(dob, ymd(2023, 10, 10)), 30);
        assert_eq!(age_on(dob, ymd(2023, 10, 9)), 29);
        assert_eq!(age_on(ymd(2022, 2, 4), ymd(2022, 2, 4)), 0);
    }

    #[test]
    fn test_get_previous_month_date() {
        let at = |d: NaiveDate| d.and_hms_opt(10, 21, 35).unwrap();

        assert_eq!(get_previous_month_date(at(ymd(2021, 3, 15))), Some(at(ymd(2021, 2, 15))));
        assert_eq!(get_previous_month_date(at(ymd(2015, 1, 25))), Some(at(ymd(2014, 12, 25))));
        assert_eq!(get_previous_month_date(at(ymd(2022, 3, 31))), Some(at(ymd(2022, 3, 3))));
        assert_eq!(get_previous_month_date(at(ymd(2024, 3, 30))), Some(at(ymd(2024, 3, 1))));
    }

    #[test]
    fn test_get_previous_day_date() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let date = ist.with_ymd_and_hms(2022, 3, 1, 3, 28, 49).unwrap();
        let previous = get_previous_day_date(date).unwrap();
        assert_eq!(previous, ist.with_ymd_and_hms(2022, 2, 28, 3, 28, 49).unwrap());

        let utc = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(get_previous_day_date(utc).unwrap().year(), 2021);
    }

    #[test]
    fn test_get_date_in_iso_format() {
        assert_eq!(get_date_in_iso_format(&ymd(2022, 2, 4)), "2022-02-04");
        let dt = ymd(999, 12, 31).and_hms_opt(23, 0, 0).unwrap();
        assert_eq!(get_date_in_iso_format(&dt), "0999-12-31");
    }

    #[test]
    fn test_convert_str_to_valid_date_format() {
        assert_eq!(convert_str_to_valid_date_format("22/11/2021"), "2021-11-22");
        assert_eq!(convert_str_to_valid_date_format("22112021"), "2021-11-22");
        assert_eq!(convert_str_to_valid_date_format("03/25/2015"), "2015-25-03");
        assert_eq!(convert_str_to_valid_date_format("2/11/2021"), "");
        assert_eq!(convert_str_to_valid_date_format(""), "");
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2021-11-22", "-"));
        assert!(is_valid_date("2021/11/22", "/"));
        assert!(!is_valid_date("2021-11-22", "/"));
        assert!(!is_valid_date("2015-25-03", "-"));
        assert!(!is_valid_date("2021-11", "-"));
        assert!(!is_valid_date("2021-aa-22", "-"));
    }

    #[test]
    fn test_format_date_with_back_slash() {
        assert_eq!(format_date_with_back_slash(""), "");
        assert_eq!(format_date_with_back_slash("12/1"), "12/1");
        assert_eq!(format_date_with_back_slash("1212"), "12/12");
        assert_eq!(format_date_with_back_slash("12/12"), "12/12");
        assert_eq!(format_date_with_back_slash("12121"), "12/12/1");
    }

    #[test]
    fn test_dob_validation_check_on() {
        let today = ymd(2022, 2, 4);
        assert!(dob_validation_check_on("10/10/2000", today));
        assert!(dob_validation_check_on("04/02/2022", today));
        assert!(!dob_validation_check_on("05/02/2022", today));
        assert!(!dob_validation_check_on("10/10/1500", today));
        assert!(dob_validation_check_on("04/02/1902", today));
        assert!(!dob_validation_check_on("03/02/1901", today));
        assert!(!dob_validation_check_on("30/02/2000", today));
        assert!(!dob_validation_check_on("", today));
    }

    #[test]
    fn test_is_age_minor_on() {
        let today = ymd(2022, 2, 4);
        assert!(!is_age_minor_on("10/10/1995", today));
        assert!(is_age_minor_on("10/10/2020", today));
        assert!(is_age_minor_on("05/02/2004", today));
        assert!(!is_age_minor_on("04/02/2004", today));
        assert!(!is_age_minor_on("99/99/2020", today));
    }

    #[test]
    fn test_report_date_ranges_on() {
        let june = ymd(2022, 6, 1);
        assert_eq!(
            report_date_ranges_on(june, 2021, 0),
            vec![
                ReportDateRange {
                    start_date: "Apr 2022".to_string(),
                    end_date: "Mar 2023".to_string(),
                },
                ReportDateRange {
                    start_date: "Apr 2021".to_string(),
                    end_date: "Mar 2022".to_string(),
                },
            ]
        );

        // January to April still belong to the previous financial year.
        let april = ymd(2022, 4, 20);
        assert_eq!(report_date_ranges_on(april, 2020, 0)[0].start_date, "Apr 2021");

        assert!(report_date_ranges_on(june, 2030, 0).is_empty());
    }
}
