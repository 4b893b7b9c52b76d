use chrono::{DateTime, FixedOffset, Weekday};

/// RFC-822 layout used by RSS 2.0 (`Tue, 21 Aug 2012 19:50:37 +0900`).
const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Formats a Unix timestamp (seconds) as an RFC-822 date in `offset`.
///
/// Returns `None` when the timestamp is outside the range chrono can
/// represent.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use rssgen::util::format_rfc822;
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// assert_eq!(
///     format_rfc822(1438577522, &utc).as_deref(),
///     Some("Mon, 03 Aug 2015 04:52:02 +0000")
/// );
/// assert_eq!(format_rfc822(i64::MAX, &utc), None);
/// ```
pub fn format_rfc822(timestamp: i64, offset: &FixedOffset) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| {
        utc.with_timezone(offset)
            .format(RFC822_FORMAT)
            .to_string()
    })
}

/// Parses a full English weekday name, case-sensitively.
///
/// Unlike `chrono::Weekday`'s `FromStr`, abbreviations and other casings are
/// rejected: `<skipDays>` only allows the seven capitalized names.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "Sunday" => Some(Weekday::Sun),
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Full English name of a weekday, as written inside `<day>`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
