use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::PrimitiveValue;
use crate::error::{DecodeError, DecodeResult};

/// Precision levels for FHIR Date values.
///
/// FHIR dates support partial precision, allowing year-only, year-month,
/// or full date specifications. This enum tracks which components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR Time values. A FHIR time always carries
/// seconds; the fraction is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    /// Hour, minute, and second (HH:MM:SS)
    Second,
    /// With sub-second digits (HH:MM:SS.sss)
    Fraction,
}

/// Precision levels for FHIR DateTime values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with time to seconds and a zone (YYYY-MM-DDTHH:MM:SSZ)
    Second,
    /// Date with sub-second time and a zone (YYYY-MM-DDTHH:MM:SS.sssZ)
    Fraction,
}

/// A FHIR date with its precision and source text.
///
/// ```rust
/// use atrius_fhir_stu3::{DatePrecision, PrecisionDate};
///
/// let date = PrecisionDate::parse("2014-03").unwrap();
/// assert_eq!(date.precision(), DatePrecision::YearMonth);
/// assert_eq!(date.original_string(), "2014-03");
/// assert_eq!(date.day(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`. The year must have four
    /// digits and the date must exist in the calendar.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let year = fixed_digits(parts.next()?, 4)?;
        if year == 0 {
            return None;
        }
        let year = i32::try_from(year).ok()?;

        let month = match parts.next() {
            Some(part) => Some(fixed_digits(part, 2).filter(|m| (1..=12).contains(m))?),
            None => None,
        };
        let day = match parts.next() {
            Some(part) => Some(fixed_digits(part, 2)?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        let precision = match (month, day) {
            (None, _) => DatePrecision::Year,
            (Some(_), None) => DatePrecision::YearMonth,
            (Some(month), Some(day)) => {
                NaiveDate::from_ymd_opt(year, month, day)?;
                DatePrecision::Full
            }
        };

        Some(Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(s),
        })
    }

    /// A full-precision date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        use chrono::Datelike;

        let text = date.format("%Y-%m-%d").to_string();
        Self {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
            precision: DatePrecision::Full,
            original_string: Arc::from(text),
        }
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// The first day covered by this date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

/// A FHIR time of day, `HH:MM:SS` with optional fraction. `60` is accepted
/// as a leap second.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    pub fn parse(s: &str) -> Option<Self> {
        let (clock, fraction) = match s.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (s, None),
        };

        let mut parts = clock.split(':');
        let hour = fixed_digits(parts.next()?, 2).filter(|h| *h <= 23)?;
        let minute = fixed_digits(parts.next()?, 2).filter(|m| *m <= 59)?;
        let second = fixed_digits(parts.next()?, 2).filter(|s| *s <= 60)?;
        if parts.next().is_some() {
            return None;
        }

        let (nanosecond, precision) = match fraction {
            Some(digits) => (fraction_nanos(digits)?, TimePrecision::Fraction),
            None => (0, TimePrecision::Second),
        };

        Some(Self {
            hour,
            minute,
            second,
            nanosecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Leap seconds map onto chrono's representation (second 59 with a
    /// nanosecond count past one billion).
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if self.second == 60 {
            NaiveTime::from_hms_nano_opt(self.hour, self.minute, 59, 1_000_000_000 + self.nanosecond)
        } else {
            NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, self.nanosecond)
        }
    }
}

/// A FHIR dateTime: a partial date, or a full date with a time and a zone.
///
/// ```rust
/// use atrius_fhir_stu3::{DateTimePrecision, PrecisionDateTime};
///
/// let dt = PrecisionDateTime::parse("2015-02-07T13:28:17.239+02:00").unwrap();
/// assert_eq!(dt.precision(), DateTimePrecision::Fraction);
/// assert_eq!(dt.timezone_offset(), Some(120));
///
/// // A time without a zone is not a valid dateTime.
/// assert!(PrecisionDateTime::parse("2015-02-07T13:28:17").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Offset from UTC in minutes; present exactly when `time` is
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, rest)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            let precision = match date.precision() {
                DatePrecision::Year => DateTimePrecision::Year,
                DatePrecision::YearMonth => DateTimePrecision::YearMonth,
                DatePrecision::Full => DateTimePrecision::Date,
            };
            return Some(Self {
                date,
                time: None,
                timezone_offset: None,
                precision,
                original_string: Arc::from(s),
            });
        };

        let date = PrecisionDate::parse(date_part).filter(|d| d.precision() == DatePrecision::Full)?;
        let (time_part, offset) = split_zone(rest)?;
        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision() {
            TimePrecision::Second => DateTimePrecision::Second,
            TimePrecision::Fraction => DateTimePrecision::Fraction,
        };

        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// Converts to UTC, filling missing components with the start of the
    /// period (January, the 1st, midnight UTC).
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let naive_date = self.date.to_naive_date()?;
        let naive_time = match &self.time {
            Some(time) => time.to_naive_time()?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        let local = naive_date.and_time(naive_time);
        let offset = TimeDelta::minutes(i64::from(self.timezone_offset.unwrap_or(0)));
        let utc = local.checked_sub_signed(offset)?;
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(utc, Utc))
    }
}

/// A FHIR instant: a dateTime with at least seconds and a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    pub fn parse(s: &str) -> Option<Self> {
        PrecisionDateTime::parse(s)
            .filter(|dt| dt.precision() >= DateTimePrecision::Second)
            .map(|inner| Self { inner })
    }

    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

/// Parses exactly `len` ASCII digits.
fn fixed_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Sub-second digits to nanoseconds; digits past the ninth are kept in the
/// text only.
fn fraction_nanos(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant: String = digits.chars().take(9).collect();
    let scale = 10u32.pow(9 - significant.len() as u32);
    significant.parse::<u32>().ok().map(|n| n * scale)
}

/// Splits `HH:MM:SS[.f](Z|+hh:mm|-hh:mm)` into the time and its offset in
/// minutes. The zone is mandatory.
fn split_zone(rest: &str) -> Option<(&str, i32)> {
    if let Some(time) = rest.strip_suffix('Z') {
        return Some((time, 0));
    }
    let index = rest.rfind(['+', '-'])?;
    let (time, zone) = rest.split_at(index);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let (hours, minutes) = zone[1..].split_once(':')?;
    let hours = fixed_digits(hours, 2)?;
    let minutes = fixed_digits(minutes, 2).filter(|m| *m <= 59)?;
    if hours > 14 || (hours == 14 && minutes != 0) {
        return None;
    }
    let total = i32::try_from(hours * 60 + minutes).ok()?;
    Some((time, sign * total))
}

macro_rules! temporal_primitive {
    ($ty:ident, $expected:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.original_string())
            }
        }

        impl FromStr for $ty {
            type Err = DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::parse(s)
                    .ok_or_else(|| DecodeError::type_mismatch_text($expected, format!("\"{s}\"")))
            }
        }

        impl PrimitiveValue for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_json(value: &Value) -> DecodeResult<Self> {
                value
                    .as_str()
                    .and_then($ty::parse)
                    .ok_or_else(|| DecodeError::type_mismatch(Self::EXPECTED, value))
            }

            fn to_json(&self) -> Value {
                Value::String(self.original_string().to_string())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.original_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::parse(&s)
                    .ok_or_else(|| de::Error::custom(format!("invalid FHIR {}: {}", $expected, s)))
            }
        }
    };
}

temporal_primitive!(PrecisionDate, "date");
temporal_primitive!(PrecisionTime, "time");
temporal_primitive!(PrecisionDateTime, "dateTime");
temporal_primitive!(PrecisionInstant, "instant");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_partial_dates_keep_their_text() {
        for text in ["2014", "2014-03", "2014-03-09"] {
            let date = PrecisionDate::parse(text).unwrap();
            assert_eq!(date.original_string(), text);
            assert_eq!(date.to_json(), json!(text));
        }
        assert_eq!(PrecisionDate::parse("2014").unwrap().precision(), DatePrecision::Year);
    }

    #[test]
    fn test_invalid_dates() {
        for text in ["14-03", "2014-3", "2014-13", "2014-02-30", "0000", "2014-03-09T", "2014/03"] {
            assert!(PrecisionDate::parse(text).is_none(), "{text} should be rejected");
        }
        assert_eq!(PrecisionDate::parse("2016-02-29").unwrap().day(), Some(29));
    }

    #[test]
    fn test_datetime_zone_rules() {
        let utc = PrecisionDateTime::parse("2017-01-01T00:00:00Z").unwrap();
        assert_eq!(utc.timezone_offset(), Some(0));
        assert_eq!(utc.precision(), DateTimePrecision::Second);

        let west = PrecisionDateTime::parse("2017-01-01T10:30:00-05:00").unwrap();
        assert_eq!(west.timezone_offset(), Some(-300));
        assert_eq!(
            west.to_chrono_datetime(),
            Some(Utc.with_ymd_and_hms(2017, 1, 1, 15, 30, 0).unwrap())
        );

        assert!(PrecisionDateTime::parse("2017-01-01T10:30:00").is_none());
        assert!(PrecisionDateTime::parse("2017-01-01T10:30Z").is_none());
        assert!(PrecisionDateTime::parse("2017-01T10:30:00Z").is_none());
        assert!(PrecisionDateTime::parse("2017-01-01T10:30:00+15:00").is_none());
    }

    #[test]
    fn test_fractional_seconds_are_preserved() {
        let dt = PrecisionDateTime::parse("2013-06-08T10:57:34.2112Z").unwrap();
        assert_eq!(dt.precision(), DateTimePrecision::Fraction);
        assert_eq!(dt.time().unwrap().to_naive_time().unwrap().to_string(), "10:57:34.211200");
        assert_eq!(dt.to_string(), "2013-06-08T10:57:34.2112Z");
    }

    #[test]
    fn test_time() {
        let time = PrecisionTime::parse("23:59:60").unwrap();
        assert_eq!(time.second(), 60);
        assert!(time.to_naive_time().is_some());

        assert!(PrecisionTime::parse("24:00:00").is_none());
        assert!(PrecisionTime::parse("10:00").is_none());
        assert!(PrecisionTime::parse("10:00:00.").is_none());
    }

    #[test]
    fn test_instant_needs_a_time() {
        assert!(PrecisionInstant::parse("2015-02-07").is_none());
        let instant = PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").unwrap();
        assert_eq!(instant.as_datetime().timezone_offset(), Some(120));
    }

    #[test]
    fn test_primitive_value_type_checks() {
        let err = PrecisionDate::from_json(&json!(2014)).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "date", .. }));

        let err = PrecisionDateTime::from_json(&json!("yesterday")).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "dateTime", .. }));
    }

    #[test]
    fn test_serde_uses_the_original_text() {
        let date: PrecisionDate = serde_json::from_str("\"1974-12\"").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"1974-12\"");
        assert!(serde_json::from_str::<PrecisionDate>("\"1974-12-32\"").is_err());
    }
}
