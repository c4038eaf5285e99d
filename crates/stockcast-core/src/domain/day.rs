use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::ValidationError;

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// ISO calendar day (`YYYY-MM-DD`), the date axis for both historical and
/// forecast points. Carries no time-of-day or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDay(Date);

impl TradingDay {
    /// Current calendar day on the UTC wall clock.
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDay {
                value: input.to_owned(),
            })
    }

    /// Calendar day of a point-in-time timestamp, time-of-day stripped.
    pub fn from_timestamp(ts: OffsetDateTime) -> Self {
        Self(ts.date())
    }

    /// The day `offset` calendar days later.
    pub fn plus_days(self, offset: usize) -> Self {
        let shifted = self
            .0
            .checked_add(Duration::days(offset as i64))
            .expect("calendar day arithmetic must stay within the supported range");
        Self(shifted)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DAY_FORMAT)
            .expect("TradingDay must be formattable as YYYY-MM-DD")
    }
}

impl Display for TradingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl From<Date> for TradingDay {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for TradingDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn parses_iso_day() {
        let parsed = TradingDay::parse("2024-01-02").expect("must parse");
        assert_eq!(parsed.format_iso(), "2024-01-02");
    }

    #[test]
    fn rejects_timestamp_with_time_component() {
        let err = TradingDay::parse("2024-01-02T00:00:00Z").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDay { .. }));
    }

    #[test]
    fn strips_time_of_day_from_timestamp() {
        let ts = datetime!(2024-03-15 21:45:00 UTC);
        assert_eq!(TradingDay::from_timestamp(ts).format_iso(), "2024-03-15");
    }

    #[test]
    fn advances_across_month_boundary() {
        let day = TradingDay::parse("2024-01-31").expect("must parse");
        assert_eq!(day.plus_days(1).format_iso(), "2024-02-01");
        assert_eq!(day.plus_days(0), day);
    }

    #[test]
    fn serializes_as_plain_string() {
        let day = TradingDay::parse("2024-06-01").expect("must parse");
        let json = serde_json::to_string(&day).expect("must serialize");
        assert_eq!(json, "\"2024-06-01\"");
    }
}
