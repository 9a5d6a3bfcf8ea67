/*
[INPUT]:  Timezone-aware datetimes and period names
[OUTPUT]: Epoch seconds/milliseconds and candlestick interval minutes
[POS]:    Utility layer - time conversions for request parameters
[UPDATE]: When the API adds candlestick periods or timestamp units
*/

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};

use crate::http::{KalshiError, Result};

/// Whole seconds since the Unix epoch, truncated
pub fn seconds_since_epoch<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.with_timezone(&Utc).timestamp()
}

/// Wall-clock now in whole seconds since the Unix epoch
pub fn current_time_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Wall-clock now in whole milliseconds since the Unix epoch
pub fn current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Candlestick aggregation period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodInterval {
    Minute,
    Hour,
    Day,
}

impl PeriodInterval {
    /// Length of the period in minutes, as the candlestick endpoint expects
    pub fn minutes(self) -> u32 {
        match self {
            PeriodInterval::Minute => 1,
            PeriodInterval::Hour => 60,
            PeriodInterval::Day => 24 * 60,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodInterval::Minute => "minute",
            PeriodInterval::Hour => "hour",
            PeriodInterval::Day => "day",
        }
    }
}

impl FromStr for PeriodInterval {
    type Err = KalshiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "minute" => Ok(PeriodInterval::Minute),
            "hour" => Ok(PeriodInterval::Hour),
            "day" => Ok(PeriodInterval::Day),
            other => Err(KalshiError::InvalidArgument(format!(
                "period_interval must be 'minute', 'hour', or 'day', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PeriodInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map "minute" / "hour" / "day" to 1 / 60 / 1440 minutes
pub fn period_interval(name: &str) -> Result<u32> {
    name.parse::<PeriodInterval>().map(PeriodInterval::minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use rstest::rstest;

    #[rstest]
    #[case("minute", 1)]
    #[case("hour", 60)]
    #[case("day", 1440)]
    fn test_period_interval_known(#[case] name: &str, #[case] expected: u32) {
        assert_eq!(period_interval(name).unwrap(), expected);
    }

    #[rstest]
    #[case("week")]
    #[case("Hour")]
    #[case("min")]
    #[case("")]
    #[case(" day")]
    fn test_period_interval_rejected(#[case] name: &str) {
        assert!(matches!(
            period_interval(name),
            Err(KalshiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_seconds_since_epoch_converts_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(seconds_since_epoch(&local), 1_704_067_200);
        assert_eq!(seconds_since_epoch(&local), seconds_since_epoch(&utc));
    }

    #[test]
    fn test_seconds_since_epoch_truncates() {
        let dt = Utc.timestamp_opt(1_700_000_000, 999_999_999).unwrap();
        assert_eq!(seconds_since_epoch(&dt), 1_700_000_000);
    }

    #[test]
    fn test_current_time_units_agree() {
        let seconds = current_time_seconds();
        let millis = current_time_millis();
        assert!((millis / 1000 - seconds).abs() <= 1);
    }

    #[test]
    fn test_period_interval_display_roundtrip() {
        for interval in [PeriodInterval::Minute, PeriodInterval::Hour, PeriodInterval::Day] {
            assert_eq!(interval.to_string().parse::<PeriodInterval>().unwrap(), interval);
        }
    }
}
