// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const MAX_SECONDS: i64 = 315_576_000_000;

/// A signed, fixed-length span of time with nanosecond resolution.
///
/// The JSON encoding is a string with the number of seconds, an optional
/// fraction, and an `s` suffix, for example `"3.5s"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Duration] instances.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum DurationError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The sign of the seconds component does not match the sign of the
    /// nanoseconds component.
    #[error("if seconds and nanoseconds are not zero, they must have the same sign")]
    MismatchedSigns,

    /// Cannot deserialize the duration.
    #[error("cannot deserialize the duration: {0}")]
    Deserialize(String),
}

impl Duration {
    /// Creates a [Duration] from the seconds and nanoseconds component.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, DurationError> {
        if !(-MAX_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(DurationError::OutOfRange);
        }
        if nanos.unsigned_abs() as i64 >= NANOS_PER_SECOND {
            return Err(DurationError::OutOfRange);
        }
        if (seconds > 0 && nanos < 0) || (seconds < 0 && nanos > 0) {
            return Err(DurationError::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a [Duration], normalizing and clamping out of range inputs.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let total = (seconds as i128) * (NANOS_PER_SECOND as i128) + nanos as i128;
        let limit = (MAX_SECONDS as i128) * (NANOS_PER_SECOND as i128);
        let total = total.clamp(-limit, limit);
        Self {
            seconds: (total / NANOS_PER_SECOND as i128) as i64,
            nanos: (total % NANOS_PER_SECOND as i128) as i32,
        }
    }

    /// Returns the seconds part of the duration.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second part of the duration.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn parse(value: &str) -> Result<Self, DurationError> {
        let bad = || DurationError::Deserialize(format!("invalid duration {value:?}"));
        let digits = value.strip_suffix('s').ok_or_else(bad)?;
        let (negative, digits) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || fraction.len() > 9 {
            return Err(bad());
        }
        let seconds = whole.parse::<i64>().map_err(|_| bad())?;
        let nanos = if fraction.is_empty() {
            0
        } else {
            format!("{fraction:0<9}").parse::<i32>().map_err(|_| bad())?
        };
        if negative {
            return Self::new(-seconds, -nanos);
        }
        Self::new(seconds, nanos)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.seconds < 0 || self.nanos < 0 {
            "-"
        } else {
            ""
        };
        let seconds = self.seconds.unsigned_abs();
        if self.nanos == 0 {
            return write!(f, "{sign}{seconds}s");
        }
        let fraction = format!("{:09}", self.nanos.unsigned_abs());
        write!(f, "{sign}{seconds}.{}s", fraction.trim_end_matches('0'))
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| DurationError::OutOfRange)?;
        Self::new(seconds, value.subsec_nanos() as i32)
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || value.nanos < 0 {
            return Err(DurationError::OutOfRange);
        }
        Ok(std::time::Duration::new(
            value.seconds as u64,
            value.nanos as u32,
        ))
    }
}

impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

impl crate::message::Message for Duration {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Duration"
    }

    fn value_encoded() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(0, 0, "0s")]
    #[test_case(12, 0, "12s")]
    #[test_case(3, 500_000_000, "3.5s")]
    #[test_case(1, 340_012, "1.000340012s")]
    #[test_case(-2, -250_000_000, "-2.25s")]
    #[test_case(0, -1, "-0.000000001s")]
    fn serde(seconds: i64, nanos: i32, want: &str) -> anyhow::Result<()> {
        let input = Duration::new(seconds, nanos)?;
        let got = serde_json::to_value(input)?;
        assert_eq!(got, json!(want));
        let back = serde_json::from_value::<Duration>(got)?;
        assert_eq!(back, input);
        Ok(())
    }

    #[test_case("12"; "missing suffix")]
    #[test_case("s"; "missing seconds")]
    #[test_case("1.0000000001s"; "too many digits")]
    #[test_case("abc s"; "not a number")]
    fn deserialize_errors(input: &str) {
        let got = serde_json::from_value::<Duration>(json!(input));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn new_errors() {
        assert_eq!(Duration::new(1, -1), Err(DurationError::MismatchedSigns));
        assert_eq!(
            Duration::new(0, 1_000_000_000),
            Err(DurationError::OutOfRange)
        );
        assert_eq!(
            Duration::new(MAX_SECONDS + 1, 0),
            Err(DurationError::OutOfRange)
        );
    }

    #[test]
    fn clamp() {
        assert_eq!(Duration::clamp(1, 1_500_000_000), Duration::new(2, 500_000_000).unwrap());
        assert_eq!(Duration::clamp(i64::MAX, 0).seconds(), MAX_SECONDS);
    }

    #[test]
    fn std_conversions() -> anyhow::Result<()> {
        let d = Duration::try_from(std::time::Duration::from_millis(1500))?;
        assert_eq!(d, Duration::new(1, 500_000_000)?);
        let back = std::time::Duration::try_from(d)?;
        assert_eq!(back, std::time::Duration::from_millis(1500));
        Ok(())
    }
}
