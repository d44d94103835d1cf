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

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A point in time independent of any time zone or local calendar.
///
/// The JSON encoding is an RFC 3339 string in UTC, for example
/// `"2025-03-01T10:20:30.5Z"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// Cannot deserialize the timestamp.
    #[error("cannot deserialize the timestamp: {0}")]
    Deserialize(String),
}

impl Timestamp {
    /// Creates a new [Timestamp] from the seconds since the Unix epoch and
    /// the sub-second nanoseconds.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, TimestampError> {
        if !(0..NANOS_PER_SECOND as i32).contains(&nanos) {
            return Err(TimestampError::OutOfRange);
        }
        let ts = Self { seconds, nanos };
        ts.to_datetime()?;
        Ok(ts)
    }

    /// The seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second component.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn to_datetime(self) -> Result<OffsetDateTime, TimestampError> {
        let total = self.seconds as i128 * NANOS_PER_SECOND + self.nanos as i128;
        OffsetDateTime::from_unix_timestamp_nanos(total).map_err(|_| TimestampError::OutOfRange)
    }
}

impl TryFrom<OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        Self::new(value.unix_timestamp(), value.nanosecond() as i32)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        value.to_datetime()
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::Error as _;
        let formatted = self
            .to_datetime()
            .map_err(S::Error::custom)?
            .format(&Rfc3339)
            .map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let value = String::deserialize(deserializer)?;
        let parsed = OffsetDateTime::parse(&value, &Rfc3339)
            .map_err(|e| D::Error::custom(TimestampError::Deserialize(e.to_string())))?;
        Self::try_from(parsed).map_err(D::Error::custom)
    }
}

impl crate::message::Message for Timestamp {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Timestamp"
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

    #[test_case(0, 0, "1970-01-01T00:00:00Z")]
    #[test_case(1_740_824_430, 500_000_000, "2025-03-01T10:20:30.5Z")]
    fn serialize(seconds: i64, nanos: i32, want: &str) -> anyhow::Result<()> {
        let got = serde_json::to_value(Timestamp::new(seconds, nanos)?)?;
        assert_eq!(got, json!(want));
        Ok(())
    }

    #[test_case("1970-01-01T00:00:00Z", 0, 0)]
    #[test_case("2025-03-01T11:20:30.5+01:00", 1_740_824_430, 500_000_000)]
    fn deserialize(input: &str, seconds: i64, nanos: i32) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Timestamp>(json!(input))?;
        assert_eq!(got, Timestamp::new(seconds, nanos)?);
        Ok(())
    }

    #[test]
    fn errors() {
        assert_eq!(Timestamp::new(0, -1), Err(TimestampError::OutOfRange));
        assert_eq!(Timestamp::new(i64::MAX, 0), Err(TimestampError::OutOfRange));
        let got = serde_json::from_value::<Timestamp>(json!("yesterday"));
        assert!(got.is_err(), "{got:?}");
    }
}
