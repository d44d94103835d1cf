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

//! Converts the well-known types and the client library types to and from
//! their `prost` representation.
//!
//! The binary RPC transport encodes the requests with `prost`. The generated
//! clients implement [ToProto] and [FromProto] for each of their messages,
//! this module provides the implementations for primitives, the well-known
//! types and [gax::error::rpc::Status].

use std::collections::BTreeMap;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("enum {0} does not contain an integer value")]
    EnumNoIntegerValue(&'static str),
    #[error("field {0} is only supported by the REST transport")]
    RestOnlyField(&'static str),
    #[error("Unexpected type URL: {0}")]
    UnexpectedTypeUrl(String),
    #[error("gax/prost conversion error: {0}")]
    Other(#[source] BoxError),
}

impl ConvertError {
    pub fn other<T>(e: T) -> Self
    where
        T: Into<BoxError>,
    {
        ConvertError::Other(e.into())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Converts from `Self` into `T`, where `T` is expected to be a Protobuf-generated type.
pub trait ToProto<T>: Sized {
    type Output;
    fn to_proto(self) -> Result<Self::Output>;
}

/// Converts from `Self` into `T`, where `Self` is expected to be a Protobuf-generated type.
pub trait FromProto<T>: Sized {
    // Consumes `self` so repeated fields and maps can use the same code.
    fn cnv(self) -> Result<T>;
}

/// A helper for map conversions.
pub fn pair_transpose<K, V>(a: Result<K>, b: Result<V>) -> Result<(K, V)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), _) => Err(e),
        (_, Err(e)) => Err(e),
    }
}

macro_rules! impl_primitive {
    ($t: ty) => {
        impl ToProto<$t> for $t {
            type Output = $t;
            fn to_proto(self) -> Result<$t> {
                Ok(self)
            }
        }

        impl FromProto<$t> for $t {
            fn cnv(self) -> Result<$t> {
                Ok(self)
            }
        }
    };
}

impl_primitive!(());
impl_primitive!(bool);
impl_primitive!(i32);
impl_primitive!(i64);
impl_primitive!(f64);
impl_primitive!(String);

impl ToProto<()> for wkt::Empty {
    type Output = ();
    fn to_proto(self) -> Result<()> {
        Ok(())
    }
}

impl FromProto<wkt::Empty> for () {
    fn cnv(self) -> Result<wkt::Empty> {
        Ok(wkt::Empty::default())
    }
}

impl FromProto<wkt::Duration> for prost_types::Duration {
    fn cnv(self) -> Result<wkt::Duration> {
        Ok(wkt::Duration::clamp(self.seconds, self.nanos))
    }
}

impl ToProto<prost_types::Duration> for wkt::Duration {
    type Output = prost_types::Duration;
    fn to_proto(self) -> Result<prost_types::Duration> {
        Ok(prost_types::Duration {
            seconds: self.seconds(),
            nanos: self.nanos(),
        })
    }
}

impl FromProto<wkt::FieldMask> for prost_types::FieldMask {
    fn cnv(self) -> Result<wkt::FieldMask> {
        Ok(wkt::FieldMask::default().set_paths(self.paths))
    }
}

impl ToProto<prost_types::FieldMask> for wkt::FieldMask {
    type Output = prost_types::FieldMask;
    fn to_proto(self) -> Result<prost_types::FieldMask> {
        Ok(prost_types::FieldMask { paths: self.paths })
    }
}

impl FromProto<wkt::Timestamp> for prost_types::Timestamp {
    fn cnv(self) -> Result<wkt::Timestamp> {
        wkt::Timestamp::new(self.seconds, self.nanos).map_err(ConvertError::other)
    }
}

impl ToProto<prost_types::Timestamp> for wkt::Timestamp {
    type Output = prost_types::Timestamp;
    fn to_proto(self) -> Result<prost_types::Timestamp> {
        Ok(prost_types::Timestamp {
            seconds: self.seconds(),
            nanos: self.nanos(),
        })
    }
}

impl FromProto<wkt::Struct> for prost_types::Struct {
    fn cnv(self) -> Result<wkt::Struct> {
        self.fields
            .into_iter()
            .map(|(k, v)| pair_transpose(k.cnv(), v.cnv()))
            .collect::<Result<serde_json::Map<_, _>>>()
    }
}

impl ToProto<prost_types::Struct> for wkt::Struct {
    type Output = prost_types::Struct;
    fn to_proto(self) -> Result<prost_types::Struct> {
        Ok(prost_types::Struct {
            fields: self
                .into_iter()
                .map(|(k, v)| pair_transpose(k.to_proto(), v.to_proto()))
                .collect::<Result<BTreeMap<_, _>>>()?,
        })
    }
}

impl FromProto<wkt::Value> for prost_types::Value {
    fn cnv(self) -> Result<wkt::Value> {
        use prost_types::value::Kind;
        let value = match self.kind {
            None | Some(Kind::NullValue(_)) => wkt::Value::Null,
            Some(Kind::NumberValue(v)) => serde_json::Number::from_f64(v)
                .map(wkt::Value::Number)
                .ok_or_else(|| ConvertError::other(format!("{v} is not a valid JSON number")))?,
            Some(Kind::StringValue(v)) => wkt::Value::String(v),
            Some(Kind::BoolValue(v)) => wkt::Value::Bool(v),
            Some(Kind::StructValue(v)) => wkt::Value::Object(v.cnv()?),
            Some(Kind::ListValue(v)) => wkt::Value::Array(v.cnv()?),
        };
        Ok(value)
    }
}

impl ToProto<prost_types::Value> for wkt::Value {
    type Output = prost_types::Value;
    fn to_proto(self) -> Result<prost_types::Value> {
        use prost_types::value::Kind;
        let kind = match self {
            serde_json::Value::Null => Kind::NullValue(prost_types::NullValue::NullValue as i32),
            serde_json::Value::Number(v) => Kind::NumberValue(v.as_f64().unwrap_or_default()),
            serde_json::Value::String(v) => Kind::StringValue(v),
            serde_json::Value::Bool(v) => Kind::BoolValue(v),
            serde_json::Value::Array(v) => Kind::ListValue(v.to_proto()?),
            serde_json::Value::Object(v) => Kind::StructValue(v.to_proto()?),
        };
        Ok(prost_types::Value { kind: Some(kind) })
    }
}

impl FromProto<wkt::ListValue> for prost_types::ListValue {
    fn cnv(self) -> Result<wkt::ListValue> {
        self.values
            .into_iter()
            .map(|v| v.cnv())
            .collect::<Result<Vec<_>>>()
    }
}

impl ToProto<prost_types::ListValue> for wkt::ListValue {
    type Output = prost_types::ListValue;
    fn to_proto(self) -> Result<Self::Output> {
        Ok(prost_types::ListValue {
            values: self
                .into_iter()
                .map(|v| v.to_proto())
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn fmt_convert_error() {
        let e = ConvertError::EnumNoIntegerValue("state");
        let fmt = format!("{e}");
        assert!(
            fmt.contains("state") && fmt.contains("does not contain an integer"),
            "{fmt}"
        );

        let e = ConvertError::RestOnlyField("study_spec");
        let fmt = format!("{e}");
        assert!(
            fmt.contains("study_spec") && fmt.contains("REST transport"),
            "{fmt}"
        );

        let e = ConvertError::UnexpectedTypeUrl("type.googleapis.com/my.custom.Message".into());
        let fmt = format!("{e}");
        assert!(fmt.contains("type.googleapis.com/my.custom.Message"), "{fmt}");

        let source = wkt::AnyError::TypeMismatch {
            has: "has.type".into(),
            want: "want.type".into(),
        };
        let fmt = format!("{}", ConvertError::other(source));
        ["gax/prost conversion error", "has.type", "want.type"]
            .into_iter()
            .for_each(|want| assert!(fmt.contains(want), "missing {want} in {fmt}"));
    }

    fn err() -> ConvertError {
        ConvertError::EnumNoIntegerValue("test")
    }

    #[test_case(Err(err()), Ok(2))]
    #[test_case(Ok(1), Err(err()))]
    #[test_case(Err(err()), Err(err()))]
    fn pair_transpose_error(a: Result<i32>, b: Result<i32>) {
        assert!(pair_transpose(a, b).is_err());
    }

    #[test]
    fn pair_transpose_success() -> anyhow::Result<()> {
        assert_eq!(pair_transpose(Ok(1), Ok("a"))?, (1, "a"));
        Ok(())
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        let () = wkt::Empty::default().to_proto()?;
        assert_eq!(FromProto::<wkt::Empty>::cnv(())?, wkt::Empty::default());
        Ok(())
    }

    #[test]
    fn duration() -> anyhow::Result<()> {
        let got = wkt::Duration::clamp(123, 456).to_proto()?;
        assert_eq!(
            got,
            prost_types::Duration {
                seconds: 123,
                nanos: 456
            }
        );
        assert_eq!(got.cnv()?, wkt::Duration::clamp(123, 456));
        Ok(())
    }

    #[test]
    fn field_mask() -> anyhow::Result<()> {
        let got = wkt::FieldMask::default()
            .set_paths(["display_name", "labels"])
            .to_proto()?;
        assert_eq!(got.paths, vec!["display_name", "labels"]);
        let got: wkt::FieldMask = got.cnv()?;
        assert_eq!(got, wkt::FieldMask::default().set_paths(["display_name", "labels"]));
        Ok(())
    }

    #[test]
    fn timestamp() -> anyhow::Result<()> {
        let input = prost_types::Timestamp {
            seconds: 1_700_000_000,
            nanos: 500,
        };
        let got: wkt::Timestamp = input.clone().cnv()?;
        assert_eq!(got, wkt::Timestamp::new(1_700_000_000, 500)?);
        assert_eq!(got.to_proto()?, input);
        Ok(())
    }

    #[test]
    fn timestamp_out_of_range() {
        let input = prost_types::Timestamp {
            seconds: 0,
            nanos: -1,
        };
        let got = FromProto::<wkt::Timestamp>::cnv(input);
        assert!(matches!(got, Err(ConvertError::Other(_))), "{got:?}");
    }

    #[test_case(json!(null))]
    #[test_case(json!(1.5))]
    #[test_case(json!("abc"))]
    #[test_case(json!(true))]
    #[test_case(json!([1.0, "a", null]))]
    #[test_case(json!({"a": {"b": [false]}}))]
    fn value(input: wkt::Value) -> anyhow::Result<()> {
        let proto = input.clone().to_proto()?;
        let got: wkt::Value = proto.cnv()?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn value_kinds() -> anyhow::Result<()> {
        use prost_types::value::Kind;
        let got = json!({"n": 2.0, "s": "x"}).to_proto()?;
        let Some(Kind::StructValue(fields)) = got.kind.clone() else {
            panic!("expected a struct value, got {got:?}");
        };
        assert_eq!(
            fields.fields.get("n").and_then(|v| v.kind.clone()),
            Some(Kind::NumberValue(2.0))
        );
        assert_eq!(
            fields.fields.get("s").and_then(|v| v.kind.clone()),
            Some(Kind::StringValue("x".into()))
        );
        let missing: wkt::Value = prost_types::Value { kind: None }.cnv()?;
        assert_eq!(missing, wkt::Value::Null);
        Ok(())
    }

    #[test]
    fn value_nan() {
        let input = prost_types::Value {
            kind: Some(prost_types::value::Kind::NumberValue(f64::NAN)),
        };
        let got = FromProto::<wkt::Value>::cnv(input);
        assert!(got.is_err(), "{got:?}");
    }
}
