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

use crate::message::Message;

type Map = serde_json::Map<String, serde_json::Value>;
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const TYPE_FIELD: &str = "@type";
const VALUE_FIELD: &str = "value";

/// `Any` contains an arbitrary serialized message along with a URL that
/// describes the type of the serialized message.
///
/// Long-running operations use `Any` to carry their metadata and results. The
/// JSON representation keeps the message fields inline and adds a `@type`
/// field with the type URL.
///
/// # Example
/// ```
/// # use vertex_wkt::{Any, AnyError, Duration};
/// let duration = Duration::clamp(123, 456);
/// let any = Any::from_msg(&duration)?;
/// assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Duration"));
/// let extracted = any.to_msg::<Duration>()?;
/// assert_eq!(extracted, duration);
/// # Ok::<(), AnyError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Any(Map);

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] BoxError),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] BoxError),

    /// Mismatched type, the [Any] does not contain the desired type.
    #[error("expected type mismatch in Any deserialization type={has}, want={want}")]
    TypeMismatch {
        /// The type URL contained in the `Any`.
        has: String,
        /// The type URL of the desired type to extract from the `Any`.
        want: String,
    },
}

impl AnyError {
    fn ser<T: Into<BoxError>>(v: T) -> Self {
        Self::Serialization(v.into())
    }

    fn deser<T: Into<BoxError>>(v: T) -> Self {
        Self::Deserialization(v.into())
    }
}

impl Any {
    /// Returns the name of the contained type, if any.
    pub fn type_url(&self) -> Option<&str> {
        self.0.get(TYPE_FIELD).and_then(serde_json::Value::as_str)
    }

    /// Creates a new [Any] from any [Message] that also supports serialization
    /// to JSON.
    pub fn from_msg<T>(message: &T) -> Result<Self, AnyError>
    where
        T: Message,
    {
        let value = serde_json::to_value(message).map_err(AnyError::ser)?;
        let mut map = Map::new();
        map.insert(TYPE_FIELD.to_string(), T::typename().into());
        if T::value_encoded() {
            map.insert(VALUE_FIELD.to_string(), value);
            return Ok(Self(map));
        }
        match value {
            serde_json::Value::Object(fields) => {
                map.extend(fields);
                Ok(Self(map))
            }
            other => Err(AnyError::ser(format!(
                "expected a JSON object for {}, got {other}",
                T::typename()
            ))),
        }
    }

    /// Extracts (if possible) a `T` value from the [Any].
    pub fn to_msg<T>(&self) -> Result<T, AnyError>
    where
        T: Message,
    {
        let has = self.type_url().unwrap_or_default();
        if has != T::typename() {
            return Err(AnyError::TypeMismatch {
                has: has.to_string(),
                want: T::typename().to_string(),
            });
        }
        if T::value_encoded() {
            let value = self.0.get(VALUE_FIELD).cloned().unwrap_or_default();
            return serde_json::from_value(value).map_err(AnyError::deser);
        }
        let mut fields = self.0.clone();
        fields.remove(TYPE_FIELD);
        serde_json::from_value(serde_json::Value::Object(fields)).map_err(AnyError::deser)
    }
}

impl Message for Any {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Any"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Duration, Empty};
    use serde_json::json;

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Stuff {
        display_name: String,
    }

    impl Message for Stuff {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Stuff"
        }
    }

    #[test]
    fn object_round_trip() -> anyhow::Result<()> {
        let input = Stuff {
            display_name: "abc".into(),
        };
        let any = Any::from_msg(&input)?;
        let got = serde_json::to_value(&any)?;
        assert_eq!(
            got,
            json!({"@type": "type.googleapis.com/test.Stuff", "displayName": "abc"})
        );
        assert_eq!(any.to_msg::<Stuff>()?, input);
        Ok(())
    }

    #[test]
    fn value_encoded() -> anyhow::Result<()> {
        let any = Any::from_msg(&Duration::clamp(12, 0))?;
        let got = serde_json::to_value(&any)?;
        assert_eq!(
            got,
            json!({"@type": "type.googleapis.com/google.protobuf.Duration", "value": "12s"})
        );
        Ok(())
    }

    #[test]
    fn type_mismatch() -> anyhow::Result<()> {
        let any = Any::from_msg(&Empty::default())?;
        let err = any.to_msg::<Stuff>().unwrap_err();
        assert!(
            matches!(&err, AnyError::TypeMismatch { has, want } if has == Empty::typename() && want == Stuff::typename()),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn bad_payload() -> anyhow::Result<()> {
        let any: Any = serde_json::from_value(
            json!({"@type": "type.googleapis.com/test.Stuff", "displayName": 42}),
        )?;
        let err = any.to_msg::<Stuff>().unwrap_err();
        assert!(matches!(err, AnyError::Deserialization(_)), "{err:?}");
        Ok(())
    }
}
