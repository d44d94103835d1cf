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

/// A set of symbolic field paths.
///
/// Update RPCs use a `FieldMask` to name the fields the server should change.
/// Paths use the proto field names (`display_name`), while the JSON encoding
/// is a single comma-separated string of camel-case names (`"displayName"`).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the value of `paths`.
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Formats the mask as it appears in a JSON payload or a query parameter.
    pub fn to_json_string(&self) -> String {
        self.paths
            .iter()
            .map(|p| to_camel_case(p))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn to_camel_case(path: &str) -> String {
    let mut upper = false;
    let mut result = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '_' => upper = true,
            c if upper => {
                result.extend(c.to_uppercase());
                upper = false;
            }
            c => result.push(c),
        }
    }
    result
}

fn to_snake_case(path: &str) -> String {
    let mut result = String::with_capacity(path.len() + 4);
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            result.push('_');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

impl crate::message::Message for FieldMask {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.FieldMask"
    }

    fn value_encoded() -> bool {
        true
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_json_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let paths = value
            .split(',')
            .filter(|p| !p.is_empty())
            .map(to_snake_case)
            .collect();
        Ok(Self { paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(vec![], "")]
    #[test_case(vec!["display_name"], "displayName")]
    #[test_case(vec!["display_name", "labels", "model_monitoring_alert_config.enable_logging"], "displayName,labels,modelMonitoringAlertConfig.enableLogging")]
    fn serde(paths: Vec<&str>, want: &str) -> anyhow::Result<()> {
        let mask = FieldMask::default().set_paths(paths.clone());
        let got = serde_json::to_value(&mask)?;
        assert_eq!(got, json!(want));
        let back = serde_json::from_value::<FieldMask>(got)?;
        assert_eq!(back.paths, paths);
        Ok(())
    }
}
