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

/// A generic empty message.
///
/// Returned by RPCs that have no meaningful result, such as `Cancel*`, and
/// used as the result type of long-running deletes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Empty {}

impl crate::message::Message for Empty {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde() -> anyhow::Result<()> {
        let got = serde_json::to_value(Empty::default())?;
        assert_eq!(got, json!({}));
        let got = serde_json::from_value::<Empty>(json!({"unknown": 1}))?;
        assert_eq!(got, Empty::default());
        Ok(())
    }
}
