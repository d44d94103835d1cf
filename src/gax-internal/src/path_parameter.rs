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

//! Maps requests to REST paths.
//!
//! Each RPC has one or more HTTP rules. A rule has a path template such as
//! `/v1/{parent=projects/*/locations/*}/customJobs`, where each variable
//! names a request field and the format its value must match. The first rule
//! where all the variables match is used. If none match, the request fails
//! with a [BindingError] that lists every unmet condition.
//!
//! Fields that do not appear in the path are sent in the body or as query
//! parameters, depending on the `body` of the rule.

use crate::routing_parameter::encode;
use gax::error::binding::{BindingError, PathMismatch, SubstitutionMismatch};
use serde_json::{Map, Value};

/// The HTTP binding of an RPC.
#[derive(Clone, Debug)]
pub struct HttpRule {
    pub method: http::Method,
    pub path: &'static str,
    /// `None` for rules without a body, `Some("*")` to send all the fields
    /// not bound to the path, or the name of a single field.
    pub body: Option<&'static str>,
}

/// The result of mapping a request to a [HttpRule].
#[derive(Clone, Debug, PartialEq)]
pub struct Transcoded {
    pub method: http::Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Map<String, Value>,
}

enum Part {
    Literal(&'static str),
    Variable {
        field: &'static str,
        pattern: &'static str,
    },
}

fn parse(template: &'static str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut remains = template;
    while let Some(open) = remains.find('{') {
        if open != 0 {
            parts.push(Part::Literal(&remains[..open]));
        }
        let close = remains[open..]
            .find('}')
            .map(|c| open + c)
            .unwrap_or(remains.len());
        let variable = &remains[open + 1..close];
        let (field, pattern) = variable.split_once('=').unwrap_or((variable, "*"));
        parts.push(Part::Variable { field, pattern });
        remains = remains.get(close + 1..).unwrap_or_default();
    }
    if !remains.is_empty() {
        parts.push(Part::Literal(remains));
    }
    parts
}

/// Returns true if `value` matches `pattern`.
///
/// In the pattern `*` matches a single non-empty segment, and a trailing `**`
/// matches one or more segments.
pub fn try_match(value: &str, pattern: &str) -> bool {
    let segments: Vec<&str> = value.split('/').collect();
    let expected: Vec<&str> = pattern.split('/').collect();
    match_segments(&segments, &expected)
}

fn match_segments(segments: &[&str], expected: &[&str]) -> bool {
    match (segments.split_first(), expected.split_first()) {
        (None, None) => true,
        (Some(_), Some((&"**", _))) => segments.iter().all(|s| !s.is_empty()),
        (Some((s, rest)), Some((&"*", tail))) => !s.is_empty() && match_segments(rest, tail),
        (Some((s, rest)), Some((e, tail))) => s == e && match_segments(rest, tail),
        _ => false,
    }
}

fn json_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        match c {
            '_' => upper = true,
            c if upper => {
                name.extend(c.to_uppercase());
                upper = false;
            }
            c => name.push(c),
        }
    }
    name
}

/// Finds a (possibly nested) field in the JSON representation of a request.
///
/// The field path uses the proto names, e.g.
/// `model_deployment_monitoring_job.name`.
pub fn lookup<'a>(request: &'a Value, field_path: &str) -> Option<&'a Value> {
    field_path
        .split('.')
        .try_fold(request, |v, name| v.get(json_name(name)))
}

fn remove(request: &mut Value, field_path: &str) {
    let mut names: Vec<String> = field_path.split('.').map(json_name).collect();
    let Some(last) = names.pop() else {
        return;
    };
    let parent = names
        .iter()
        .try_fold(request, |v, name| v.get_mut(name.as_str()));
    if let Some(Value::Object(map)) = parent {
        map.remove(&last);
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn bind(rule: &HttpRule, request: &Value) -> Result<String, PathMismatch> {
    let mut path = String::new();
    let mut subs = Vec::new();
    for part in parse(rule.path) {
        match part {
            Part::Literal(l) => path.push_str(l),
            Part::Variable { field, pattern } => {
                match lookup(request, field).and_then(as_string) {
                    Some(v) if try_match(&v, pattern) => path.push_str(&encode(&v)),
                    found => subs.push(SubstitutionMismatch {
                        field_name: field,
                        expected: pattern,
                        found,
                    }),
                }
            }
        }
    }
    if subs.is_empty() {
        return Ok(path);
    }
    Err(PathMismatch {
        template: rule.path,
        subs,
    })
}

fn path_fields(rule: &HttpRule) -> impl Iterator<Item = &'static str> {
    parse(rule.path).into_iter().filter_map(|p| match p {
        Part::Variable { field, .. } => Some(field),
        Part::Literal(_) => None,
    })
}

fn split(rule: &HttpRule, request: &Value) -> (Option<Value>, Map<String, Value>) {
    let mut remaining = request.clone();
    path_fields(rule).for_each(|f| remove(&mut remaining, f));
    let fields = match remaining {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    match rule.body {
        None => (None, fields),
        Some("*") => (Some(Value::Object(fields)), Map::new()),
        Some(body) => {
            let mut query = fields;
            let body = query
                .remove(&json_name(body))
                .unwrap_or_else(|| Value::Object(Map::new()));
            (Some(body), query)
        }
    }
}

/// Maps the JSON representation of a request to the first matching rule.
pub fn transcode(
    method: &'static str,
    rules: &[HttpRule],
    request: &Value,
) -> Result<Transcoded, BindingError> {
    let mut paths = Vec::new();
    for rule in rules {
        match bind(rule, request) {
            Ok(path) => {
                let (body, query) = split(rule, request);
                return Ok(Transcoded {
                    method: rule.method.clone(),
                    path,
                    body,
                    query,
                });
            }
            Err(mismatch) => paths.push(mismatch),
        }
    }
    Err(BindingError { method, paths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn get_rule() -> HttpRule {
        HttpRule {
            method: http::Method::GET,
            path: "/v1/{name=projects/*/locations/*/customJobs/*}",
            body: None,
        }
    }

    #[test_case("projects/p", "projects/*", true)]
    #[test_case("projects/p/locations/l", "projects/*/locations/*", true)]
    #[test_case("projects//locations/l", "projects/*/locations/*", false)]
    #[test_case("projects/p/locations/l/extra", "projects/*/locations/*", false)]
    #[test_case("projects/p", "projects/*/locations/*", false)]
    #[test_case("folders/p", "projects/*", false)]
    #[test_case("projects/p/locations/l/a/b", "projects/*/locations/*/**", true)]
    #[test_case("projects/p/locations/l", "projects/*/locations/*/**", false)]
    #[test_case("anything", "*", true)]
    #[test_case("", "*", false)]
    fn matching(value: &str, pattern: &str, want: bool) {
        assert_eq!(try_match(value, pattern), want, "{value} vs. {pattern}");
    }

    #[test_case("name", "name")]
    #[test_case("page_token", "pageToken")]
    #[test_case("model_deployment_monitoring_job", "modelDeploymentMonitoringJob")]
    fn json_names(input: &str, want: &str) {
        assert_eq!(json_name(input), want);
    }

    #[test]
    fn nested_lookup() {
        let request = json!({"modelDeploymentMonitoringJob": {"name": "projects/p"}});
        assert_eq!(
            lookup(&request, "model_deployment_monitoring_job.name"),
            Some(&json!("projects/p"))
        );
        assert_eq!(lookup(&request, "model_deployment_monitoring_job.other"), None);
    }

    #[test]
    fn get() -> anyhow::Result<()> {
        let request = json!({"name": "projects/p/locations/l/customJobs/j"});
        let got = transcode("GetCustomJob", &[get_rule()], &request)?;
        assert_eq!(got.method, http::Method::GET);
        assert_eq!(got.path, "/v1/projects/p/locations/l/customJobs/j");
        assert_eq!(got.body, None);
        assert!(got.query.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn list_with_query() -> anyhow::Result<()> {
        let rule = HttpRule {
            method: http::Method::GET,
            path: "/v1/{parent=projects/*/locations/*}/customJobs",
            body: None,
        };
        let request = json!({
            "parent": "projects/p/locations/l",
            "pageSize": 10,
            "pageToken": "abc",
        });
        let got = transcode("ListCustomJobs", &[rule], &request)?;
        assert_eq!(got.path, "/v1/projects/p/locations/l/customJobs");
        assert_eq!(got.query.get("pageSize"), Some(&json!(10)));
        assert_eq!(got.query.get("pageToken"), Some(&json!("abc")));
        assert_eq!(got.query.get("parent"), None);
        Ok(())
    }

    #[test]
    fn body_field() -> anyhow::Result<()> {
        let rule = HttpRule {
            method: http::Method::POST,
            path: "/v1/{parent=projects/*/locations/*}/customJobs",
            body: Some("custom_job"),
        };
        let request = json!({
            "parent": "projects/p/locations/l",
            "customJob": {"displayName": "d"},
        });
        let got = transcode("CreateCustomJob", &[rule], &request)?;
        assert_eq!(got.body, Some(json!({"displayName": "d"})));
        assert!(got.query.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn body_star() -> anyhow::Result<()> {
        let rule = HttpRule {
            method: http::Method::POST,
            path: "/v1/{name=projects/*/locations/*/customJobs/*}:cancel",
            body: Some("*"),
        };
        let request = json!({"name": "projects/p/locations/l/customJobs/j"});
        let got = transcode("CancelCustomJob", &[rule], &request)?;
        assert_eq!(got.path, "/v1/projects/p/locations/l/customJobs/j:cancel");
        assert_eq!(got.body, Some(json!({})));
        Ok(())
    }

    #[test]
    fn nested_path_field() -> anyhow::Result<()> {
        let rule = HttpRule {
            method: http::Method::PATCH,
            path: "/v1/{model_deployment_monitoring_job.name=projects/*/locations/*/modelDeploymentMonitoringJobs/*}",
            body: Some("model_deployment_monitoring_job"),
        };
        let request = json!({
            "modelDeploymentMonitoringJob": {
                "name": "projects/p/locations/l/modelDeploymentMonitoringJobs/m",
                "displayName": "d",
            },
            "updateMask": "displayName",
        });
        let got = transcode("UpdateModelDeploymentMonitoringJob", &[rule], &request)?;
        assert_eq!(
            got.path,
            "/v1/projects/p/locations/l/modelDeploymentMonitoringJobs/m"
        );
        assert_eq!(got.body, Some(json!({"displayName": "d"})));
        assert_eq!(got.query.get("updateMask"), Some(&json!("displayName")));
        Ok(())
    }

    #[test]
    fn first_match_wins() -> anyhow::Result<()> {
        let rules = [
            HttpRule {
                method: http::Method::POST,
                path: "/v1/{resource=projects/*/locations/*/models/*}:getIamPolicy",
                body: None,
            },
            HttpRule {
                method: http::Method::POST,
                path: "/v1/{resource=projects/*/locations/*/endpoints/*}:getIamPolicy",
                body: None,
            },
        ];
        let request = json!({"resource": "projects/p/locations/l/endpoints/e"});
        let got = transcode("GetIamPolicy", &rules, &request)?;
        assert_eq!(got.path, "/v1/projects/p/locations/l/endpoints/e:getIamPolicy");
        Ok(())
    }

    #[test]
    fn no_match() {
        let request = json!({"name": "projects/p"});
        let err = transcode("GetCustomJob", &[get_rule()], &request).expect_err("bad name");
        assert_eq!(err.method, "GetCustomJob");
        assert_eq!(err.paths.len(), 1);
        assert_eq!(
            err.paths[0].subs,
            vec![SubstitutionMismatch {
                field_name: "name",
                expected: "projects/*/locations/*/customJobs/*",
                found: Some("projects/p".to_string()),
            }]
        );
    }

    #[test]
    fn missing_field() {
        let err = transcode("GetCustomJob", &[get_rule()], &json!({})).expect_err("unset name");
        assert_eq!(err.paths[0].subs[0].found, None);
        let fmt = err.to_string();
        assert!(fmt.contains("needs to be set"), "{fmt}");
    }

    #[test]
    fn encodes_values() -> anyhow::Result<()> {
        let rule = HttpRule {
            method: http::Method::GET,
            path: "/v1/{name=**}",
            body: None,
        };
        let got = transcode("GetOperation", &[rule], &json!({"name": "operations/a b"}))?;
        assert_eq!(got.path, "/v1/operations/a%20b");
        Ok(())
    }
}
