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

/// A failure to map a request to any of the REST paths of its method.
///
/// Some methods have several REST paths. For example, the IAM methods accept
/// resources from many collections. The request fields select the path, and
/// the client only reports an error when no path matches.
///
/// The binary transport does not use paths and never reports this error.
#[derive(thiserror::Error, Debug, PartialEq)]
pub struct BindingError {
    /// The method id, e.g. `CreateCustomJob`.
    pub method: &'static str,
    /// Every path template considered, with the reason it did not match.
    pub paths: Vec<PathMismatch>,
}

/// A path template that could not be used for a request.
#[derive(Debug, Default, PartialEq)]
pub struct PathMismatch {
    /// The path template, e.g. `/v1/{parent=projects/*/locations/*}/customJobs`.
    pub template: &'static str,
    /// The request fields that did not fit the template.
    pub subs: Vec<SubstitutionMismatch>,
}

/// A request field that could not be substituted into a path template.
#[derive(Debug, PartialEq)]
pub struct SubstitutionMismatch {
    /// The name of the field, nested fields are `.`-separated.
    pub field_name: &'static str,
    /// The expected format, e.g. `projects/*/locations/*`.
    pub expected: &'static str,
    /// The actual value, `None` if the field was empty.
    pub found: Option<String>,
}

impl std::fmt::Display for SubstitutionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.found {
            None => write!(
                f,
                "field `{}` needs to be set and match: '{}'",
                self.field_name, self.expected
            ),
            Some(actual) => write!(
                f,
                "field `{}` should match: '{}'; found: '{}'",
                self.field_name, self.expected, actual
            ),
        }
    }
}

impl std::fmt::Display for PathMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] ", self.template)?;
        for (i, sub) in self.subs.iter().enumerate() {
            if i != 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{sub}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no path for `{}` matches the request, ", self.method)?;
        write!(f, "at least one of the conditions must be met: ")?;
        for (i, path) in self.paths.iter().enumerate() {
            if i != 0 {
                write!(f, " OR ")?;
            }
            write!(f, "({}) {}", i + 1, path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unset(field_name: &'static str, expected: &'static str) -> SubstitutionMismatch {
        SubstitutionMismatch {
            field_name,
            expected,
            found: None,
        }
    }

    #[test]
    fn fmt_substitution() {
        let sub = unset("parent", "projects/*/locations/*");
        let fmt = sub.to_string();
        assert!(fmt.contains("needs to be set"), "{fmt}");
        assert!(!fmt.contains("found"), "{fmt}");

        let sub = SubstitutionMismatch {
            found: Some("projects/p".to_string()),
            ..sub
        };
        let fmt = sub.to_string();
        assert!(fmt.contains("should match") && fmt.contains("projects/p"), "{fmt}");
    }

    #[test]
    fn fmt_binding_error() {
        let e = BindingError {
            method: "GetIamPolicy",
            paths: vec![
                PathMismatch {
                    template: "/v1/{resource=projects/*/locations/*/models/*}:getIamPolicy",
                    subs: vec![unset("resource", "projects/*/locations/*/models/*")],
                },
                PathMismatch {
                    template: "/v1/{resource=projects/*/locations/*/endpoints/*}:getIamPolicy",
                    subs: vec![unset("resource", "projects/*/locations/*/endpoints/*")],
                },
            ],
        };
        let fmt = e.to_string();
        assert!(fmt.contains("GetIamPolicy"), "{fmt}");
        let clauses: Vec<&str> = fmt.split(" OR ").collect();
        assert_eq!(clauses.len(), 2, "{fmt}");
        assert!(clauses[0].contains("(1)") && clauses[0].contains("models"), "{fmt}");
        assert!(clauses[1].contains("(2)") && clauses[1].contains("endpoints"), "{fmt}");
    }
}
