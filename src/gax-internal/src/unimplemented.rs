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

use gax::error::Error;
use gax::error::rpc::{Code, Status};

/// The result of stub methods that an implementation did not override.
///
/// Test doubles typically implement only the methods they need. Calling any
/// other method returns an `UNIMPLEMENTED` error naming the method.
pub async fn unimplemented_stub<T: Send>(method: &'static str) -> gax::Result<T> {
    Err(unimplemented_error(method))
}

pub fn unimplemented_error(method: &'static str) -> Error {
    Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!(
                "{method} is not implemented by this stub. If this is a test double, \
                 implement every method used in the test."
            )),
    )
}
