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

//! Classify errors returned by the client libraries.

use google_cloud_gax::error::Error;
use google_cloud_gax::error::rpc::Code;

/// Returns true if the service rejected a create because the resource exists.
pub fn is_already_exists(error: &Error) -> bool {
    error
        .status()
        .is_some_and(|status| status.code == Code::AlreadyExists)
}

/// Treats `ALREADY_EXISTS` as a successful, logged outcome.
///
/// Returns `Ok(Some(_))` when the resource was created, `Ok(None)` when it
/// already existed, and the original error for any other failure.
pub fn ignore_already_exists<T>(
    result: google_cloud_gax::Result<T>,
    resource: &str,
) -> google_cloud_gax::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_already_exists(&e) => {
            tracing::info!("{resource} already exists: {e}");
            println!("{resource} already exists");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
