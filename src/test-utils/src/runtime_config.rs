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

use anyhow::{Context, Result};

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
const WRAPPED_KEY_VAR: &str = "DLP_DEID_WRAPPED_KEY";
const KEY_NAME_VAR: &str = "DLP_DEID_KEY_NAME";
const GCS_URL_VAR: &str = "DLP_TEST_GCS_URL";
const DEFAULT_REGION: &str = "us-central1";

/// Returns the project id used for the integration tests.
pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).with_context(|| format!("{PROJECT_VAR} is not set"))
}

/// Returns the preferred region id used for the integration tests.
pub fn region_id() -> String {
    std::env::var(REGION_VAR)
        .ok()
        .unwrap_or(DEFAULT_REGION.to_string())
}

/// Returns the base64-encoded, KMS-wrapped AES key used by the
/// de-identification round trips.
pub fn dlp_wrapped_key() -> Result<String> {
    std::env::var(WRAPPED_KEY_VAR).with_context(|| format!("{WRAPPED_KEY_VAR} is not set"))
}

/// Returns the name of the KMS key that wraps [dlp_wrapped_key].
pub fn dlp_key_name() -> Result<String> {
    std::env::var(KEY_NAME_VAR).with_context(|| format!("{KEY_NAME_VAR} is not set"))
}

/// Returns a `gs://` URL with text files to inspect, if configured.
pub fn dlp_gcs_url() -> Option<String> {
    std::env::var(GCS_URL_VAR).ok()
}
