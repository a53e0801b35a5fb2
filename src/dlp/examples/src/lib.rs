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

//! Samples for the Sensitive Data Protection (DLP) API.
//!
//! Each module holds one sample. Every sample receives the client as a
//! parameter, prints what it found, and returns the response so callers can
//! inspect it.

pub mod cli;
pub mod deid;
pub mod format;
pub mod info_types;
pub mod inspect;
pub mod jobs;
pub mod risk;
pub mod table;
pub mod templates;
pub mod triggers;

/// The info types used when the caller does not name any.
pub const DEFAULT_INFO_TYPES: [&str; 3] = ["PHONE_NUMBER", "EMAIL_ADDRESS", "CREDIT_CARD_NUMBER"];

/// Formats the parent resource for most DLP requests.
pub fn parent(project_id: &str, location: &str) -> String {
    format!("projects/{project_id}/locations/{location}")
}

/// Converts info type names into the model type.
pub fn info_types<I, S>(names: I) -> Vec<google_cloud_privacy_dlp_v2::model::InfoType>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|n| google_cloud_privacy_dlp_v2::model::InfoType::new().set_name(n))
        .collect()
}
