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

//! Samples for the Cloud Translation API (v3).
//!
//! Text translation and language detection work in the `global` location.
//! Glossaries and batch translations need a regional location, such as
//! `us-central1`.

pub mod cli;
pub mod glossaries;
pub mod languages;
pub mod text;

/// The MIME type of all the sample inputs.
pub const MIME_TYPE: &str = "text/plain";

/// Formats the name of a location, the parent of most requests.
pub fn location_name(project_id: &str, location: &str) -> String {
    format!("projects/{project_id}/locations/{location}")
}

/// Formats the name of a glossary, accepting a glossary id or a full name.
pub fn glossary_name(project_id: &str, location: &str, glossary: &str) -> String {
    samples_common::qualify(&location_name(project_id, location), "glossaries", glossary)
}

/// Formats the name of a translation model, such as `general/nmt`.
pub fn model_name(project_id: &str, location: &str, model: &str) -> String {
    format!("{}/models/{model}", location_name(project_id, location))
}
