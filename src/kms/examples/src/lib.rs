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

//! Samples for the Cloud Key Management Service (KMS) API.

pub mod cli;
pub mod crypto;
pub mod iam;
pub mod integrity;
pub mod key_rings;
pub mod keys;
pub mod local_crypto;
pub mod versions;

/// Formats the name of a KMS location.
pub fn location_name(project_id: &str, location: &str) -> String {
    format!("projects/{project_id}/locations/{location}")
}

/// Formats the name of a key ring.
pub fn key_ring_name(project_id: &str, location: &str, key_ring: &str) -> String {
    format!("{}/keyRings/{key_ring}", location_name(project_id, location))
}

/// Formats the name of a crypto key.
pub fn key_name(project_id: &str, location: &str, key_ring: &str, key: &str) -> String {
    format!(
        "{}/cryptoKeys/{key}",
        key_ring_name(project_id, location, key_ring)
    )
}

/// Formats the name of a crypto key version.
pub fn version_name(
    project_id: &str,
    location: &str,
    key_ring: &str,
    key: &str,
    version: &str,
) -> String {
    format!(
        "{}/cryptoKeyVersions/{version}",
        key_name(project_id, location, key_ring, key)
    )
}
