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

//! Encrypt, decrypt, sign and verify using KMS keys.
//!
//! All the samples send CRC32C checksums of their inputs and verify the
//! checksums of the outputs, see [crate::integrity].

pub mod decrypt_asymmetric;
pub mod decrypt_symmetric;
pub mod encrypt_asymmetric;
pub mod encrypt_symmetric;
pub mod sign_asymmetric;
pub mod sign_mac;
pub mod verify_asymmetric_ec;
pub mod verify_asymmetric_rsa;
pub mod verify_mac;

use base64::Engine as _;
use google_cloud_kms_v1::client::KeyManagementService;

/// Fetches the PEM-encoded public key of a key version.
pub(crate) async fn public_key_pem(
    client: &KeyManagementService,
    version_name: &str,
) -> anyhow::Result<String> {
    let key = client.get_public_key().set_name(version_name).send().await?;
    crate::integrity::check("public key", key.pem.as_bytes(), key.pem_crc32c)?;
    Ok(key.pem)
}

/// Formats binary output for the console.
pub fn to_base64(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Parses binary input from the command line.
pub fn from_base64(data: &str) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context as _;
    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .context("expected a base64-encoded value")
}
