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

// [START kms_verify_asymmetric_signature_rsa]
use google_cloud_kms_v1::client::KeyManagementService;

/// Verifies an RSA-PSS SHA-256 signature locally.
pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
    message: &[u8],
    signature: &[u8],
) -> anyhow::Result<bool> {
    let pem = super::public_key_pem(client, version_name).await?;
    let verified = crate::local_crypto::verify_rsa_pss_sha256(&pem, message, signature)?;
    println!("Verified: {verified}");
    Ok(verified)
}
// [END kms_verify_asymmetric_signature_rsa]
