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

// [START kms_sign_asymmetric]
use crate::integrity;
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::Digest;
use sha2::Digest as _;

/// Signs the SHA-256 digest of `message`.
pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
    message: &[u8],
) -> anyhow::Result<bytes::Bytes> {
    let digest = sha2::Sha256::digest(message).to_vec();
    let digest_crc32c = integrity::crc32c(&digest);
    let response = client
        .asymmetric_sign()
        .set_name(version_name)
        .set_digest(Digest::new().set_sha256(digest))
        .set_digest_crc32c(digest_crc32c)
        .send()
        .await?;
    integrity::check_verified("digest", response.verified_digest_crc32c)?;
    integrity::check("signature", &response.signature, response.signature_crc32c)?;

    println!("Signature: {}", super::to_base64(&response.signature));
    Ok(response.signature)
}
// [END kms_sign_asymmetric]
