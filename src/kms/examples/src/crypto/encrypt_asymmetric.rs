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

// [START kms_encrypt_asymmetric]
use google_cloud_kms_v1::client::KeyManagementService;

/// Encrypts locally with the public key of an RSA-OAEP SHA-256 key version.
///
/// KMS does not offer an asymmetric encrypt operation, only the public key.
pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
    plaintext: &[u8],
) -> anyhow::Result<Vec<u8>> {
    let pem = super::public_key_pem(client, version_name).await?;
    let ciphertext = crate::local_crypto::encrypt_rsa_oaep_sha256(&pem, plaintext)?;
    println!("Ciphertext: {}", super::to_base64(&ciphertext));
    Ok(ciphertext)
}
// [END kms_encrypt_asymmetric]
