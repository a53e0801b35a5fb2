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

// [START kms_decrypt_asymmetric]
use crate::integrity;
use google_cloud_kms_v1::client::KeyManagementService;

pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
    ciphertext: &[u8],
) -> anyhow::Result<bytes::Bytes> {
    let response = client
        .asymmetric_decrypt()
        .set_name(version_name)
        .set_ciphertext(ciphertext.to_vec())
        .set_ciphertext_crc32c(integrity::crc32c(ciphertext))
        .send()
        .await?;
    integrity::check_verified("ciphertext", response.verified_ciphertext_crc32c)?;
    integrity::check("plaintext", &response.plaintext, response.plaintext_crc32c)?;

    println!("Plaintext: {}", String::from_utf8_lossy(&response.plaintext));
    Ok(response.plaintext)
}
// [END kms_decrypt_asymmetric]
