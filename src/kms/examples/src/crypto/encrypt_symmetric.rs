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

// [START kms_encrypt_symmetric]
use crate::integrity;
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::EncryptResponse;

pub async fn sample(
    client: &KeyManagementService,
    key_name: &str,
    plaintext: &[u8],
) -> anyhow::Result<EncryptResponse> {
    let response = client
        .encrypt()
        .set_name(key_name)
        .set_plaintext(plaintext.to_vec())
        .set_plaintext_crc32c(integrity::crc32c(plaintext))
        .send()
        .await?;
    integrity::check_verified("plaintext", response.verified_plaintext_crc32c)?;
    integrity::check("ciphertext", &response.ciphertext, response.ciphertext_crc32c)?;

    println!("Ciphertext: {}", super::to_base64(&response.ciphertext));
    Ok(response)
}
// [END kms_encrypt_symmetric]
