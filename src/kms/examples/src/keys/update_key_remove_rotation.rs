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

// [START kms_update_key_remove_rotation_schedule]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::CryptoKey;
use google_cloud_wkt::FieldMask;

/// Clears the rotation schedule, the fields are in the mask but unset.
pub async fn sample(client: &KeyManagementService, key_name: &str) -> anyhow::Result<CryptoKey> {
    let key = client
        .update_crypto_key()
        .set_crypto_key(CryptoKey::new().set_name(key_name))
        .set_update_mask(FieldMask::default().set_paths(["rotation_period", "next_rotation_time"]))
        .send()
        .await?;
    println!("Updated key: {}", key.name);
    Ok(key)
}
// [END kms_update_key_remove_rotation_schedule]
