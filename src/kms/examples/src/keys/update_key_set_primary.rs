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

// [START kms_update_key_set_primary]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::CryptoKey;

pub async fn sample(
    client: &KeyManagementService,
    key_name: &str,
    version_id: &str,
) -> anyhow::Result<CryptoKey> {
    let key = client
        .update_crypto_key_primary_version()
        .set_name(key_name)
        .set_crypto_key_version_id(version_id)
        .send()
        .await?;
    let primary = key.primary.as_ref().map(|v| v.name.as_str()).unwrap_or_default();
    println!("Updated {} primary to {primary}", key.name);
    Ok(key)
}
// [END kms_update_key_set_primary]
