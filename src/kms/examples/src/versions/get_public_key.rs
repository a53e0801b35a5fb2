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

// [START kms_get_public_key]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::PublicKey;

pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
) -> anyhow::Result<PublicKey> {
    let key = client.get_public_key().set_name(version_name).send().await?;
    crate::integrity::check("public key", key.pem.as_bytes(), key.pem_crc32c)?;
    println!("Public key ({:?}):\n{}", key.algorithm, key.pem);
    Ok(key)
}
// [END kms_get_public_key]
