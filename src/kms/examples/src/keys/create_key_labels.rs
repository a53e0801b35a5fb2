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

// [START kms_create_key_labels]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{
    CryptoKey, crypto_key::CryptoKeyPurpose, crypto_key_version::CryptoKeyVersionAlgorithm,
};

pub async fn sample(
    client: &KeyManagementService,
    key_ring_name: &str,
    id: &str,
) -> anyhow::Result<CryptoKey> {
    let key = CryptoKey::new()
        .set_purpose(CryptoKeyPurpose::EncryptDecrypt)
        .set_version_template(super::template(
            CryptoKeyVersionAlgorithm::GoogleSymmetricEncryption,
        ))
        .set_labels([("team", "alpha"), ("cost_center", "cc1234")]);
    super::create(client, key_ring_name, id, key).await
}
// [END kms_create_key_labels]
