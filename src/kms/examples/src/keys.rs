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

//! Create, list and update crypto keys.
//!
//! The `create_key_*` samples differ only in the key they describe, the
//! request is the same for all of them.

pub mod create_key_asymmetric_decrypt;
pub mod create_key_asymmetric_sign;
pub mod create_key_hsm;
pub mod create_key_labels;
pub mod create_key_mac;
pub mod create_key_rotation_schedule;
pub mod create_key_symmetric_encrypt_decrypt;
pub mod get_key_labels;
pub mod list_keys;
pub mod update_key_add_rotation;
pub mod update_key_remove_rotation;
pub mod update_key_set_primary;
pub mod update_key_update_labels;

use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{
    CryptoKey, CryptoKeyVersionTemplate, crypto_key_version::CryptoKeyVersionAlgorithm,
};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Keys created with a rotation schedule rotate every 30 days.
pub const ROTATION_PERIOD_SECONDS: i64 = 30 * SECONDS_PER_DAY;

pub(crate) fn template(algorithm: CryptoKeyVersionAlgorithm) -> CryptoKeyVersionTemplate {
    CryptoKeyVersionTemplate::new().set_algorithm(algorithm)
}

/// The time of the first rotation, 24 hours from now.
pub(crate) fn first_rotation_time() -> google_cloud_wkt::Timestamp {
    let next = chrono::Utc::now() + chrono::Duration::hours(24);
    google_cloud_wkt::Timestamp::clamp(next.timestamp(), 0)
}

pub(crate) async fn create(
    client: &KeyManagementService,
    key_ring_name: &str,
    id: &str,
    key: CryptoKey,
) -> anyhow::Result<CryptoKey> {
    let key = client
        .create_crypto_key()
        .set_parent(key_ring_name)
        .set_crypto_key_id(id)
        .set_crypto_key(key)
        .send()
        .await?;
    println!("Created key: {}", key.name);
    Ok(key)
}
