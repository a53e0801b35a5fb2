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

//! Manage the lifecycle of crypto key versions.

pub mod create_key_version;
pub mod destroy_key_version;
pub mod disable_key_version;
pub mod enable_key_version;
pub mod get_public_key;
pub mod restore_key_version;

use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{
    CryptoKeyVersion, crypto_key_version::CryptoKeyVersionState,
};
use google_cloud_wkt::FieldMask;

pub(crate) async fn set_state(
    client: &KeyManagementService,
    version_name: &str,
    state: CryptoKeyVersionState,
) -> anyhow::Result<CryptoKeyVersion> {
    let version = CryptoKeyVersion::new()
        .set_name(version_name)
        .set_state(state);
    let version = client
        .update_crypto_key_version()
        .set_crypto_key_version(version)
        .set_update_mask(FieldMask::default().set_paths(["state"]))
        .send()
        .await?;
    println!("Key version {} is {:?}", version.name, version.state);
    Ok(version)
}
