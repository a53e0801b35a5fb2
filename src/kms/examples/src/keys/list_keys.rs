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

// [START kms_list_keys]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::CryptoKey;

pub async fn sample(
    client: &KeyManagementService,
    key_ring_name: &str,
) -> anyhow::Result<Vec<CryptoKey>> {
    let mut items = client
        .list_crypto_keys()
        .set_parent(key_ring_name)
        .by_item();
    let mut keys = Vec::new();
    while let Some(key) = items.next().await.transpose()? {
        println!("Key: {} purpose: {:?}", key.name, key.purpose);
        keys.push(key);
    }
    Ok(keys)
}
// [END kms_list_keys]
