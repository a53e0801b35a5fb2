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

// [START kms_quickstart]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::KeyRing;

pub async fn sample(
    client: &KeyManagementService,
    project_id: &str,
    location: &str,
) -> anyhow::Result<Vec<KeyRing>> {
    let mut items = client
        .list_key_rings()
        .set_parent(crate::location_name(project_id, location))
        .by_item();
    let mut key_rings = Vec::new();
    println!("Key rings:");
    while let Some(key_ring) = items.next().await.transpose()? {
        println!("{}", key_ring.name);
        key_rings.push(key_ring);
    }
    Ok(key_rings)
}
// [END kms_quickstart]
