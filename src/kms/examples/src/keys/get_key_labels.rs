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

// [START kms_get_key_labels]
use google_cloud_kms_v1::client::KeyManagementService;
use std::collections::HashMap;

pub async fn sample(
    client: &KeyManagementService,
    key_name: &str,
) -> anyhow::Result<HashMap<String, String>> {
    let key = client.get_crypto_key().set_name(key_name).send().await?;
    let mut labels: Vec<_> = key.labels.iter().collect();
    labels.sort();
    for (k, v) in labels {
        println!("{k} = {v}");
    }
    Ok(key.labels)
}
// [END kms_get_key_labels]
