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

// [START dlp_list_info_types]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::InfoTypeDescription;

pub async fn sample(
    client: &DlpService,
    parent: &str,
    language_code: &str,
    filter: &str,
) -> anyhow::Result<Vec<InfoTypeDescription>> {
    let response = client
        .list_info_types()
        .set_parent(parent)
        .set_language_code(language_code)
        .set_filter(filter)
        .send()
        .await?;

    println!("Info types:");
    for t in &response.info_types {
        println!("\t{}: {}", t.name, t.display_name);
    }
    Ok(response.info_types)
}
// [END dlp_list_info_types]
