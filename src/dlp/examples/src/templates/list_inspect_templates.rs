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

// [START dlp_list_inspect_templates]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::InspectTemplate;

pub async fn sample(client: &DlpService, parent: &str) -> anyhow::Result<Vec<InspectTemplate>> {
    let mut items = client
        .list_inspect_templates()
        .set_parent(parent)
        .by_item();
    let mut templates = Vec::new();
    while let Some(template) = items.next().await.transpose()? {
        println!("Template {}", template.name);
        if !template.display_name.is_empty() {
            println!("\tDisplay name: {}", template.display_name);
        }
        if let Some(config) = &template.inspect_config {
            let names: Vec<_> = config.info_types.iter().map(|t| t.name.as_str()).collect();
            println!("\tInfo types: {}", names.join(", "));
        }
        templates.push(template);
    }
    if templates.is_empty() {
        println!("No templates found.");
    }
    Ok(templates)
}
// [END dlp_list_inspect_templates]
