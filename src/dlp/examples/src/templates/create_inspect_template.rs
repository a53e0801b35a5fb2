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

// [START dlp_create_inspect_template]
use crate::inspect::InspectOptions;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::InspectTemplate;

pub async fn sample(
    client: &DlpService,
    parent: &str,
    template_id: &str,
    display_name: &str,
    description: &str,
    options: &InspectOptions,
) -> anyhow::Result<InspectTemplate> {
    let template = InspectTemplate::new()
        .set_display_name(display_name)
        .set_description(description)
        .set_inspect_config(options.to_config());

    let template = client
        .create_inspect_template()
        .set_parent(parent)
        .set_template_id(template_id)
        .set_inspect_template(template)
        .send()
        .await?;
    println!("Template created: {}", template.name);
    Ok(template)
}
// [END dlp_create_inspect_template]
