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

// [START dlp_inspect_string]
use super::InspectOptions;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{ContentItem, Finding};

pub async fn sample(
    client: &DlpService,
    parent: &str,
    text: &str,
    options: &InspectOptions,
) -> anyhow::Result<Vec<Finding>> {
    let response = client
        .inspect_content()
        .set_parent(parent)
        .set_inspect_config(options.to_config())
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    crate::format::print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_string]
