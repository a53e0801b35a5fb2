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

// [START dlp_inspect_file]
use super::InspectOptions;
use anyhow::Context;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{ByteContentItem, ContentItem, Finding};
use std::path::Path;

pub async fn sample(
    client: &DlpService,
    parent: &str,
    path: &Path,
    options: &InspectOptions,
) -> anyhow::Result<Vec<Finding>> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let item = ByteContentItem::new()
        .set_type(super::bytes_type(path))
        .set_data(data);

    let response = client
        .inspect_content()
        .set_parent(parent)
        .set_inspect_config(options.to_config())
        .set_item(ContentItem::new().set_byte_item(item))
        .send()
        .await?;

    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    crate::format::print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_file]
