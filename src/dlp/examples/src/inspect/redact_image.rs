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

// [START dlp_redact_image]
use anyhow::Context;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, InfoType, InspectConfig, Likelihood,
    redact_image_request::ImageRedactionConfig,
};
use std::path::Path;

pub async fn sample(
    client: &DlpService,
    parent: &str,
    input: &Path,
    output: &Path,
    info_types: &[String],
) -> anyhow::Result<bytes::Bytes> {
    let data = tokio::fs::read(input)
        .await
        .with_context(|| format!("reading {}", input.display()))?;
    let item = ByteContentItem::new()
        .set_type(super::bytes_type(input))
        .set_data(data);
    let configs = info_types
        .iter()
        .map(|name| ImageRedactionConfig::new().set_info_type(InfoType::new().set_name(name)));
    let config = InspectConfig::new()
        .set_info_types(crate::info_types(info_types.iter().map(String::as_str)))
        .set_min_likelihood(Likelihood::Likely);

    let response = client
        .redact_image()
        .set_parent(parent)
        .set_inspect_config(config)
        .set_image_redaction_configs(configs)
        .set_byte_item(item)
        .send()
        .await?;

    tokio::fs::write(output, &response.redacted_image)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Redacted image written to {}", output.display());
    Ok(response.redacted_image)
}
// [END dlp_redact_image]
