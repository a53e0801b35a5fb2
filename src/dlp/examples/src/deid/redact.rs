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

// [START dlp_deidentify_redact]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, InspectConfig, PrimitiveTransformation, RedactConfig,
};

pub async fn sample(
    client: &DlpService,
    parent: &str,
    text: &str,
    info_types: &[String],
) -> anyhow::Result<String> {
    let names = info_types.iter().map(String::as_str);
    let inspect = InspectConfig::new().set_info_types(crate::info_types(names.clone()));
    let transformation = PrimitiveTransformation::new().set_redact_config(RedactConfig::new());

    let response = client
        .deidentify_content()
        .set_parent(parent)
        .set_inspect_config(inspect)
        .set_deidentify_config(super::info_type_config(names, transformation))
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let output = super::output_text(response.item.as_ref());
    println!("{output}");
    Ok(output)
}
// [END dlp_deidentify_redact]
