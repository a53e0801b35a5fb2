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

// [START dlp_inspect_custom_regex]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CustomInfoType, Finding, InfoType, InspectConfig, Likelihood,
    custom_info_type::Regex,
};

pub async fn sample(
    client: &DlpService,
    parent: &str,
    text: &str,
    pattern: &str,
    info_type_name: &str,
) -> anyhow::Result<Vec<Finding>> {
    let custom = CustomInfoType::new()
        .set_info_type(InfoType::new().set_name(info_type_name))
        .set_regex(Regex::new().set_pattern(pattern))
        .set_likelihood(Likelihood::Possible);
    let config = InspectConfig::new()
        .set_custom_info_types([custom])
        .set_include_quote(true);

    let response = client
        .inspect_content()
        .set_parent(parent)
        .set_inspect_config(config)
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    crate::format::print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_custom_regex]
