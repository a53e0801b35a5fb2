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

// [START dlp_reidentify_deterministic]
use super::WrappedKey;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoDeterministicConfig, InfoType, PrimitiveTransformation,
};

pub async fn sample(
    client: &DlpService,
    parent: &str,
    text: &str,
    key: &WrappedKey,
    surrogate_type: &str,
) -> anyhow::Result<String> {
    let config = CryptoDeterministicConfig::new()
        .set_crypto_key(key.to_crypto_key()?)
        .set_surrogate_info_type(InfoType::new().set_name(surrogate_type));
    let transformation = PrimitiveTransformation::new().set_crypto_deterministic_config(config);

    let response = client
        .reidentify_content()
        .set_parent(parent)
        .set_inspect_config(super::surrogate_inspect_config(surrogate_type))
        .set_reidentify_config(super::info_type_config([surrogate_type], transformation))
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let output = super::output_text(response.item.as_ref());
    println!("{output}");
    Ok(output)
}
// [END dlp_reidentify_deterministic]
