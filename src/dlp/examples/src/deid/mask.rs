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

// [START dlp_deidentify_masking]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CharacterMaskConfig, ContentItem, PrimitiveTransformation,
};

/// Masks every default info type with `masking_character`.
///
/// `number_to_mask` limits how many characters are masked, zero masks all.
pub async fn sample(
    client: &DlpService,
    parent: &str,
    text: &str,
    masking_character: char,
    number_to_mask: i32,
) -> anyhow::Result<String> {
    let mask = CharacterMaskConfig::new()
        .set_masking_character(masking_character.to_string())
        .set_number_to_mask(number_to_mask);
    let transformation = PrimitiveTransformation::new().set_character_mask_config(mask);

    let response = client
        .deidentify_content()
        .set_parent(parent)
        .set_inspect_config(crate::inspect::InspectOptions::default().to_config())
        .set_deidentify_config(super::info_type_config(
            std::iter::empty::<String>(),
            transformation,
        ))
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let output = super::output_text(response.item.as_ref());
    println!("{output}");
    Ok(output)
}
// [END dlp_deidentify_masking]
