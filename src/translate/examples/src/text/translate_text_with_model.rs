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

// [START translate_v3_translate_text_with_model]
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::Translation;

/// The default model, neural machine translation.
pub const DEFAULT_MODEL: &str = "general/nmt";

/// Translates `text` using the model named `model_name`.
pub async fn sample(
    client: &TranslationService,
    location_name: &str,
    model_name: &str,
    text: &str,
    source_language: &str,
    target_language: &str,
) -> anyhow::Result<Vec<Translation>> {
    let response = client
        .translate_text()
        .set_parent(location_name)
        .set_contents([text])
        .set_mime_type(crate::MIME_TYPE)
        .set_source_language_code(source_language)
        .set_target_language_code(target_language)
        .set_model(model_name)
        .send()
        .await?;

    super::print_translations(&response.translations);
    Ok(response.translations)
}
// [END translate_v3_translate_text_with_model]
