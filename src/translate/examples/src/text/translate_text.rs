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

// [START translate_v3_translate_text]
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::Translation;

/// Translates `text` into `target_language`.
///
/// The service detects the source language when `source_language` is `None`.
pub async fn sample(
    client: &TranslationService,
    location_name: &str,
    text: &str,
    source_language: Option<&str>,
    target_language: &str,
) -> anyhow::Result<Vec<Translation>> {
    let response = client
        .translate_text()
        .set_parent(location_name)
        .set_contents([text])
        .set_mime_type(crate::MIME_TYPE)
        .set_source_language_code(source_language.unwrap_or_default())
        .set_target_language_code(target_language)
        .send()
        .await?;

    super::print_translations(&response.translations);
    Ok(response.translations)
}
// [END translate_v3_translate_text]
