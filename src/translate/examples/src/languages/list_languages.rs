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

// [START translate_v3_get_supported_languages]
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::SupportedLanguage;

/// Lists the supported languages.
///
/// With a `display_language` the response includes the language names in
/// that language.
pub async fn sample(
    client: &TranslationService,
    location_name: &str,
    display_language: Option<&str>,
) -> anyhow::Result<Vec<SupportedLanguage>> {
    let response = client
        .get_supported_languages()
        .set_parent(location_name)
        .set_display_language_code(display_language.unwrap_or_default())
        .send()
        .await?;

    for language in &response.languages {
        match language.display_name.as_str() {
            "" => println!("Language code: {}", language.language_code),
            name => println!("Language code: {} ({name})", language.language_code),
        }
    }
    Ok(response.languages)
}
// [END translate_v3_get_supported_languages]
