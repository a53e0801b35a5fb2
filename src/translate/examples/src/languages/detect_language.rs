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

// [START translate_v3_detect_language]
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::DetectedLanguage;

/// Detects the language of `text`, most likely language first.
pub async fn sample(
    client: &TranslationService,
    location_name: &str,
    text: &str,
) -> anyhow::Result<Vec<DetectedLanguage>> {
    let response = client
        .detect_language()
        .set_parent(location_name)
        .set_mime_type(crate::MIME_TYPE)
        .set_content(text)
        .send()
        .await?;

    for language in &response.languages {
        println!(
            "Language code: {} (confidence {:.2})",
            language.language_code, language.confidence
        );
    }
    Ok(response.languages)
}
// [END translate_v3_detect_language]
