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

// [START translate_v3_create_glossary]
use google_cloud_lro::Poller;
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::{
    GcsSource, Glossary, GlossaryInputConfig, glossary::LanguageCodesSet,
};

/// Creates an equivalent term set glossary from a CSV file.
///
/// Each column in the file holds the terms for one of `language_codes`.
pub async fn sample(
    client: &TranslationService,
    location_name: &str,
    glossary_name: &str,
    input_uri: &str,
    language_codes: &[String],
) -> anyhow::Result<Glossary> {
    tracing::info!("creating {glossary_name} from {input_uri}");
    let glossary = Glossary::new()
        .set_name(glossary_name)
        .set_language_codes_set(LanguageCodesSet::new().set_language_codes(language_codes))
        .set_input_config(
            GlossaryInputConfig::new().set_gcs_source(GcsSource::new().set_input_uri(input_uri)),
        );
    let glossary = client
        .create_glossary()
        .set_parent(location_name)
        .set_glossary(glossary)
        .poller()
        .until_done()
        .await?;

    super::print_glossary(&glossary);
    Ok(glossary)
}
// [END translate_v3_create_glossary]
