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

// [START translate_v3_batch_translate_text]
use google_cloud_lro::Poller;
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::{
    BatchTranslateResponse, GcsDestination, GcsSource, InputConfig, OutputConfig,
};
use std::time::Duration;

/// The files to translate and where to write the results.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRequest {
    /// A `gs://` URI, may use wildcards.
    pub input_uri: String,
    /// A `gs://` prefix, the output folder must be empty.
    pub output_uri_prefix: String,
    pub source_language: String,
    pub target_languages: Vec<String>,
}

/// Translates all the files in `request.input_uri`.
///
/// Batch translations can take a long time. The sample waits at most
/// `timeout` for the operation to complete, the operation continues running
/// in the service if the wait expires.
pub async fn sample(
    client: &TranslationService,
    location_name: &str,
    request: &BatchRequest,
    timeout: Duration,
) -> anyhow::Result<BatchTranslateResponse> {
    tracing::info!(
        "translating {} into {:?}",
        request.input_uri,
        request.target_languages
    );
    let input = InputConfig::new()
        .set_mime_type(crate::MIME_TYPE)
        .set_gcs_source(GcsSource::new().set_input_uri(&request.input_uri));
    let output = OutputConfig::new().set_gcs_destination(
        GcsDestination::new().set_output_uri_prefix(&request.output_uri_prefix),
    );
    let poller = client
        .batch_translate_text()
        .set_parent(location_name)
        .set_source_language_code(&request.source_language)
        .set_target_language_codes(request.target_languages.iter())
        .set_input_configs([input])
        .set_output_config(output)
        .poller();

    let response = match tokio::time::timeout(timeout, poller.until_done()).await {
        Ok(result) => result?,
        Err(_) => {
            tracing::warn!("batch translation did not finish in {timeout:?}");
            anyhow::bail!("batch translation did not finish in {timeout:?}");
        }
    };
    println!("Total characters: {}", response.total_characters);
    println!("Translated characters: {}", response.translated_characters);
    Ok(response)
}
// [END translate_v3_batch_translate_text]
