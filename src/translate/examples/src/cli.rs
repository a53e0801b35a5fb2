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

//! The `translate` command line.

use crate::text::batch_translate_text::BatchRequest;
use clap::{Parser, Subcommand};
use google_cloud_translation_v3::client::TranslationService;
use samples_common::parse_duration;
use std::time::Duration;

/// Cloud Translation samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    /// The location for text translation and language detection.
    #[arg(long, default_value = "global")]
    pub location: String,

    /// The location for glossary and batch commands.
    #[arg(long, default_value = "us-central1")]
    pub region: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Translate text, detecting the source language if needed.
    TranslateText {
        text: String,
        #[arg(long, default_value = "fr")]
        target_language: String,
        #[arg(long)]
        source_language: Option<String>,
    },
    /// Translate text with a specific model.
    TranslateTextWithModel {
        text: String,
        #[arg(long, default_value = crate::text::translate_text_with_model::DEFAULT_MODEL)]
        model: String,
        #[arg(long, default_value = "en")]
        source_language: String,
        #[arg(long, default_value = "fr")]
        target_language: String,
    },
    /// Translate text using a glossary in `--region`.
    TranslateTextWithGlossary {
        text: String,
        glossary_id: String,
        #[arg(long, default_value = "en")]
        source_language: String,
        #[arg(long, default_value = "ja")]
        target_language: String,
    },
    DetectLanguage { text: String },
    /// List the supported languages.
    ListLanguages {
        #[arg(long)]
        display_language: Option<String>,
    },
    /// Translate the files in Cloud Storage.
    BatchTranslateText {
        /// For example `gs://bucket/input/*.txt`.
        input_uri: String,
        /// For example `gs://bucket/output/`.
        output_uri_prefix: String,
        #[arg(long, default_value = "en")]
        source_language: String,
        /// Repeat for several languages.
        #[arg(long = "target-language", default_values = ["ja"])]
        target_languages: Vec<String>,
        /// How long to wait for the operation.
        #[arg(long, value_parser = parse_duration, default_value = "180s")]
        timeout: Duration,
    },
    /// Create a glossary from a CSV file.
    CreateGlossary {
        glossary_id: String,
        #[arg(long, default_value = crate::glossaries::SAMPLE_GLOSSARY_URI)]
        input_uri: String,
        /// Repeat for each column in the file.
        #[arg(long = "language-code", default_values = ["en", "ja"])]
        language_codes: Vec<String>,
    },
    GetGlossary { glossary_id: String },
    ListGlossaries,
    DeleteGlossary { glossary_id: String },
}

/// Runs the selected command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = TranslationService::builder().build().await?;
    dispatch(&client, cli).await
}

/// Runs the selected command using `client`.
pub async fn dispatch(client: &TranslationService, cli: Cli) -> anyhow::Result<()> {
    tracing::info!("running {:?} in project {}", cli.command, cli.project_id);
    let location = crate::location_name(&cli.project_id, &cli.location);
    let region = crate::location_name(&cli.project_id, &cli.region);
    let glossary = |id: &str| crate::glossary_name(&cli.project_id, &cli.region, id);
    match cli.command {
        Command::TranslateText {
            text,
            target_language,
            source_language,
        } => {
            crate::text::translate_text::sample(
                client,
                &location,
                &text,
                source_language.as_deref(),
                &target_language,
            )
            .await?;
        }
        Command::TranslateTextWithModel {
            text,
            model,
            source_language,
            target_language,
        } => {
            let model = crate::model_name(&cli.project_id, &cli.location, &model);
            crate::text::translate_text_with_model::sample(
                client,
                &location,
                &model,
                &text,
                &source_language,
                &target_language,
            )
            .await?;
        }
        Command::TranslateTextWithGlossary {
            text,
            glossary_id,
            source_language,
            target_language,
        } => {
            crate::text::translate_text_with_glossary::sample(
                client,
                &region,
                &glossary(&glossary_id),
                &text,
                &source_language,
                &target_language,
            )
            .await?;
        }
        Command::DetectLanguage { text } => {
            crate::languages::detect_language::sample(client, &location, &text).await?;
        }
        Command::ListLanguages { display_language } => {
            crate::languages::list_languages::sample(client, &location, display_language.as_deref())
                .await?;
        }
        Command::BatchTranslateText {
            input_uri,
            output_uri_prefix,
            source_language,
            target_languages,
            timeout,
        } => {
            let request = BatchRequest {
                input_uri,
                output_uri_prefix,
                source_language,
                target_languages,
            };
            crate::text::batch_translate_text::sample(client, &region, &request, timeout).await?;
        }
        Command::CreateGlossary {
            glossary_id,
            input_uri,
            language_codes,
        } => {
            crate::glossaries::create_glossary::sample(
                client,
                &region,
                &glossary(&glossary_id),
                &input_uri,
                &language_codes,
            )
            .await?;
        }
        Command::GetGlossary { glossary_id } => {
            crate::glossaries::get_glossary::sample(client, &glossary(&glossary_id)).await?;
        }
        Command::ListGlossaries => {
            crate::glossaries::list_glossaries::sample(client, &region).await?;
        }
        Command::DeleteGlossary { glossary_id } => {
            crate::glossaries::delete_glossary::sample(client, &glossary(&glossary_id)).await?;
        }
    }
    Ok(())
}
