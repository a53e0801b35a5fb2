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

//! Manage glossaries.
//!
//! Glossaries are created from a CSV file in Cloud Storage, with one column
//! per language and one row per term.

pub mod create_glossary;
pub mod delete_glossary;
pub mod get_glossary;
pub mod list_glossaries;

use google_cloud_translation_v3::model::{Glossary, glossary::Languages};

/// A public glossary with English and Japanese terms.
pub const SAMPLE_GLOSSARY_URI: &str = "gs://cloud-samples-data/translation/glossary_ja.csv";

pub(crate) fn print_glossary(glossary: &Glossary) {
    println!("Glossary {}", glossary.name);
    println!("  entries: {}", glossary.entry_count);
    match &glossary.languages {
        Some(Languages::LanguageCodesSet(set)) => {
            println!("  languages: {}", set.language_codes.join(", "));
        }
        Some(Languages::LanguagePair(pair)) => {
            println!(
                "  languages: {} -> {}",
                pair.source_language_code, pair.target_language_code
            );
        }
        _ => {}
    }
    if let Some(uri) = glossary
        .input_config
        .as_ref()
        .and_then(|c| c.gcs_source())
        .map(|s| s.input_uri.as_str())
    {
        println!("  input uri: {uri}");
    }
}
