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

//! Translate text.

pub mod batch_translate_text;
pub mod translate_text;
pub mod translate_text_with_glossary;
pub mod translate_text_with_model;

use google_cloud_translation_v3::model::Translation;

pub(crate) fn print_translations(translations: &[Translation]) {
    for translation in translations {
        println!("Translated text: {}", translation.translated_text);
        if !translation.detected_language_code.is_empty() {
            println!(
                "  detected source language: {}",
                translation.detected_language_code
            );
        }
        if !translation.model.is_empty() {
            println!("  model: {}", translation.model);
        }
    }
}
