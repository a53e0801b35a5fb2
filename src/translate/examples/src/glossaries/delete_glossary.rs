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

// [START translate_v3_delete_glossary]
use google_cloud_lro::Poller;
use google_cloud_translation_v3::client::TranslationService;

/// Deletes a glossary and waits for the deletion to complete.
pub async fn sample(client: &TranslationService, glossary_name: &str) -> anyhow::Result<()> {
    let response = client
        .delete_glossary()
        .set_name(glossary_name)
        .poller()
        .until_done()
        .await?;
    println!("Deleted glossary {}", response.name);
    Ok(())
}
// [END translate_v3_delete_glossary]
