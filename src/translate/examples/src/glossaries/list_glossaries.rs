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

// [START translate_v3_list_glossary]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::Glossary;

pub async fn sample(
    client: &TranslationService,
    location_name: &str,
) -> anyhow::Result<Vec<Glossary>> {
    let mut items = client
        .list_glossaries()
        .set_parent(location_name)
        .by_item();

    let mut glossaries = Vec::new();
    while let Some(glossary) = items.next().await.transpose()? {
        super::print_glossary(&glossary);
        glossaries.push(glossary);
    }
    Ok(glossaries)
}
// [END translate_v3_list_glossary]
