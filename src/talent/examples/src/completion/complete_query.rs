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

// [START job_search_autocomplete_job_title]
use google_cloud_talent_v4::client::Completion;
use google_cloud_talent_v4::model::complete_query_response::CompletionResult;

/// Returns up to `page_size` suggestions that complete `query`.
pub async fn sample(
    client: &Completion,
    tenant_name: &str,
    query: &str,
    page_size: i32,
    language_code: &str,
) -> anyhow::Result<Vec<CompletionResult>> {
    let response = client
        .complete_query()
        .set_tenant(tenant_name)
        .set_query(query)
        .set_page_size(page_size)
        .set_language_codes([language_code])
        .send()
        .await?;

    for result in &response.completion_results {
        println!("Suggested: {} ({:?})", result.suggestion, result.r#type);
    }
    Ok(response.completion_results)
}
// [END job_search_autocomplete_job_title]
