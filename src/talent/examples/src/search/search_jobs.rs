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

// [START job_search_search_jobs]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{JobQuery, search_jobs_response::MatchingJob};

/// Searches for jobs matching `query`, optionally limited to one company.
pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    query: &str,
    company_name: Option<&str>,
) -> anyhow::Result<Vec<MatchingJob>> {
    let job_query = JobQuery::new()
        .set_query(query)
        .set_companies(company_name.into_iter());
    let response = client
        .search_jobs()
        .set_parent(tenant_name)
        .set_request_metadata(super::request_metadata())
        .set_job_query(job_query)
        .send()
        .await?;

    Ok(super::matching_jobs(response))
}
// [END job_search_search_jobs]
