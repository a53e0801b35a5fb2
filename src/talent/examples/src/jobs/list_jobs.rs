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

// [START job_search_list_jobs]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::Job;

/// Lists the jobs matching `filter`.
///
/// The filter is required and must name a company, for example
/// `companyName="projects/p/tenants/t/companies/c"`.
pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    filter: &str,
) -> anyhow::Result<Vec<Job>> {
    let mut jobs = client
        .list_jobs()
        .set_parent(tenant_name)
        .set_filter(filter)
        .by_item();

    let mut result = Vec::new();
    while let Some(job) = jobs.next().await.transpose()? {
        println!("{} ({})", job.name, job.title);
        result.push(job);
    }
    Ok(result)
}

/// The filter that selects all the jobs of a company.
pub fn company_filter(company_name: &str) -> String {
    format!("companyName=\"{company_name}\"")
}
// [END job_search_list_jobs]
