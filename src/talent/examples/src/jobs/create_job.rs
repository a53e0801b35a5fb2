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

// [START job_search_create_job]
use super::JobOptions;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::Job;

pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    company_name: &str,
    options: &JobOptions,
) -> anyhow::Result<Job> {
    let job = client
        .create_job()
        .set_parent(tenant_name)
        .set_job(options.to_job(company_name))
        .send()
        .await?;

    super::print_job(&job);
    Ok(job)
}
// [END job_search_create_job]
