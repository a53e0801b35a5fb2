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

// [START job_search_create_job_custom_attributes]
use super::JobOptions;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{CustomAttribute, Job};

/// Creates a job with a filterable custom attribute.
///
/// [crate::search::custom_attribute_search] finds jobs using these
/// attributes.
pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    company_name: &str,
    requisition_id: &str,
    attribute: (&str, &str),
) -> anyhow::Result<Job> {
    let (key, value) = attribute;
    let custom = CustomAttribute::new()
        .set_string_values([value])
        .set_filterable(true);
    let job = JobOptions::new(requisition_id)
        .to_job(company_name)
        .set_custom_attributes([(key, custom)]);
    let job = client
        .create_job()
        .set_parent(tenant_name)
        .set_job(job)
        .send()
        .await?;

    super::print_job(&job);
    for (key, attribute) in &job.custom_attributes {
        println!("  {key}: {:?}", attribute.string_values);
    }
    Ok(job)
}
// [END job_search_create_job_custom_attributes]
