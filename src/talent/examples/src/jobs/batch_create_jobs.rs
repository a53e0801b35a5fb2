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

// [START job_search_batch_create_jobs]
use google_cloud_lro::Poller;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::Job;

/// The outcome of a batch creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutcome {
    /// The jobs created by the batch.
    pub created: Vec<Job>,
    /// The number of jobs the service rejected.
    pub failed: usize,
}

/// Creates `jobs` using a long-running batch operation.
///
/// The service reports a status for each job. Rejected jobs are logged and
/// counted, they do not fail the batch.
pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    jobs: Vec<Job>,
) -> anyhow::Result<BatchOutcome> {
    tracing::info!("creating {} jobs in {tenant_name}", jobs.len());
    let response = client
        .batch_create_jobs()
        .set_parent(tenant_name)
        .set_jobs(jobs)
        .poller()
        .until_done()
        .await?;

    let mut outcome = BatchOutcome::default();
    for result in response.job_results {
        match (result.status, result.job) {
            (Some(status), job) if status.code != 0 => {
                let requisition_id = job.map(|j| j.requisition_id).unwrap_or_default();
                tracing::warn!(
                    "cannot create job {requisition_id}: [{}] {}",
                    status.code,
                    status.message
                );
                outcome.failed += 1;
            }
            (_, Some(job)) => {
                println!("Created job {}", job.name);
                outcome.created.push(job);
            }
            (_, None) => {
                tracing::warn!("the batch returned a result without a job or an error");
                outcome.failed += 1;
            }
        }
    }
    println!(
        "Created {} jobs, {} failed",
        outcome.created.len(),
        outcome.failed
    );
    Ok(outcome)
}
// [END job_search_batch_create_jobs]
