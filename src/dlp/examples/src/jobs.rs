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

//! Manage DLP jobs.

pub mod delete_job;
pub mod get_job;
pub mod list_jobs;

use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{DlpJob, dlp_job::JobState};
use samples_common::wait::{Polled, poll_bounded};
use std::time::Duration;

/// Returns true once the job will not change state again.
pub fn is_finished(job: &DlpJob) -> bool {
    matches!(
        job.state,
        JobState::Done | JobState::Failed | JobState::Canceled
    )
}

/// Fails unless `job` finished successfully, printing the job errors.
///
/// `FAILED` and `CANCELED` jobs are finished, but they have no results.
pub fn ensure_done(job: &DlpJob) -> anyhow::Result<()> {
    if job.state == JobState::Done {
        return Ok(());
    }
    for error in &job.errors {
        if let Some(status) = &error.details {
            println!("Job error: [{}] {}", status.code, status.message);
        }
    }
    anyhow::bail!("job {} ended in state {:?}", job.name, job.state)
}

/// Polls `name` until the job finishes or `attempts` are exhausted.
pub async fn wait_for_job(
    client: &DlpService,
    name: &str,
    attempts: u32,
    delay: Duration,
) -> anyhow::Result<Polled<DlpJob>> {
    poll_bounded(attempts, delay, |_| async move {
        let job = client.get_dlp_job().set_name(name).send().await?;
        tracing::info!("job {name} is {:?}", job.state);
        Ok(is_finished(&job).then_some(job))
    })
    .await
}
