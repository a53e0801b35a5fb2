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

//! Risk analysis jobs over BigQuery tables.
//!
//! Each sample starts a risk analysis job, waits for it using a bounded
//! number of polls, and prints the histogram for its metric. A job that does
//! not finish in time is reported, not treated as an error. A job that fails
//! or is canceled is an error.

pub mod categorical_stats;
pub mod k_anonymity;
pub mod l_diversity;
pub mod numerical_stats;

use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    AnalyzeDataSourceRiskDetails, BigQueryTable, DlpJob, FieldId, PrivacyMetric,
    RiskAnalysisJobConfig,
};
use samples_common::wait::Polled;
use std::time::Duration;

/// Identifies the BigQuery table to analyze.
#[derive(Clone, Debug)]
pub struct SourceTable {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl SourceTable {
    fn to_model(&self) -> BigQueryTable {
        BigQueryTable::new()
            .set_project_id(&self.project_id)
            .set_dataset_id(&self.dataset_id)
            .set_table_id(&self.table_id)
    }
}

/// How long to wait for a risk analysis job.
#[derive(Clone, Copy, Debug)]
pub struct PollOptions {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            attempts: 30,
            delay: Duration::from_secs(10),
        }
    }
}

pub(crate) fn fields<I, S>(names: I) -> Vec<FieldId>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(|n| FieldId::new().set_name(n)).collect()
}

/// Starts a risk analysis job and waits for it to finish.
///
/// Returns an error if the job finished in any state other than `DONE`.
pub(crate) async fn run_job(
    client: &DlpService,
    parent: &str,
    table: &SourceTable,
    metric: PrivacyMetric,
    poll: PollOptions,
) -> anyhow::Result<Polled<DlpJob>> {
    let config = RiskAnalysisJobConfig::new()
        .set_source_table(table.to_model())
        .set_privacy_metric(metric);
    let job = client
        .create_dlp_job()
        .set_parent(parent)
        .set_risk_job(config)
        .send()
        .await?;
    println!("Job created: {}", job.name);
    let polled = crate::jobs::wait_for_job(client, &job.name, poll.attempts, poll.delay).await?;
    match &polled {
        Polled::Done(finished) => crate::jobs::ensure_done(finished)?,
        Polled::NotFinished { attempts } => {
            println!("Job {} not finished after {attempts} attempts", job.name);
        }
    }
    Ok(polled)
}

/// Returns the risk analysis details of a finished job.
pub(crate) fn details(job: &DlpJob) -> Option<&AnalyzeDataSourceRiskDetails> {
    println!("Job {} finished with state {:?}", job.name, job.state);
    job.risk_details().map(|d| d.as_ref())
}
