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

// [START dlp_inspect_gcs]
use super::InspectOptions;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CloudStorageOptions, DlpJob, InspectJobConfig, StorageConfig, cloud_storage_options::FileSet,
};
use samples_common::wait::Polled;
use std::time::Duration;

/// Inspects the files in `gcs_url` using a DLP job.
///
/// Returns `Polled::NotFinished` if the job is still running after
/// `attempts` polls, and an error if the job fails or is canceled.
pub async fn sample(
    client: &DlpService,
    parent: &str,
    gcs_url: &str,
    options: &InspectOptions,
    attempts: u32,
    delay: Duration,
) -> anyhow::Result<Polled<DlpJob>> {
    let storage = StorageConfig::new().set_cloud_storage_options(
        CloudStorageOptions::new().set_file_set(FileSet::new().set_url(gcs_url)),
    );
    let job_config = InspectJobConfig::new()
        .set_storage_config(storage)
        .set_inspect_config(options.to_config());

    let job = client
        .create_dlp_job()
        .set_parent(parent)
        .set_inspect_job(job_config)
        .send()
        .await?;
    println!("Job created: {}", job.name);

    let polled = crate::jobs::wait_for_job(client, &job.name, attempts, delay).await?;
    match &polled {
        Polled::Done(job) => {
            crate::jobs::ensure_done(job)?;
            print_info_type_stats(job);
        }
        Polled::NotFinished { attempts } => {
            println!("Job {} not finished after {attempts} attempts", job.name)
        }
    }
    Ok(polled)
}

fn print_info_type_stats(job: &DlpJob) {
    println!("Job {} finished with state {:?}", job.name, job.state);
    let stats = job
        .inspect_details()
        .and_then(|d| d.result.as_ref())
        .map(|r| r.info_type_stats.as_slice())
        .unwrap_or_default();
    if stats.is_empty() {
        println!("No findings.");
    }
    for s in stats {
        let name = s.info_type.as_ref().map(|t| t.name.as_str()).unwrap_or_default();
        println!("\tInfo type: {name}, count: {}", s.count);
    }
}
// [END dlp_inspect_gcs]
