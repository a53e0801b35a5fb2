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

// [START dlp_get_job]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::DlpJob;

pub async fn sample(client: &DlpService, parent: &str, job: &str) -> anyhow::Result<DlpJob> {
    let name = samples_common::qualify(parent, "dlpJobs", job);
    let job = client.get_dlp_job().set_name(name).send().await?;
    println!("Job {} state: {:?}", job.name, job.state);
    Ok(job)
}
// [END dlp_get_job]
