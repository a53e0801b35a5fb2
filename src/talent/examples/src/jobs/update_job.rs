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

// [START job_search_update_job]
use anyhow::bail;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::Job;
use google_cloud_wkt::FieldMask;

/// Changes the title and/or the description of a job.
pub async fn sample(
    client: &JobService,
    job_name: &str,
    title: Option<&str>,
    description: Option<&str>,
) -> anyhow::Result<Job> {
    let mut job = Job::new().set_name(job_name);
    let mut paths = Vec::new();
    if let Some(title) = title {
        job = job.set_title(title);
        paths.push("title");
    }
    if let Some(description) = description {
        job = job.set_description(description);
        paths.push("description");
    }
    if paths.is_empty() {
        bail!("no job fields to update");
    }

    let job = client
        .update_job()
        .set_job(job)
        .set_update_mask(FieldMask::default().set_paths(paths))
        .send()
        .await?;
    super::print_job(&job);
    Ok(job)
}
// [END job_search_update_job]
