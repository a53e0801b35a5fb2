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

//! Search for jobs.
//!
//! All the searches send the same request metadata. The service uses it to
//! improve the results for a user across searches, the samples use fixed
//! values.

pub mod commute_search;
pub mod custom_attribute_search;
pub mod histogram_search;
pub mod search_jobs;

use google_cloud_talent_v4::model::{
    RequestMetadata, SearchJobsResponse, search_jobs_response::MatchingJob,
};

pub(crate) fn request_metadata() -> RequestMetadata {
    RequestMetadata::new()
        .set_domain("www.example.com")
        .set_session_id("Hashed session identifier")
        .set_user_id("Hashed user identifier")
}

/// Prints the matching jobs and returns them.
pub(crate) fn matching_jobs(response: SearchJobsResponse) -> Vec<MatchingJob> {
    if response.matching_jobs.is_empty() {
        println!("No matching jobs.");
    }
    for matching in &response.matching_jobs {
        if let Some(job) = &matching.job {
            println!("Job {} ({})", job.name, job.title);
        }
        if !matching.job_summary.is_empty() {
            println!("  summary: {}", matching.job_summary);
        }
        if !matching.job_title_snippet.is_empty() {
            println!("  title snippet: {}", matching.job_title_snippet);
        }
    }
    response.matching_jobs
}
