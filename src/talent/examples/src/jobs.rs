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

//! Create, inspect, update and delete jobs.

pub mod batch_create_jobs;
pub mod create_job;
pub mod create_job_custom_attributes;
pub mod delete_job;
pub mod get_job;
pub mod list_jobs;
pub mod update_job;

use google_cloud_talent_v4::model::{Job, job::ApplicationInfo};

/// The fields of a new job posting.
#[derive(Clone, Debug, PartialEq)]
pub struct JobOptions {
    /// The caller's identifier for the job, unique within a company.
    pub requisition_id: String,
    pub title: String,
    pub description: String,
    pub application_uri: String,
    pub addresses: Vec<String>,
    pub language_code: String,
}

impl JobOptions {
    /// The defaults for a job posting with the given `requisition_id`.
    pub fn new<T: Into<String>>(requisition_id: T) -> Self {
        Self {
            requisition_id: requisition_id.into(),
            title: "Software Engineer".to_string(),
            description: "This is a description of this <i>wonderful</i> job!".to_string(),
            application_uri: "https://www.example.org/job-posting/123".to_string(),
            addresses: vec![
                "1600 Amphitheatre Parkway, Mountain View, CA 94043".to_string(),
                "111 8th Avenue, New York, NY 10011".to_string(),
            ],
            language_code: "en-US".to_string(),
        }
    }

    /// Builds the job for `company_name`.
    pub fn to_job(&self, company_name: &str) -> Job {
        Job::new()
            .set_company(company_name)
            .set_requisition_id(self.requisition_id.clone())
            .set_title(self.title.clone())
            .set_description(self.description.clone())
            .set_application_info(ApplicationInfo::new().set_uris([self.application_uri.clone()]))
            .set_addresses(self.addresses.clone())
            .set_language_code(self.language_code.clone())
    }
}

pub(crate) fn print_job(job: &Job) {
    println!("Job {}", job.name);
    println!("  company: {}", job.company);
    println!("  requisition id: {}", job.requisition_id);
    println!("  title: {}", job.title);
    for address in &job.addresses {
        println!("  address: {address}");
    }
}
