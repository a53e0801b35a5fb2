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

//! Samples for Cloud Talent Solution (job search).
//!
//! Tenants own companies, and companies own jobs. The service assigns the
//! ids of all three resources, the samples use the `external_id` and
//! `requisition_id` fields to hold the caller's identifiers.

pub mod cli;
pub mod companies;
pub mod completion;
pub mod jobs;
pub mod search;
pub mod tenants;
pub mod walkthrough;

/// Formats the name of a project, the parent of all tenants.
pub fn project_name(project_id: &str) -> String {
    format!("projects/{project_id}")
}

/// Formats the name of a tenant, accepting a tenant id or a full name.
pub fn tenant_name(project_id: &str, tenant: &str) -> String {
    samples_common::qualify(&project_name(project_id), "tenants", tenant)
}

/// Formats the name of a company in `tenant_name`, accepting a company id or
/// a full name.
pub fn company_name(tenant_name: &str, company: &str) -> String {
    samples_common::qualify(tenant_name, "companies", company)
}

/// Formats the name of a job in `tenant_name`, accepting a job id or a full
/// name.
pub fn job_name(tenant_name: &str, job: &str) -> String {
    samples_common::qualify(tenant_name, "jobs", job)
}
