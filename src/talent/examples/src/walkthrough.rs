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

//! Run the company and job samples in sequence.
//!
//! Each step receives the names created by the previous steps. Nothing is
//! kept between invocations.

use crate::jobs::JobOptions;
use google_cloud_talent_v4::client::{CompanyService, JobService};

/// The resources used by a walkthrough. They are deleted before it returns.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub company_name: String,
    pub job_name: String,
    pub matches: usize,
}

/// Creates a company and a job, finds the job, and deletes both.
///
/// The job and company are deleted even if the search fails.
pub async fn sample(
    companies: &CompanyService,
    jobs: &JobService,
    tenant_name: &str,
    external_id: &str,
) -> anyhow::Result<Report> {
    let company = crate::companies::create_company::sample(
        companies,
        tenant_name,
        "Walkthrough Company",
        external_id,
    )
    .await?;
    let options = JobOptions::new(format!("{external_id}-job"));
    let job = match crate::jobs::create_job::sample(jobs, tenant_name, &company.name, &options)
        .await
    {
        Ok(job) => job,
        Err(e) => {
            delete_company(companies, &company.name).await;
            return Err(e);
        }
    };

    let found = async {
        crate::jobs::get_job::sample(jobs, &job.name).await?;
        crate::search::search_jobs::sample(jobs, tenant_name, &options.title, Some(&company.name))
            .await
    }
    .await;

    let deleted = crate::jobs::delete_job::sample(jobs, &job.name).await;
    if deleted.is_ok() {
        delete_company(companies, &company.name).await;
    }
    let matches = found?.len();
    deleted?;
    Ok(Report {
        company_name: company.name,
        job_name: job.name,
        matches,
    })
}

async fn delete_company(companies: &CompanyService, company_name: &str) {
    if let Err(e) = crate::companies::delete_company::sample(companies, company_name).await {
        tracing::warn!("cannot delete company {company_name}: {e:?}");
    }
}
