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

//! The `talent` command line.

use crate::companies::update_company::CompanyChanges;
use crate::jobs::JobOptions;
use crate::search::commute_search::Commute;
use clap::{Args, Parser, Subcommand};
use google_cloud_talent_v4::client::{CompanyService, Completion, JobService, TenantService};
use samples_common::parse_duration;
use std::time::Duration;

/// Cloud Talent Solution samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The project that owns the tenants.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    /// The tenant id (or full name) for company, job and search commands.
    #[arg(long, env = "TALENT_TENANT_ID", default_value = "")]
    pub tenant: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create a tenant with the given external id.
    CreateTenant { external_id: String },
    GetTenant { tenant_id: String },
    ListTenants,
    DeleteTenant { tenant_id: String },
    #[command(flatten)]
    InTenant(TenantCommand),
}

/// The commands that run inside the `--tenant` tenant.
#[derive(Clone, Debug, Subcommand)]
pub enum TenantCommand {
    CreateCompany {
        display_name: String,
        external_id: String,
    },
    GetCompany { company_id: String },
    /// Update the given company fields.
    UpdateCompany {
        company_id: String,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        career_site_uri: Option<String>,
        #[arg(long)]
        headquarters_address: Option<String>,
    },
    ListCompanies,
    DeleteCompany { company_id: String },
    CreateJob {
        company_id: String,
        requisition_id: String,
        #[command(flatten)]
        job: JobArgs,
    },
    /// Create a job with a filterable custom attribute.
    CreateJobCustomAttributes {
        company_id: String,
        requisition_id: String,
        /// The attribute in `key=value` format.
        #[arg(long, value_parser = parse_attribute, default_value = "someFieldName1=value1")]
        attribute: (String, String),
    },
    GetJob { job_id: String },
    /// Update the title and/or the description of a job.
    UpdateJob {
        job_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List the jobs of a company.
    ListJobs { company_id: String },
    DeleteJob { job_id: String },
    /// Create several jobs with one long-running operation.
    BatchCreateJobs {
        company_id: String,
        #[arg(long, default_value_t = 2)]
        count: usize,
        #[arg(long, default_value = "batch-job")]
        requisition_prefix: String,
    },
    SearchJobs {
        query: String,
        #[arg(long)]
        company_id: Option<String>,
    },
    /// Search jobs and print a histogram of the results.
    HistogramSearch {
        #[arg(long, default_value = crate::search::histogram_search::DEFAULT_HISTOGRAM_QUERY)]
        histogram_query: String,
    },
    /// Search jobs within a public transit commute.
    CommuteSearch {
        #[arg(long, default_value_t = 37.422408, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, default_value_t = -122.084068, allow_negative_numbers = true)]
        longitude: f64,
        #[arg(long, value_parser = parse_duration, default_value = "30m")]
        travel_time: Duration,
    },
    /// Search jobs with a custom attribute filter.
    CustomAttributeSearch {
        #[arg(default_value = r#"(someFieldName1 = "value1")"#)]
        filter: String,
    },
    /// Suggest completions for a query.
    CompleteQuery {
        query: String,
        #[arg(long, default_value_t = 5)]
        page_size: i32,
        #[arg(long, default_value = "en-US")]
        language_code: String,
    },
    /// Create a company and a job, search for it, and delete both.
    Walkthrough { external_id: String },
}

#[derive(Clone, Debug, Args)]
pub struct JobArgs {
    #[arg(long, default_value = "Software Engineer")]
    title: String,
    #[arg(long, default_value = "This is a description of this <i>wonderful</i> job!")]
    description: String,
    #[arg(long, default_value = "https://www.example.org/job-posting/123")]
    application_uri: String,
    /// Repeat for several addresses.
    #[arg(long = "address")]
    addresses: Vec<String>,
    #[arg(long, default_value = "en-US")]
    language_code: String,
}

impl JobArgs {
    fn into_options(self, requisition_id: String) -> JobOptions {
        let defaults = JobOptions::new(requisition_id);
        let addresses = if self.addresses.is_empty() {
            defaults.addresses
        } else {
            self.addresses
        };
        JobOptions {
            requisition_id: defaults.requisition_id,
            title: self.title,
            description: self.description,
            application_uri: self.application_uri,
            addresses,
            language_code: self.language_code,
        }
    }
}

fn parse_attribute(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((k, v)) if !k.is_empty() && !v.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got {arg}")),
    }
}

fn tenant_name(project_id: &str, tenant: &str) -> anyhow::Result<String> {
    if tenant.is_empty() {
        anyhow::bail!("this command requires --tenant or TALENT_TENANT_ID");
    }
    Ok(crate::tenant_name(project_id, tenant))
}

/// The clients used by the commands.
#[derive(Clone, Debug)]
pub struct Clients {
    pub tenants: TenantService,
    pub companies: CompanyService,
    pub jobs: JobService,
    pub completion: Completion,
}

impl Clients {
    pub async fn new() -> anyhow::Result<Self> {
        Ok(Self {
            tenants: TenantService::builder().build().await?,
            companies: CompanyService::builder().build().await?,
            jobs: JobService::builder().build().await?,
            completion: Completion::builder().build().await?,
        })
    }
}

/// Runs the selected command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let clients = Clients::new().await?;
    dispatch(&clients, cli).await
}

/// Runs the selected command using `clients`.
pub async fn dispatch(clients: &Clients, cli: Cli) -> anyhow::Result<()> {
    tracing::info!("running {:?} in project {}", cli.command, cli.project_id);
    let project = crate::project_name(&cli.project_id);
    match cli.command {
        Command::CreateTenant { external_id } => {
            crate::tenants::create_tenant::sample(&clients.tenants, &project, &external_id).await?;
        }
        Command::GetTenant { tenant_id } => {
            let name = crate::tenant_name(&cli.project_id, &tenant_id);
            crate::tenants::get_tenant::sample(&clients.tenants, &name).await?;
        }
        Command::ListTenants => {
            crate::tenants::list_tenants::sample(&clients.tenants, &project).await?;
        }
        Command::DeleteTenant { tenant_id } => {
            let name = crate::tenant_name(&cli.project_id, &tenant_id);
            crate::tenants::delete_tenant::sample(&clients.tenants, &name).await?;
        }
        Command::InTenant(command) => {
            let tenant = tenant_name(&cli.project_id, &cli.tenant)?;
            dispatch_in_tenant(clients, &tenant, command).await?;
        }
    }
    Ok(())
}

async fn dispatch_in_tenant(
    clients: &Clients,
    tenant: &str,
    command: TenantCommand,
) -> anyhow::Result<()> {
    let company = |id: &str| crate::company_name(tenant, id);
    let job = |id: &str| crate::job_name(tenant, id);
    let companies = &clients.companies;
    let jobs = &clients.jobs;
    match command {
        TenantCommand::CreateCompany {
            display_name,
            external_id,
        } => {
            crate::companies::create_company::sample(companies, tenant, &display_name, &external_id)
                .await?;
        }
        TenantCommand::GetCompany { company_id } => {
            crate::companies::get_company::sample(companies, &company(&company_id)).await?;
        }
        TenantCommand::UpdateCompany {
            company_id,
            display_name,
            career_site_uri,
            headquarters_address,
        } => {
            let changes = CompanyChanges {
                display_name,
                career_site_uri,
                headquarters_address,
            };
            crate::companies::update_company::sample(companies, &company(&company_id), &changes)
                .await?;
        }
        TenantCommand::ListCompanies => {
            crate::companies::list_companies::sample(companies, tenant).await?;
        }
        TenantCommand::DeleteCompany { company_id } => {
            crate::companies::delete_company::sample(companies, &company(&company_id)).await?;
        }
        TenantCommand::CreateJob {
            company_id,
            requisition_id,
            job: args,
        } => {
            let options = args.into_options(requisition_id);
            crate::jobs::create_job::sample(jobs, tenant, &company(&company_id), &options).await?;
        }
        TenantCommand::CreateJobCustomAttributes {
            company_id,
            requisition_id,
            attribute,
        } => {
            crate::jobs::create_job_custom_attributes::sample(
                jobs,
                tenant,
                &company(&company_id),
                &requisition_id,
                (&attribute.0, &attribute.1),
            )
            .await?;
        }
        TenantCommand::GetJob { job_id } => {
            crate::jobs::get_job::sample(jobs, &job(&job_id)).await?;
        }
        TenantCommand::UpdateJob {
            job_id,
            title,
            description,
        } => {
            crate::jobs::update_job::sample(
                jobs,
                &job(&job_id),
                title.as_deref(),
                description.as_deref(),
            )
            .await?;
        }
        TenantCommand::ListJobs { company_id } => {
            let filter = crate::jobs::list_jobs::company_filter(&company(&company_id));
            crate::jobs::list_jobs::sample(jobs, tenant, &filter).await?;
        }
        TenantCommand::DeleteJob { job_id } => {
            crate::jobs::delete_job::sample(jobs, &job(&job_id)).await?;
        }
        TenantCommand::BatchCreateJobs {
            company_id,
            count,
            requisition_prefix,
        } => {
            let company_name = company(&company_id);
            let batch = (0..count)
                .map(|n| JobOptions::new(format!("{requisition_prefix}-{n}")).to_job(&company_name))
                .collect();
            crate::jobs::batch_create_jobs::sample(jobs, tenant, batch).await?;
        }
        TenantCommand::SearchJobs { query, company_id } => {
            let company_name = company_id.as_deref().map(company);
            crate::search::search_jobs::sample(jobs, tenant, &query, company_name.as_deref())
                .await?;
        }
        TenantCommand::HistogramSearch { histogram_query } => {
            crate::search::histogram_search::sample(jobs, tenant, &histogram_query).await?;
        }
        TenantCommand::CommuteSearch {
            latitude,
            longitude,
            travel_time,
        } => {
            let commute = Commute {
                latitude,
                longitude,
                travel_time,
            };
            crate::search::commute_search::sample(jobs, tenant, &commute).await?;
        }
        TenantCommand::CustomAttributeSearch { filter } => {
            crate::search::custom_attribute_search::sample(jobs, tenant, &filter).await?;
        }
        TenantCommand::CompleteQuery {
            query,
            page_size,
            language_code,
        } => {
            crate::completion::complete_query::sample(
                &clients.completion,
                tenant,
                &query,
                page_size,
                &language_code,
            )
            .await?;
        }
        TenantCommand::Walkthrough { external_id } => {
            crate::walkthrough::sample(companies, jobs, tenant, &external_id).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(args: &[&str]) -> anyhow::Result<Cli> {
        let mut all = vec!["talent", "--project-id=p", "--tenant=t"];
        all.extend_from_slice(args);
        Ok(Cli::try_parse_from(all)?)
    }

    #[test]
    fn tenant() -> anyhow::Result<()> {
        let cli = parse(&["list-companies"])?;
        assert!(
            matches!(cli.command, Command::InTenant(TenantCommand::ListCompanies)),
            "{cli:?}"
        );
        assert_eq!(tenant_name(&cli.project_id, &cli.tenant)?, "projects/p/tenants/t");
        assert!(tenant_name("p", "").is_err());
        let cli = parse(&["list-tenants"])?;
        assert!(matches!(cli.command, Command::ListTenants), "{cli:?}");
        Ok(())
    }

    #[test]
    fn job_defaults() -> anyhow::Result<()> {
        let cli = parse(&["create-job", "c", "r1", "--title=Chef"])?;
        let Command::InTenant(TenantCommand::CreateJob {
            requisition_id,
            job,
            ..
        }) = cli.command
        else {
            panic!("unexpected command {:?}", cli.command);
        };
        let got = job.into_options(requisition_id);
        let want = JobOptions {
            title: "Chef".to_string(),
            ..JobOptions::new("r1")
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn job_addresses() -> anyhow::Result<()> {
        let cli = parse(&["create-job", "c", "r1", "--address=a1", "--address=a2"])?;
        let Command::InTenant(TenantCommand::CreateJob {
            requisition_id,
            job,
            ..
        }) = cli.command
        else {
            panic!("unexpected command {:?}", cli.command);
        };
        let got = job.into_options(requisition_id);
        assert_eq!(got.addresses, vec!["a1", "a2"]);
        Ok(())
    }

    #[test]
    fn commute() -> anyhow::Result<()> {
        let cli = parse(&["commute-search", "--longitude=-73.99", "--travel-time=45m"])?;
        let Command::InTenant(TenantCommand::CommuteSearch {
            latitude,
            longitude,
            travel_time,
        }) = cli.command
        else {
            panic!("unexpected command {:?}", cli.command);
        };
        assert_eq!(latitude, Commute::default().latitude);
        assert_eq!(longitude, -73.99);
        assert_eq!(travel_time, Duration::from_secs(45 * 60));
        Ok(())
    }

    #[test_case("a=b", Some(("a", "b")))]
    #[test_case("a=", None)]
    #[test_case("=b", None)]
    #[test_case("ab", None)]
    fn attribute_parser(input: &str, want: Option<(&str, &str)>) {
        let got = parse_attribute(input).ok();
        let want = want.map(|(k, v)| (k.to_string(), v.to_string()));
        assert_eq!(got, want);
    }

    #[test_case(&["unknown"])]
    #[test_case(&["create-company", "name-only"])]
    #[test_case(&["batch-create-jobs", "c", "--count=many"])]
    #[test_case(&["commute-search", "--travel-time=forever"])]
    fn invalid(args: &[&str]) {
        let got = parse(args);
        assert!(got.is_err(), "{got:?}");
    }
}
