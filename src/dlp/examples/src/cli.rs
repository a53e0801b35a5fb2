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

//! The `dlp` command line.

use crate::deid::WrappedKey;
use crate::deid::date_shift::ShiftContext;
use crate::inspect::InspectOptions;
use crate::risk::{PollOptions, SourceTable};
use crate::triggers::create_trigger::TriggerOptions;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    DlpJobType, Likelihood, crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet,
};
use samples_common::parse_duration;
use std::path::PathBuf;
use std::time::Duration;

/// Sensitive Data Protection (DLP) samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The project that owns the DLP resources.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    /// The location for DLP requests.
    #[arg(long, default_value = "global")]
    pub location: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Inspect a string for sensitive data.
    InspectString {
        text: String,
        #[command(flatten)]
        inspect: InspectArgs,
    },
    /// Inspect a local file for sensitive data.
    InspectFile {
        path: PathBuf,
        #[command(flatten)]
        inspect: InspectArgs,
    },
    /// Inspect a string using a custom regular expression.
    InspectCustomRegex {
        text: String,
        pattern: String,
        #[arg(long, default_value = "C_MRN")]
        info_type_name: String,
    },
    /// Inspect files in Cloud Storage using a DLP job.
    InspectGcs {
        /// A `gs://` URL, wildcards are allowed.
        gcs_url: String,
        #[command(flatten)]
        inspect: InspectArgs,
        #[command(flatten)]
        poll: PollArgs,
    },
    /// Redact sensitive data from an image.
    RedactImage {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_delimiter = ',', default_values_t = default_info_types())]
        info_types: Vec<String>,
    },
    /// Mask sensitive data with a masking character.
    DeidMask {
        text: String,
        #[arg(long, default_value_t = '*')]
        masking_character: char,
        /// The number of characters to mask, zero masks all.
        #[arg(long, default_value_t = 0)]
        number_to_mask: i32,
    },
    /// Remove sensitive data.
    DeidRedact {
        text: String,
        #[arg(long, value_delimiter = ',', default_value = "PHONE_NUMBER")]
        info_types: Vec<String>,
    },
    /// Replace sensitive data with its info type.
    DeidReplaceInfoType {
        text: String,
        #[arg(long, value_delimiter = ',', default_values_t = default_info_types())]
        info_types: Vec<String>,
    },
    /// Encrypt sensitive data with format-preserving encryption.
    DeidFpe {
        text: String,
        #[command(flatten)]
        key: KeyArgs,
        #[arg(long, value_delimiter = ',', default_value = "PHONE_NUMBER")]
        info_types: Vec<String>,
        #[arg(long, value_enum, default_value_t = Alphabet::Numeric)]
        alphabet: Alphabet,
        #[arg(long, default_value = "SSN_TOKEN")]
        surrogate_type: String,
    },
    /// Decrypt data encrypted by `deid-fpe`.
    ReidFpe {
        text: String,
        #[command(flatten)]
        key: KeyArgs,
        #[arg(long, value_enum, default_value_t = Alphabet::Numeric)]
        alphabet: Alphabet,
        #[arg(long, default_value = "SSN_TOKEN")]
        surrogate_type: String,
    },
    /// Encrypt sensitive data with deterministic encryption.
    DeidDeterministic {
        text: String,
        #[command(flatten)]
        key: KeyArgs,
        #[arg(long, value_delimiter = ',', default_value = "PHONE_NUMBER")]
        info_types: Vec<String>,
        #[arg(long, default_value = "SSN_TOKEN")]
        surrogate_type: String,
    },
    /// Decrypt data encrypted by `deid-deterministic`.
    ReidDeterministic {
        text: String,
        #[command(flatten)]
        key: KeyArgs,
        #[arg(long, default_value = "SSN_TOKEN")]
        surrogate_type: String,
    },
    /// Shift the dates in a CSV file.
    DeidDateShift {
        input: PathBuf,
        output: PathBuf,
        lower_bound_days: i32,
        upper_bound_days: i32,
        /// The columns containing dates.
        #[arg(value_delimiter = ',', required = true)]
        date_fields: Vec<String>,
        /// Shift all dates sharing this column value by the same amount.
        #[arg(long, requires_all = ["key_name", "wrapped_key"])]
        context_field: Option<String>,
        #[arg(long, env = "DLP_DEID_KEY_NAME")]
        key_name: Option<String>,
        #[arg(long, env = "DLP_DEID_WRAPPED_KEY")]
        wrapped_key: Option<String>,
    },
    /// List the built-in info types.
    ListInfoTypes {
        #[arg(long, default_value = "en-US")]
        language_code: String,
        #[arg(long, default_value = "supported_by=INSPECT")]
        filter: String,
    },
    /// Create an inspect template.
    CreateInspectTemplate {
        template_id: String,
        #[arg(long, default_value = "")]
        display_name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[command(flatten)]
        inspect: InspectArgs,
    },
    /// List inspect templates.
    ListInspectTemplates,
    /// Delete an inspect template, by id or full name.
    DeleteInspectTemplate { template: String },
    /// Create a trigger that periodically inspects Cloud Storage.
    CreateTrigger {
        trigger_id: String,
        gcs_url: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=60))]
        scan_period_days: i64,
        #[arg(long, default_value = "")]
        display_name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[command(flatten)]
        inspect: InspectArgs,
    },
    /// List job triggers.
    ListTriggers,
    /// Delete a job trigger, by id or full name.
    DeleteTrigger { trigger: String },
    /// List DLP jobs.
    ListJobs {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long, value_enum, default_value_t = JobType::Inspect)]
        job_type: JobType,
    },
    /// Get a DLP job, by id or full name.
    GetJob { job: String },
    /// Delete a DLP job, by id or full name.
    DeleteJob { job: String },
    /// Compute numerical statistics of a BigQuery column.
    NumericalStats {
        #[command(flatten)]
        table: TableArgs,
        column: String,
        #[command(flatten)]
        poll: PollArgs,
    },
    /// Compute categorical statistics of a BigQuery column.
    CategoricalStats {
        #[command(flatten)]
        table: TableArgs,
        column: String,
        #[command(flatten)]
        poll: PollArgs,
    },
    /// Compute the k-anonymity of a BigQuery table.
    KAnonymity {
        #[command(flatten)]
        table: TableArgs,
        #[arg(value_delimiter = ',', required = true)]
        quasi_ids: Vec<String>,
        #[command(flatten)]
        poll: PollArgs,
    },
    /// Compute the l-diversity of a BigQuery table.
    LDiversity {
        #[command(flatten)]
        table: TableArgs,
        sensitive_attribute: String,
        #[arg(value_delimiter = ',', required = true)]
        quasi_ids: Vec<String>,
        #[command(flatten)]
        poll: PollArgs,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    #[arg(long, value_delimiter = ',', default_values_t = default_info_types())]
    pub info_types: Vec<String>,
    #[arg(long, value_enum, default_value_t = MinLikelihood::Possible)]
    pub min_likelihood: MinLikelihood,
    /// The maximum number of findings, zero uses the service default.
    #[arg(long, default_value_t = 0)]
    pub max_findings: i32,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub include_quote: bool,
}

impl From<InspectArgs> for InspectOptions {
    fn from(value: InspectArgs) -> Self {
        Self {
            info_types: value.info_types,
            min_likelihood: value.min_likelihood.into(),
            max_findings: value.max_findings,
            include_quote: value.include_quote,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct KeyArgs {
    /// The KMS key used to wrap the data key.
    #[arg(long, env = "DLP_DEID_KEY_NAME")]
    pub key_name: String,
    /// The base64-encoded wrapped data key.
    #[arg(long, env = "DLP_DEID_WRAPPED_KEY")]
    pub wrapped_key: String,
}

impl From<KeyArgs> for WrappedKey {
    fn from(value: KeyArgs) -> Self {
        WrappedKey::new(value.key_name, value.wrapped_key)
    }
}

#[derive(Clone, Debug, Args)]
pub struct PollArgs {
    #[arg(long, default_value_t = 30)]
    pub poll_attempts: u32,
    #[arg(long, value_parser = parse_duration, default_value = "10s")]
    pub poll_delay: Duration,
}

impl From<PollArgs> for PollOptions {
    fn from(value: PollArgs) -> Self {
        Self {
            attempts: value.poll_attempts,
            delay: value.poll_delay,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct TableArgs {
    /// The project containing the BigQuery table.
    pub table_project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl From<TableArgs> for SourceTable {
    fn from(value: TableArgs) -> Self {
        Self {
            project_id: value.table_project_id,
            dataset_id: value.dataset_id,
            table_id: value.table_id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum MinLikelihood {
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl From<MinLikelihood> for Likelihood {
    fn from(value: MinLikelihood) -> Self {
        match value {
            MinLikelihood::VeryUnlikely => Likelihood::VeryUnlikely,
            MinLikelihood::Unlikely => Likelihood::Unlikely,
            MinLikelihood::Possible => Likelihood::Possible,
            MinLikelihood::Likely => Likelihood::Likely,
            MinLikelihood::VeryLikely => Likelihood::VeryLikely,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Alphabet {
    Numeric,
    Hexadecimal,
    UpperCaseAlphaNumeric,
    AlphaNumeric,
}

impl From<Alphabet> for FfxCommonNativeAlphabet {
    fn from(value: Alphabet) -> Self {
        match value {
            Alphabet::Numeric => FfxCommonNativeAlphabet::Numeric,
            Alphabet::Hexadecimal => FfxCommonNativeAlphabet::Hexadecimal,
            Alphabet::UpperCaseAlphaNumeric => FfxCommonNativeAlphabet::UpperCaseAlphaNumeric,
            Alphabet::AlphaNumeric => FfxCommonNativeAlphabet::AlphaNumeric,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum JobType {
    Inspect,
    Risk,
}

impl From<JobType> for DlpJobType {
    fn from(value: JobType) -> Self {
        match value {
            JobType::Inspect => DlpJobType::InspectJob,
            JobType::Risk => DlpJobType::RiskAnalysisJob,
        }
    }
}

fn default_info_types() -> Vec<String> {
    crate::DEFAULT_INFO_TYPES.map(str::to_string).to_vec()
}

/// Creates a client and runs the selected command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = DlpService::builder().build().await?;
    dispatch(&client, cli).await
}

/// Runs the selected command using `client`.
pub async fn dispatch(client: &DlpService, cli: Cli) -> anyhow::Result<()> {
    let parent = crate::parent(&cli.project_id, &cli.location);
    let parent = parent.as_str();
    tracing::info!("running {:?} in {parent}", cli.command);
    match cli.command {
        Command::InspectString { text, inspect } => {
            crate::inspect::inspect_string::sample(client, parent, &text, &inspect.into()).await?;
        }
        Command::InspectFile { path, inspect } => {
            crate::inspect::inspect_file::sample(client, parent, &path, &inspect.into()).await?;
        }
        Command::InspectCustomRegex {
            text,
            pattern,
            info_type_name,
        } => {
            crate::inspect::inspect_custom_regex::sample(
                client,
                parent,
                &text,
                &pattern,
                &info_type_name,
            )
            .await?;
        }
        Command::InspectGcs {
            gcs_url,
            inspect,
            poll,
        } => {
            crate::inspect::inspect_gcs::sample(
                client,
                parent,
                &gcs_url,
                &inspect.into(),
                poll.poll_attempts,
                poll.poll_delay,
            )
            .await?;
        }
        Command::RedactImage {
            input,
            output,
            info_types,
        } => {
            crate::inspect::redact_image::sample(client, parent, &input, &output, &info_types)
                .await?;
        }
        Command::DeidMask {
            text,
            masking_character,
            number_to_mask,
        } => {
            crate::deid::mask::sample(client, parent, &text, masking_character, number_to_mask)
                .await?;
        }
        Command::DeidRedact { text, info_types } => {
            crate::deid::redact::sample(client, parent, &text, &info_types).await?;
        }
        Command::DeidReplaceInfoType { text, info_types } => {
            crate::deid::replace_info_type::sample(client, parent, &text, &info_types).await?;
        }
        Command::DeidFpe {
            text,
            key,
            info_types,
            alphabet,
            surrogate_type,
        } => {
            crate::deid::deid_fpe::sample(
                client,
                parent,
                &text,
                &info_types,
                &key.into(),
                alphabet.into(),
                &surrogate_type,
            )
            .await?;
        }
        Command::ReidFpe {
            text,
            key,
            alphabet,
            surrogate_type,
        } => {
            crate::deid::reid_fpe::sample(
                client,
                parent,
                &text,
                &key.into(),
                alphabet.into(),
                &surrogate_type,
            )
            .await?;
        }
        Command::DeidDeterministic {
            text,
            key,
            info_types,
            surrogate_type,
        } => {
            crate::deid::deid_deterministic::sample(
                client,
                parent,
                &text,
                &info_types,
                &key.into(),
                &surrogate_type,
            )
            .await?;
        }
        Command::ReidDeterministic {
            text,
            key,
            surrogate_type,
        } => {
            crate::deid::reid_deterministic::sample(
                client,
                parent,
                &text,
                &key.into(),
                &surrogate_type,
            )
            .await?;
        }
        Command::DeidDateShift {
            input,
            output,
            lower_bound_days,
            upper_bound_days,
            date_fields,
            context_field,
            key_name,
            wrapped_key,
        } => {
            let context = match (context_field, key_name, wrapped_key) {
                (Some(field), Some(key_name), Some(wrapped_key)) => Some(ShiftContext {
                    field,
                    key: WrappedKey::new(key_name, wrapped_key),
                }),
                _ => None,
            };
            crate::deid::date_shift::sample(
                client,
                parent,
                &input,
                &output,
                lower_bound_days..=upper_bound_days,
                &date_fields,
                context.as_ref(),
            )
            .await?;
        }
        Command::ListInfoTypes {
            language_code,
            filter,
        } => {
            crate::info_types::sample(client, parent, &language_code, &filter).await?;
        }
        Command::CreateInspectTemplate {
            template_id,
            display_name,
            description,
            inspect,
        } => {
            crate::templates::create_inspect_template::sample(
                client,
                parent,
                &template_id,
                &display_name,
                &description,
                &inspect.into(),
            )
            .await?;
        }
        Command::ListInspectTemplates => {
            crate::templates::list_inspect_templates::sample(client, parent).await?;
        }
        Command::DeleteInspectTemplate { template } => {
            crate::templates::delete_inspect_template::sample(client, parent, &template).await?;
        }
        Command::CreateTrigger {
            trigger_id,
            gcs_url,
            scan_period_days,
            display_name,
            description,
            inspect,
        } => {
            let options = TriggerOptions {
                display_name,
                description,
                scan_period_days,
                inspect: inspect.into(),
            };
            crate::triggers::create_trigger::sample(client, parent, &trigger_id, &gcs_url, &options)
                .await?;
        }
        Command::ListTriggers => {
            crate::triggers::list_triggers::sample(client, parent).await?;
        }
        Command::DeleteTrigger { trigger } => {
            crate::triggers::delete_trigger::sample(client, parent, &trigger).await?;
        }
        Command::ListJobs { filter, job_type } => {
            crate::jobs::list_jobs::sample(client, parent, filter.as_deref(), job_type.into())
                .await?;
        }
        Command::GetJob { job } => {
            crate::jobs::get_job::sample(client, parent, &job).await?;
        }
        Command::DeleteJob { job } => {
            crate::jobs::delete_job::sample(client, parent, &job).await?;
        }
        Command::NumericalStats {
            table,
            column,
            poll,
        } => {
            crate::risk::numerical_stats::sample(client, parent, &table.into(), &column, poll.into())
                .await?;
        }
        Command::CategoricalStats {
            table,
            column,
            poll,
        } => {
            crate::risk::categorical_stats::sample(
                client,
                parent,
                &table.into(),
                &column,
                poll.into(),
            )
            .await?;
        }
        Command::KAnonymity {
            table,
            quasi_ids,
            poll,
        } => {
            crate::risk::k_anonymity::sample(client, parent, &table.into(), &quasi_ids, poll.into())
                .await?;
        }
        Command::LDiversity {
            table,
            sensitive_attribute,
            quasi_ids,
            poll,
        } => {
            crate::risk::l_diversity::sample(
                client,
                parent,
                &table.into(),
                &quasi_ids,
                &sensitive_attribute,
                poll.into(),
            )
            .await?;
        }
    }
    Ok(())
}
