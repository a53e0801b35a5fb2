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

// [START dlp_categorical_stats]
use super::{PollOptions, SourceTable};
use crate::format::value_to_string;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{DlpJob, FieldId, PrivacyMetric, privacy_metric};
use samples_common::wait::Polled;

pub async fn sample(
    client: &DlpService,
    parent: &str,
    table: &SourceTable,
    column: &str,
    poll: PollOptions,
) -> anyhow::Result<Polled<DlpJob>> {
    let metric = PrivacyMetric::new().set_categorical_stats_config(
        privacy_metric::CategoricalStatsConfig::new().set_field(FieldId::new().set_name(column)),
    );
    let polled = super::run_job(client, parent, table, metric, poll).await?;
    let Polled::Done(job) = &polled else {
        return Ok(polled);
    };
    let Some(result) = super::details(job).and_then(|d| d.categorical_stats_result()) else {
        return Ok(polled);
    };

    for bucket in &result.value_frequency_histogram_buckets {
        println!(
            "Most common value occurs {} time(s)",
            bucket.value_frequency_upper_bound
        );
        println!(
            "Least common value occurs {} time(s)",
            bucket.value_frequency_lower_bound
        );
        println!("{} unique value(s) total", bucket.bucket_size);
        for v in &bucket.bucket_values {
            let value = v.value.as_ref().map(value_to_string).unwrap_or_default();
            println!("\tValue {value} occurs {} time(s)", v.count);
        }
    }
    Ok(polled)
}
// [END dlp_categorical_stats]
