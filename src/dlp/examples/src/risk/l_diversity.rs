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

// [START dlp_l_diversity]
use super::{PollOptions, SourceTable};
use crate::format::value_to_string;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{DlpJob, FieldId, PrivacyMetric, privacy_metric};
use samples_common::wait::Polled;

pub async fn sample(
    client: &DlpService,
    parent: &str,
    table: &SourceTable,
    quasi_ids: &[String],
    sensitive_attribute: &str,
    poll: PollOptions,
) -> anyhow::Result<Polled<DlpJob>> {
    let metric = PrivacyMetric::new().set_l_diversity_config(
        privacy_metric::LDiversityConfig::new()
            .set_quasi_ids(super::fields(quasi_ids.iter().map(String::as_str)))
            .set_sensitive_attribute(FieldId::new().set_name(sensitive_attribute)),
    );
    let polled = super::run_job(client, parent, table, metric, poll).await?;
    let Polled::Done(job) = &polled else {
        return Ok(polled);
    };
    let Some(result) = super::details(job).and_then(|d| d.l_diversity_result()) else {
        return Ok(polled);
    };

    for (i, bucket) in result
        .sensitive_value_frequency_histogram_buckets
        .iter()
        .enumerate()
    {
        println!("Bucket {i}:");
        println!(
            "\tBucket size range: [{}, {}]",
            bucket.sensitive_value_frequency_lower_bound,
            bucket.sensitive_value_frequency_upper_bound
        );
        for class in &bucket.bucket_values {
            let values: Vec<_> = class.quasi_ids_values.iter().map(value_to_string).collect();
            println!("\tQuasi-ID values: [{}]", values.join(", "));
            println!("\tClass size: {}", class.equivalence_class_size);
            for v in &class.top_sensitive_values {
                let value = v.value.as_ref().map(value_to_string).unwrap_or_default();
                println!("\t\tSensitive value {value} occurs {} time(s)", v.count);
            }
        }
    }
    Ok(polled)
}
// [END dlp_l_diversity]
