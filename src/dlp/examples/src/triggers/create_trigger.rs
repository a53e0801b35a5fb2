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

// [START dlp_create_trigger]
use crate::inspect::InspectOptions;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CloudStorageOptions, InspectJobConfig, JobTrigger, Schedule, StorageConfig,
    cloud_storage_options::FileSet, job_trigger, storage_config::TimespanConfig,
};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// The range of scan periods accepted by the service, in days.
pub const SCAN_PERIOD_DAYS: std::ops::RangeInclusive<i64> = 1..=60;

/// Options describing the trigger, besides its id.
#[derive(Clone, Debug, Default)]
pub struct TriggerOptions {
    pub display_name: String,
    pub description: String,
    pub scan_period_days: i64,
    pub inspect: InspectOptions,
}

pub async fn sample(
    client: &DlpService,
    parent: &str,
    trigger_id: &str,
    gcs_url: &str,
    options: &TriggerOptions,
) -> anyhow::Result<JobTrigger> {
    // Only scan objects created or modified since the last run.
    let timespan = TimespanConfig::new().set_enable_auto_population_of_timespan_config(true);
    let storage = StorageConfig::new()
        .set_cloud_storage_options(
            CloudStorageOptions::new().set_file_set(FileSet::new().set_url(gcs_url)),
        )
        .set_timespan_config(timespan);
    let job = InspectJobConfig::new()
        .set_storage_config(storage)
        .set_inspect_config(options.inspect.to_config());
    let period = recurrence_period(options.scan_period_days)?;
    let schedule = job_trigger::Trigger::new()
        .set_schedule(Schedule::new().set_recurrence_period_duration(period));
    let trigger = JobTrigger::new()
        .set_display_name(&options.display_name)
        .set_description(&options.description)
        .set_triggers([schedule])
        .set_status(job_trigger::Status::Healthy)
        .set_inspect_job(job);

    let trigger = client
        .create_job_trigger()
        .set_parent(parent)
        .set_trigger_id(trigger_id)
        .set_job_trigger(trigger)
        .send()
        .await?;
    println!("Created trigger: {}", trigger.name);
    Ok(trigger)
}

fn recurrence_period(days: i64) -> anyhow::Result<google_cloud_wkt::Duration> {
    if !SCAN_PERIOD_DAYS.contains(&days) {
        anyhow::bail!(
            "the scan period must be between {} and {} days, got {days}",
            SCAN_PERIOD_DAYS.start(),
            SCAN_PERIOD_DAYS.end()
        );
    }
    let seconds = days
        .checked_mul(SECONDS_PER_DAY)
        .ok_or_else(|| anyhow::anyhow!("scan period of {days} days is too long"))?;
    Ok(google_cloud_wkt::Duration::clamp(seconds, 0))
}
// [END dlp_create_trigger]
