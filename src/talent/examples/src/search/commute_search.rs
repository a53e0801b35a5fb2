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

// [START job_search_commute_search]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{
    CommuteFilter, CommuteMethod, JobQuery, search_jobs_response::MatchingJob,
};
use google_cloud_type::model::LatLng;
use std::time::Duration;

/// Where the commute starts and how long it may take.
#[derive(Clone, Debug, PartialEq)]
pub struct Commute {
    pub latitude: f64,
    pub longitude: f64,
    pub travel_time: Duration,
}

impl Default for Commute {
    fn default() -> Self {
        Self {
            latitude: 37.422408,
            longitude: -122.084068,
            travel_time: Duration::from_secs(30 * 60),
        }
    }
}

/// Searches for jobs within a public transit commute.
pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    commute: &Commute,
) -> anyhow::Result<Vec<MatchingJob>> {
    let seconds = i64::try_from(commute.travel_time.as_secs()).unwrap_or(i64::MAX);
    let travel_duration = google_cloud_wkt::Duration::clamp(seconds, 0);
    let filter = CommuteFilter::new()
        .set_commute_method(CommuteMethod::Transit)
        .set_travel_duration(travel_duration)
        .set_start_coordinates(
            LatLng::new()
                .set_latitude(commute.latitude)
                .set_longitude(commute.longitude),
        );
    let response = client
        .search_jobs()
        .set_parent(tenant_name)
        .set_request_metadata(super::request_metadata())
        .set_job_query(JobQuery::new().set_commute_filter(filter))
        .send()
        .await?;

    let matches = super::matching_jobs(response);
    for info in matches.iter().filter_map(|m| m.commute_info.as_ref()) {
        let seconds = info.travel_duration.as_ref().map(|d| d.seconds());
        println!("Commute time in seconds: {seconds:?}");
    }
    Ok(matches)
}
// [END job_search_commute_search]
