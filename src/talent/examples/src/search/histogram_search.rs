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

// [START job_search_histogram_search]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{HistogramQuery, HistogramQueryResult};

/// The default histogram, jobs bucketed by base compensation.
pub const DEFAULT_HISTOGRAM_QUERY: &str = "count(base_compensation, [bucket(12, 20)])";

/// Searches for jobs and returns the histogram of the results.
pub async fn sample(
    client: &JobService,
    tenant_name: &str,
    histogram_query: &str,
) -> anyhow::Result<Vec<HistogramQueryResult>> {
    let response = client
        .search_jobs()
        .set_parent(tenant_name)
        .set_request_metadata(super::request_metadata())
        .set_histogram_queries([HistogramQuery::new().set_histogram_query(histogram_query)])
        .send()
        .await?;

    let results = response.histogram_query_results.clone();
    super::matching_jobs(response);
    for result in &results {
        println!("Histogram {}", result.histogram_query);
        let mut buckets: Vec<_> = result.histogram.iter().collect();
        buckets.sort();
        for (bucket, count) in buckets {
            println!("  {bucket}: {count}");
        }
    }
    Ok(results)
}
// [END job_search_histogram_search]
