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

// [START dlp_list_triggers]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::JobTrigger;

pub async fn sample(client: &DlpService, parent: &str) -> anyhow::Result<Vec<JobTrigger>> {
    let mut items = client.list_job_triggers().set_parent(parent).by_item();
    let mut triggers = Vec::new();
    while let Some(trigger) = items.next().await.transpose()? {
        println!("Trigger {} status: {:?}", trigger.name, trigger.status);
        if !trigger.display_name.is_empty() {
            println!("\tDisplay name: {}", trigger.display_name);
        }
        triggers.push(trigger);
    }
    Ok(triggers)
}
// [END dlp_list_triggers]
