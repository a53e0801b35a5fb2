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

// [START pubsub_list_subscriptions]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_pubsub::{client::SubscriptionAdmin, model::Subscription};

pub async fn sample(
    client: &SubscriptionAdmin,
    project_name: &str,
) -> anyhow::Result<Vec<Subscription>> {
    let mut subscriptions = client
        .list_subscriptions()
        .set_project(project_name)
        .by_item();

    let mut result = Vec::new();
    while let Some(subscription) = subscriptions.next().await.transpose()? {
        println!("{} ({})", subscription.name, subscription.topic);
        result.push(subscription);
    }
    Ok(result)
}
// [END pubsub_list_subscriptions]
