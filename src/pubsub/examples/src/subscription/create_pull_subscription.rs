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

// [START pubsub_create_pull_subscription]
use google_cloud_pubsub::{client::SubscriptionAdmin, model::Subscription};

/// Creates a pull subscription, an existing subscription is not an error.
///
/// Returns `None` if the subscription already existed.
pub async fn sample(
    client: &SubscriptionAdmin,
    topic_name: &str,
    subscription_name: &str,
) -> anyhow::Result<Option<Subscription>> {
    let result = client
        .create_subscription()
        .set_name(subscription_name)
        .set_topic(topic_name)
        .send()
        .await;
    let Some(subscription) = samples_common::ignore_already_exists(result, subscription_name)?
    else {
        return Ok(None);
    };

    println!("Subscription {} created", subscription.name);
    Ok(Some(subscription))
}
// [END pubsub_create_pull_subscription]
