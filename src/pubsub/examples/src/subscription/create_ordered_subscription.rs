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

// [START pubsub_enable_subscription_ordering]
use google_cloud_pubsub::{client::SubscriptionAdmin, model::Subscription};

/// Creates a subscription that delivers messages with the same ordering key
/// in the order they were published.
pub async fn sample(
    client: &SubscriptionAdmin,
    topic_name: &str,
    subscription_name: &str,
) -> anyhow::Result<Subscription> {
    let subscription = client
        .create_subscription()
        .set_name(subscription_name)
        .set_topic(topic_name)
        .set_enable_message_ordering(true)
        .send()
        .await?;

    println!("Ordered subscription {} created", subscription.name);
    Ok(subscription)
}
// [END pubsub_enable_subscription_ordering]
