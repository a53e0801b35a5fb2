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

// [START pubsub_dead_letter_create_subscription]
use google_cloud_pubsub::client::SubscriptionAdmin;
use google_cloud_pubsub::model::{DeadLetterPolicy, Subscription};

/// Creates a subscription that forwards undeliverable messages to
/// `dead_letter_topic_name` after `max_delivery_attempts`.
pub async fn sample(
    client: &SubscriptionAdmin,
    topic_name: &str,
    subscription_name: &str,
    dead_letter_topic_name: &str,
    max_delivery_attempts: i32,
) -> anyhow::Result<Subscription> {
    let policy = DeadLetterPolicy::new()
        .set_dead_letter_topic(dead_letter_topic_name)
        .set_max_delivery_attempts(max_delivery_attempts);
    let subscription = client
        .create_subscription()
        .set_name(subscription_name)
        .set_topic(topic_name)
        .set_dead_letter_policy(policy)
        .send()
        .await?;

    println!(
        "Subscription {} created, dead letter topic {dead_letter_topic_name}",
        subscription.name
    );
    Ok(subscription)
}
// [END pubsub_dead_letter_create_subscription]
