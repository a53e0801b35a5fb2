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

// [START pubsub_publisher_batch_settings]
use google_cloud_pubsub::client::Publisher;
use google_cloud_pubsub::model::Message;
use std::time::Duration;

/// The thresholds that trigger sending a batch. A batch is sent as soon as
/// any of them is reached.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSettings {
    pub message_count: u32,
    pub bytes: u32,
    pub delay: Duration,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            message_count: 10,
            bytes: 1024,
            delay: Duration::from_millis(100),
        }
    }
}

/// Publishes `count` messages using a publisher with custom batching.
pub async fn sample(
    topic_name: &str,
    count: usize,
    settings: &BatchSettings,
) -> anyhow::Result<Vec<String>> {
    let publisher = Publisher::builder(topic_name)
        .set_message_count_threshold(settings.message_count)
        .set_byte_threshold(settings.bytes)
        .set_delay_threshold(settings.delay)
        .build()
        .await?;

    let messages = (0..count).map(|n| Message::new().set_data(super::payload(n)));
    super::publish_all(&publisher, messages).await
}
// [END pubsub_publisher_batch_settings]
