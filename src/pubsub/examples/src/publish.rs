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

//! Publish messages to a topic.
//!
//! The publisher batches messages in the background. Each call to
//! `publish()` returns a future that resolves to the message id once the
//! batch containing the message is sent.

pub mod publish_messages;
pub mod publish_with_attributes;
pub mod publish_with_batch_settings;
pub mod publish_with_ordering_keys;

use futures::future::join_all;
use google_cloud_pubsub::client::Publisher;
use google_cloud_pubsub::model::Message;

/// Publishes `messages` concurrently and waits for all of them.
///
/// Returns the message ids in the same order as `messages`, or the first
/// error.
pub(crate) async fn publish_all<I>(publisher: &Publisher, messages: I) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = Message>,
{
    let pending: Vec<_> = messages
        .into_iter()
        .map(|m| publisher.publish(m))
        .collect();
    tracing::info!("waiting for {} messages", pending.len());
    let ids = join_all(pending)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    for id in &ids {
        println!("Published message {id}");
    }
    Ok(ids)
}

/// The payload of the n-th sample message.
pub(crate) fn payload(n: usize) -> String {
    format!("Message {n}")
}
