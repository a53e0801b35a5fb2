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

// [START pubsub_subscriber_async_pull]
use google_cloud_pubsub::client::Subscriber;
use std::time::Duration;

/// Receives and acknowledges messages until `duration` elapses.
///
/// Returns the number of messages received.
pub async fn sample(
    client: &Subscriber,
    subscription_name: &str,
    duration: Duration,
) -> anyhow::Result<usize> {
    let mut session = client.subscribe(subscription_name).build();
    println!("Listening for messages on {subscription_name} for {duration:?}");

    let count = samples_common::wait::run_for(duration, |token| async move {
        let mut count = 0_usize;
        loop {
            let item = tokio::select! {
                _ = token.cancelled() => break,
                item = session.next() => item,
            };
            let Some(item) = item else {
                break;
            };
            let (message, handler) = item?;
            super::print_message(&message);
            handler.ack();
            count += 1;
        }
        anyhow::Ok(count)
    })
    .await?;

    println!("Received {count} messages");
    Ok(count)
}
// [END pubsub_subscriber_async_pull]
