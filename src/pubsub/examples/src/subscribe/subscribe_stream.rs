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

// [START pubsub_subscriber_stream]
use google_cloud_pubsub::client::Subscriber;
use std::time::Duration;

/// Same as [super::subscribe_messages], consuming the session as a stream.
pub async fn sample(
    client: &Subscriber,
    subscription_name: &str,
    duration: Duration,
) -> anyhow::Result<usize> {
    let session = client.subscribe(subscription_name).build();
    println!("Listening for messages on {subscription_name} for {duration:?}");

    let count = samples_common::wait::run_for(duration, |token| {
        super::drain_until(session.into_stream(), token, |(message, handler)| {
            super::print_message(&message);
            handler.ack();
        })
    })
    .await?;

    println!("Received {count} messages");
    Ok(count)
}
// [END pubsub_subscriber_stream]
