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

// [START pubsub_publish_custom_attributes]
use google_cloud_pubsub::client::Publisher;
use google_cloud_pubsub::model::Message;

/// Publishes one message with custom attributes.
pub async fn sample(
    publisher: &Publisher,
    data: &str,
    attributes: &[(String, String)],
) -> anyhow::Result<String> {
    let message = Message::new()
        .set_data(data.to_string())
        .set_attributes(attributes.iter().cloned());
    let id = publisher.publish(message).await?;

    println!("Published message {id} with {} attributes", attributes.len());
    Ok(id)
}
// [END pubsub_publish_custom_attributes]
