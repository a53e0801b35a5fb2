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

// [START pubsub_publish]
use google_cloud_pubsub::client::Publisher;
use google_cloud_pubsub::model::Message;

/// Publishes `count` messages and returns their ids.
pub async fn sample(publisher: &Publisher, count: usize) -> anyhow::Result<Vec<String>> {
    let messages = (0..count).map(|n| Message::new().set_data(super::payload(n)));
    super::publish_all(publisher, messages).await
}
// [END pubsub_publish]
