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

// [START pubsub_create_topic]
use google_cloud_pubsub::{client::TopicAdmin, model::Topic};

/// Creates a topic, an existing topic with the same name is not an error.
///
/// Returns `None` if the topic already existed.
pub async fn sample(client: &TopicAdmin, topic_name: &str) -> anyhow::Result<Option<Topic>> {
    let result = client.create_topic().set_name(topic_name).send().await;
    let Some(topic) = samples_common::ignore_already_exists(result, topic_name)? else {
        return Ok(None);
    };

    println!("Topic {} created", topic.name);
    Ok(Some(topic))
}
// [END pubsub_create_topic]
