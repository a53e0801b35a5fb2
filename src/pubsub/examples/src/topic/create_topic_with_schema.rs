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

// [START pubsub_create_topic_with_schema]
use google_cloud_pubsub::client::TopicAdmin;
use google_cloud_pubsub::model::{Encoding, SchemaSettings, Topic};

/// Creates a topic that validates messages against `schema_name`.
pub async fn sample(
    client: &TopicAdmin,
    topic_name: &str,
    schema_name: &str,
    encoding: Encoding,
) -> anyhow::Result<Topic> {
    let settings = SchemaSettings::new()
        .set_schema(schema_name)
        .set_encoding(encoding);
    let topic = client
        .create_topic()
        .set_name(topic_name)
        .set_schema_settings(settings)
        .send()
        .await?;

    println!("Topic {} created with schema {schema_name}", topic.name);
    Ok(topic)
}
// [END pubsub_create_topic_with_schema]
