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

// [START pubsub_get_schema]
use google_cloud_pubsub::{client::SchemaService, model::Schema};

pub async fn sample(client: &SchemaService, schema_name: &str) -> anyhow::Result<Schema> {
    let schema = client.get_schema().set_name(schema_name).send().await?;
    println!("{} ({:?}):\n{}", schema.name, schema.r#type, schema.definition);
    Ok(schema)
}
// [END pubsub_get_schema]
