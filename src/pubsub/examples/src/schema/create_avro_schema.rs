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

// [START pubsub_create_avro_schema]
use google_cloud_pubsub::client::SchemaService;
use google_cloud_pubsub::model::{Schema, schema::Type};
use std::path::Path;

/// Creates an Avro schema from an `.avsc` file.
pub async fn sample(
    client: &SchemaService,
    project_name: &str,
    schema_id: &str,
    path: &Path,
) -> anyhow::Result<Option<Schema>> {
    super::create(client, project_name, schema_id, Type::Avro, path).await
}
// [END pubsub_create_avro_schema]
