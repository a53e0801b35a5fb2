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

//! Create, inspect and delete schemas.

pub mod create_avro_schema;
pub mod create_proto_schema;
pub mod delete_schema;
pub mod get_schema;
pub mod list_schemas;

use anyhow::Context as _;
use google_cloud_pubsub::client::SchemaService;
use google_cloud_pubsub::model::{Schema, schema::Type};
use std::path::Path;

/// Creates a schema from the definition in `path`.
///
/// An existing schema with the same id is not an error, the function
/// returns `None` in that case.
pub(crate) async fn create(
    client: &SchemaService,
    project_name: &str,
    schema_id: &str,
    schema_type: Type,
    path: &Path,
) -> anyhow::Result<Option<Schema>> {
    let definition = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read schema definition from {}", path.display()))?;
    let schema = Schema::new()
        .set_type(schema_type)
        .set_definition(definition);
    let result = client
        .create_schema()
        .set_parent(project_name)
        .set_schema_id(schema_id)
        .set_schema(schema)
        .send()
        .await;
    let Some(schema) = samples_common::ignore_already_exists(result, schema_id)? else {
        return Ok(None);
    };

    println!("Schema {} created", schema.name);
    Ok(Some(schema))
}
