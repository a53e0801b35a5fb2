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

// [START pubsub_list_schemas]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_pubsub::{client::SchemaService, model::Schema};

pub async fn sample(client: &SchemaService, project_name: &str) -> anyhow::Result<Vec<Schema>> {
    let mut schemas = client.list_schemas().set_parent(project_name).by_item();

    let mut result = Vec::new();
    while let Some(schema) = schemas.next().await.transpose()? {
        println!("{}", schema.name);
        result.push(schema);
    }
    Ok(result)
}
// [END pubsub_list_schemas]
