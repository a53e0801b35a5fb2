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

// [START job_search_list_tenants]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_talent_v4::client::TenantService;
use google_cloud_talent_v4::model::Tenant;

pub async fn sample(client: &TenantService, project_name: &str) -> anyhow::Result<Vec<Tenant>> {
    let mut tenants = client.list_tenants().set_parent(project_name).by_item();

    let mut result = Vec::new();
    while let Some(tenant) = tenants.next().await.transpose()? {
        println!("Tenant {} ({})", tenant.name, tenant.external_id);
        result.push(tenant);
    }
    Ok(result)
}
// [END job_search_list_tenants]
