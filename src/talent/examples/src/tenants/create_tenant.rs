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

// [START job_search_create_tenant]
use google_cloud_talent_v4::client::TenantService;
use google_cloud_talent_v4::model::Tenant;

/// Creates a tenant identified by `external_id`.
pub async fn sample(
    client: &TenantService,
    project_name: &str,
    external_id: &str,
) -> anyhow::Result<Tenant> {
    let tenant = client
        .create_tenant()
        .set_parent(project_name)
        .set_tenant(Tenant::new().set_external_id(external_id))
        .send()
        .await?;

    println!("Created tenant {} ({})", tenant.name, tenant.external_id);
    Ok(tenant)
}
// [END job_search_create_tenant]
