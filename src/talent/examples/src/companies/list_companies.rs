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

// [START job_search_list_companies]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_talent_v4::client::CompanyService;
use google_cloud_talent_v4::model::Company;

pub async fn sample(client: &CompanyService, tenant_name: &str) -> anyhow::Result<Vec<Company>> {
    let mut companies = client.list_companies().set_parent(tenant_name).by_item();

    let mut result = Vec::new();
    while let Some(company) = companies.next().await.transpose()? {
        println!("{} ({})", company.name, company.display_name);
        result.push(company);
    }
    Ok(result)
}
// [END job_search_list_companies]
