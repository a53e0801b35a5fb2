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

// [START job_search_update_company]
use anyhow::bail;
use google_cloud_talent_v4::client::CompanyService;
use google_cloud_talent_v4::model::Company;
use google_cloud_wkt::FieldMask;

/// The company fields to change, `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyChanges {
    pub display_name: Option<String>,
    pub career_site_uri: Option<String>,
    pub headquarters_address: Option<String>,
}

impl CompanyChanges {
    /// The update mask with one path per changed field.
    pub fn paths(&self) -> Vec<&'static str> {
        [
            ("display_name", self.display_name.is_some()),
            ("career_site_uri", self.career_site_uri.is_some()),
            ("headquarters_address", self.headquarters_address.is_some()),
        ]
        .into_iter()
        .filter_map(|(path, changed)| changed.then_some(path))
        .collect()
    }

    fn apply(&self, mut company: Company) -> Company {
        if let Some(v) = &self.display_name {
            company.display_name = v.clone();
        }
        if let Some(v) = &self.career_site_uri {
            company.career_site_uri = v.clone();
        }
        if let Some(v) = &self.headquarters_address {
            company.headquarters_address = v.clone();
        }
        company
    }
}

/// Updates the fields in `changes`, leaving all others unchanged.
pub async fn sample(
    client: &CompanyService,
    company_name: &str,
    changes: &CompanyChanges,
) -> anyhow::Result<Company> {
    let paths = changes.paths();
    if paths.is_empty() {
        bail!("no company fields to update");
    }
    let company = changes.apply(Company::new().set_name(company_name));
    let company = client
        .update_company()
        .set_company(company)
        .set_update_mask(FieldMask::default().set_paths(paths))
        .send()
        .await?;

    super::print_company(&company);
    Ok(company)
}
// [END job_search_update_company]
