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

//! Create, inspect, update and delete companies.

pub mod create_company;
pub mod delete_company;
pub mod get_company;
pub mod list_companies;
pub mod update_company;

use google_cloud_talent_v4::model::Company;

pub(crate) fn print_company(company: &Company) {
    println!("Company {}", company.name);
    println!("  display name: {}", company.display_name);
    println!("  external id: {}", company.external_id);
    if !company.headquarters_address.is_empty() {
        println!("  headquarters: {}", company.headquarters_address);
    }
    if !company.career_site_uri.is_empty() {
        println!("  career site: {}", company.career_site_uri);
    }
}
