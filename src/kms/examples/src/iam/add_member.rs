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

// [START kms_iam_add_member]
use google_cloud_iam_v1::model::Policy;
use google_cloud_kms_v1::client::KeyManagementService;

/// Grants `member` the encrypter/decrypter role on `resource`.
///
/// Members look like `user:alice@example.com` or `group:team@example.com`.
pub async fn sample(
    client: &KeyManagementService,
    resource: &str,
    member: &str,
) -> anyhow::Result<Policy> {
    let mut policy = client.get_iam_policy().set_resource(resource).send().await?;
    if !super::add_binding(&mut policy, super::ENCRYPTER_DECRYPTER_ROLE, member) {
        println!("{member} already has {}", super::ENCRYPTER_DECRYPTER_ROLE);
        return Ok(policy);
    }
    // The etag in the policy rejects concurrent modifications.
    let policy = client
        .set_iam_policy()
        .set_resource(resource)
        .set_policy(policy)
        .send()
        .await?;
    super::print_policy(&policy);
    Ok(policy)
}
// [END kms_iam_add_member]
