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

// [START kms_sign_mac]
use crate::integrity;
use google_cloud_kms_v1::client::KeyManagementService;

pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
    data: &[u8],
) -> anyhow::Result<bytes::Bytes> {
    let response = client
        .mac_sign()
        .set_name(version_name)
        .set_data(data.to_vec())
        .set_data_crc32c(integrity::crc32c(data))
        .send()
        .await?;
    integrity::check_verified("data", response.verified_data_crc32c)?;
    integrity::check("MAC", &response.mac, response.mac_crc32c)?;

    println!("Signature: {}", super::to_base64(&response.mac));
    Ok(response.mac)
}
// [END kms_sign_mac]
