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

//! CRC32C checksums protect the KMS requests and responses.
//!
//! The service verifies the checksums the client sends and returns checksums
//! of the data it produced. A mismatch means the data was corrupted in
//! transit.

use anyhow::bail;

/// Computes the CRC32C checksum in the format used by the KMS messages.
pub fn crc32c(data: &[u8]) -> i64 {
    crc32c::crc32c(data) as i64
}

/// Returns an error unless `expected` is the checksum of `data`.
pub fn check(what: &str, data: &[u8], expected: Option<i64>) -> anyhow::Result<()> {
    let got = crc32c(data);
    match expected {
        Some(want) if want == got => Ok(()),
        Some(want) => bail!("{what} checksum mismatch, expected {want}, got {got}"),
        None => bail!("the response is missing the {what} checksum"),
    }
}

/// Returns an error unless the service verified a request checksum.
pub fn check_verified(what: &str, verified: bool) -> anyhow::Result<()> {
    if !verified {
        bail!("the request {what} checksum was not verified by the service");
    }
    Ok(())
}
