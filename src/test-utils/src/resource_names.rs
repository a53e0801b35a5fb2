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

//! Helper functions and types to generate random resource ids.
//!
//! All the ids start with a letter, use only lowercase letters, digits and
//! `-`, which satisfies the id rules of every service used in the samples.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// A common prefix for resource ids.
pub const PREFIX: &str = "rust-samples-";

/// Pub/Sub topic, subscription and schema ids.
const PUBSUB_ID_LENGTH: usize = 64;

/// KMS key ring and key ids are limited to 63 characters.
const KMS_ID_LENGTH: usize = 63;

/// DLP template and trigger ids.
const DLP_ID_LENGTH: usize = 64;

/// Translation glossary ids.
const GLOSSARY_ID_LENGTH: usize = 48;

/// Talent external ids.
const TALENT_ID_LENGTH: usize = 32;

fn random_id(length: usize) -> String {
    let id = LowercaseAlphanumeric.random_string(length - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Generate a random topic, subscription or schema id.
pub fn random_pubsub_id() -> String {
    random_id(PUBSUB_ID_LENGTH)
}

/// Generate a random key ring or crypto key id.
pub fn random_kms_id() -> String {
    random_id(KMS_ID_LENGTH)
}

/// Generate a random inspect template or job trigger id.
pub fn random_dlp_id() -> String {
    random_id(DLP_ID_LENGTH)
}

/// Generate a random glossary id.
pub fn random_glossary_id() -> String {
    random_id(GLOSSARY_ID_LENGTH)
}

/// Generate a random external id for tenants and companies.
pub fn random_talent_id() -> String {
    random_id(TALENT_ID_LENGTH)
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
