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

//! Cryptographic operations performed locally with a KMS public key.
//!
//! Public keys are fetched with `GetPublicKey` in PEM format.

use anyhow::Context;
use p256::pkcs8::DecodePublicKey as _;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::RsaPublicKey;
use sha2::Sha256;

/// Verifies a DER-encoded ECDSA P-256 signature over the SHA-256 digest of
/// `message`.
pub fn verify_ec_p256(pem: &str, message: &[u8], signature: &[u8]) -> anyhow::Result<bool> {
    use p256::ecdsa::signature::Verifier as _;
    use p256::ecdsa::{Signature, VerifyingKey};

    let key = VerifyingKey::from_public_key_pem(pem).context("parsing EC public key")?;
    let signature = Signature::from_der(signature).context("parsing DER signature")?;
    Ok(key.verify(message, &signature).is_ok())
}

/// Verifies an RSA-PSS signature using SHA-256.
pub fn verify_rsa_pss_sha256(pem: &str, message: &[u8], signature: &[u8]) -> anyhow::Result<bool> {
    use rsa::pss::{Signature, VerifyingKey};
    use rsa::signature::Verifier as _;

    let key = RsaPublicKey::from_public_key_pem(pem).context("parsing RSA public key")?;
    let key = VerifyingKey::<Sha256>::new(key);
    let signature = Signature::try_from(signature).context("parsing RSA signature")?;
    Ok(key.verify(message, &signature).is_ok())
}

/// Encrypts `plaintext` with RSA-OAEP using SHA-256.
pub fn encrypt_rsa_oaep_sha256(pem: &str, plaintext: &[u8]) -> anyhow::Result<Vec<u8>> {
    let key = RsaPublicKey::from_public_key_pem(pem).context("parsing RSA public key")?;
    let ciphertext = key
        .encrypt(&mut rsa::rand_core::OsRng, rsa::Oaep::new::<Sha256>(), plaintext)
        .context("encrypting with RSA-OAEP")?;
    Ok(ciphertext)
}
