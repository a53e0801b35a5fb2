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

//! Run the samples against a mocked KMS service.

use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;
use google_cloud_gax as gax;
use google_cloud_iam_v1::model::{Binding, GetIamPolicyRequest, Policy, SetIamPolicyRequest};
use google_cloud_kms_v1 as kms;
use kms::model::*;
use kms_samples::integrity::crc32c;
use pretty_assertions::assert_eq;

type Result<T> = anyhow::Result<T>;

const KEY_RING: &str = "projects/test-project/locations/global/keyRings/test-ring";
const KEY: &str = "projects/test-project/locations/global/keyRings/test-ring/cryptoKeys/test-key";
const VERSION: &str = "projects/test-project/locations/global/keyRings/test-ring/cryptoKeys/test-key/cryptoKeyVersions/1";

mockall::mock! {
    #[derive(Debug)]
    Kms {}
    impl kms::stub::KeyManagementService for Kms {
        async fn list_key_rings(&self, req: ListKeyRingsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListKeyRingsResponse>>;
        async fn create_key_ring(&self, req: CreateKeyRingRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<KeyRing>>;
        async fn create_crypto_key(&self, req: CreateCryptoKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<CryptoKey>>;
        async fn update_crypto_key(&self, req: UpdateCryptoKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<CryptoKey>>;
        async fn update_crypto_key_primary_version(&self, req: UpdateCryptoKeyPrimaryVersionRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<CryptoKey>>;
        async fn update_crypto_key_version(&self, req: UpdateCryptoKeyVersionRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<CryptoKeyVersion>>;
        async fn get_public_key(&self, req: GetPublicKeyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<PublicKey>>;
        async fn encrypt(&self, req: EncryptRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<EncryptResponse>>;
        async fn decrypt(&self, req: DecryptRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<DecryptResponse>>;
        async fn asymmetric_sign(&self, req: AsymmetricSignRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<AsymmetricSignResponse>>;
        async fn mac_verify(&self, req: MacVerifyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<MacVerifyResponse>>;
        async fn get_iam_policy(&self, req: GetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Policy>>;
        async fn set_iam_policy(&self, req: SetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Policy>>;
    }
}

#[tokio::test]
async fn create_key_ring_is_not_idempotent() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_create_key_ring()
        .withf(|r, _| {
            r.parent == "projects/test-project/locations/global" && r.key_ring_id == "test-ring"
        })
        .return_once(|_, _| {
            let status = Status::default()
                .set_code(Code::AlreadyExists)
                .set_message("key ring exists");
            Err(Error::service(status))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::key_rings::create_key_ring::sample(
        &client,
        "test-project",
        "global",
        "test-ring",
    )
    .await;
    let err = got.unwrap_err();
    let source = err.downcast_ref::<Error>();
    assert!(
        source.is_some_and(samples_common::is_already_exists),
        "{err:?}"
    );
    Ok(())
}

#[tokio::test]
async fn list_key_rings_all_pages() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockKms::new();
    mock.expect_list_key_rings()
        .withf(|r, _| r.page_token.is_empty())
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListKeyRingsResponse::new()
                    .set_key_rings([KeyRing::new().set_name("r1")])
                    .set_next_page_token("next"),
            ))
        });
    mock.expect_list_key_rings()
        .withf(|r, _| r.page_token == "next")
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListKeyRingsResponse::new().set_key_rings([KeyRing::new().set_name("r2")]),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::key_rings::list_key_rings::sample(&client, "test-project", "global")
        .await?;
    let names: Vec<_> = got.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["r1", "r2"]);
    Ok(())
}

#[tokio::test]
async fn create_key_rotation_schedule() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_create_crypto_key()
        .withf(|r, _| {
            let Some(key) = r.crypto_key.as_ref() else {
                return false;
            };
            r.parent == KEY_RING
                && r.crypto_key_id == "rotating"
                && key.purpose == crypto_key::CryptoKeyPurpose::EncryptDecrypt
                && key.rotation_period().map(|d| d.seconds()) == Some(30 * 24 * 60 * 60)
                && key.next_rotation_time.is_some()
        })
        .return_once(|r, _| {
            Ok(Response::from(
                CryptoKey::new().set_name(format!("{}/cryptoKeys/{}", r.parent, r.crypto_key_id)),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got =
        kms_samples::keys::create_key_rotation_schedule::sample(&client, KEY_RING, "rotating")
            .await?;
    assert_eq!(got.name, format!("{KEY_RING}/cryptoKeys/rotating"));
    Ok(())
}

#[tokio::test]
async fn create_key_asymmetric_sign() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_create_crypto_key()
        .withf(|r, _| {
            r.crypto_key.as_ref().is_some_and(|k| {
                k.purpose == crypto_key::CryptoKeyPurpose::AsymmetricSign
                    && k.version_template.as_ref().map(|t| &t.algorithm)
                        == Some(&crypto_key_version::CryptoKeyVersionAlgorithm::EcSignP256Sha256)
            })
        })
        .return_once(|_, _| Ok(Response::from(CryptoKey::new().set_name(KEY))));
    let client = kms::client::KeyManagementService::from_stub(mock);

    kms_samples::keys::create_key_asymmetric_sign::sample(&client, KEY_RING, "test-key").await?;
    Ok(())
}

#[tokio::test]
async fn create_key_hsm() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_create_crypto_key()
        .withf(|r, _| {
            r.parent == KEY_RING
                && r.crypto_key_id == "hsm-key"
                && r.crypto_key.as_ref().is_some_and(|k| {
                    k.purpose == crypto_key::CryptoKeyPurpose::EncryptDecrypt
                        && k.version_template.as_ref().is_some_and(|t| {
                            t.protection_level == ProtectionLevel::Hsm
                                && t.algorithm
                                    == crypto_key_version::CryptoKeyVersionAlgorithm::GoogleSymmetricEncryption
                        })
                })
        })
        .return_once(|r, _| {
            Ok(Response::from(
                CryptoKey::new().set_name(format!("{}/cryptoKeys/{}", r.parent, r.crypto_key_id)),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::keys::create_key_hsm::sample(&client, KEY_RING, "hsm-key").await?;
    assert_eq!(got.name, format!("{KEY_RING}/cryptoKeys/hsm-key"));
    Ok(())
}

#[tokio::test]
async fn update_key_set_primary() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_update_crypto_key_primary_version()
        .withf(|r, _| r.name == KEY && r.crypto_key_version_id == "2")
        .return_once(|r, _| {
            let primary = CryptoKeyVersion::new()
                .set_name(format!("{}/cryptoKeyVersions/{}", r.name, r.crypto_key_version_id));
            Ok(Response::from(CryptoKey::new().set_name(r.name).set_primary(primary)))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::keys::update_key_set_primary::sample(&client, KEY, "2").await?;
    let primary = got.primary.as_ref().map(|v| v.name.as_str());
    assert_eq!(primary, Some(format!("{KEY}/cryptoKeyVersions/2").as_str()));
    Ok(())
}

#[tokio::test]
async fn update_key_set_primary_not_found() {
    let mut mock = MockKms::new();
    mock.expect_update_crypto_key_primary_version()
        .return_once(|_, _| {
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("version not found");
            Err(Error::service(status))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::keys::update_key_set_primary::sample(&client, KEY, "99").await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn remove_rotation_schedule() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_update_crypto_key()
        .withf(|r, _| {
            let paths = r.update_mask.as_ref().map(|m| m.paths.clone());
            let key = r.crypto_key.as_ref();
            paths
                == Some(vec![
                    "rotation_period".to_string(),
                    "next_rotation_time".to_string(),
                ])
                && key.is_some_and(|k| {
                    k.name == KEY && k.rotation_period().is_none() && k.next_rotation_time.is_none()
                })
        })
        .return_once(|_, _| Ok(Response::from(CryptoKey::new().set_name(KEY))));
    let client = kms::client::KeyManagementService::from_stub(mock);

    kms_samples::keys::update_key_remove_rotation::sample(&client, KEY).await?;
    Ok(())
}

#[tokio::test]
async fn disable_key_version() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_update_crypto_key_version()
        .withf(|r, _| {
            r.update_mask.as_ref().map(|m| m.paths.clone()) == Some(vec!["state".to_string()])
                && r.crypto_key_version.as_ref().is_some_and(|v| {
                    v.name == VERSION
                        && v.state == crypto_key_version::CryptoKeyVersionState::Disabled
                })
        })
        .return_once(|r, _| Ok(Response::from(r.crypto_key_version.unwrap_or_default())));
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::versions::disable_key_version::sample(&client, VERSION).await?;
    assert_eq!(
        got.state,
        crypto_key_version::CryptoKeyVersionState::Disabled
    );
    Ok(())
}

#[tokio::test]
async fn encrypt_symmetric_checksums() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_encrypt()
        .withf(|r, _| r.name == KEY && r.plaintext_crc32c == Some(crc32c(b"Sample message")))
        .return_once(|_, _| {
            Ok(Response::from(
                EncryptResponse::new()
                    .set_name(VERSION)
                    .set_ciphertext(b"ciphertext".to_vec())
                    .set_ciphertext_crc32c(crc32c(b"ciphertext"))
                    .set_verified_plaintext_crc32c(true),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::encrypt_symmetric::sample(&client, KEY, b"Sample message")
        .await?;
    assert_eq!(&got.ciphertext[..], b"ciphertext");
    Ok(())
}

#[tokio::test]
async fn encrypt_symmetric_unverified() {
    let mut mock = MockKms::new();
    mock.expect_encrypt().return_once(|_, _| {
        Ok(Response::from(
            EncryptResponse::new()
                .set_ciphertext(b"ciphertext".to_vec())
                .set_ciphertext_crc32c(crc32c(b"ciphertext")),
        ))
    });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got =
        kms_samples::crypto::encrypt_symmetric::sample(&client, KEY, b"Sample message").await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn decrypt_symmetric_corrupted() {
    let mut mock = MockKms::new();
    mock.expect_decrypt()
        .withf(|r, _| r.ciphertext_crc32c == Some(crc32c(b"ciphertext")))
        .return_once(|_, _| {
            Ok(Response::from(
                DecryptResponse::new()
                    .set_plaintext(b"Sample message".to_vec())
                    .set_plaintext_crc32c(crc32c(b"something else")),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::decrypt_symmetric::sample(&client, KEY, b"ciphertext").await;
    let err = got.unwrap_err();
    assert!(err.to_string().contains("checksum mismatch"), "{err:?}");
}

#[tokio::test]
async fn sign_asymmetric_sends_digest() -> Result<()> {
    use sha2::Digest as _;
    let digest = sha2::Sha256::digest(b"Sample message").to_vec();
    let want = digest.clone();

    let mut mock = MockKms::new();
    mock.expect_asymmetric_sign()
        .withf(move |r, _| {
            r.digest
                .as_ref()
                .and_then(|d| d.sha256())
                .is_some_and(|d| d[..] == want[..])
                && r.digest_crc32c == Some(crc32c(&want))
        })
        .return_once(|_, _| {
            Ok(Response::from(
                AsymmetricSignResponse::new()
                    .set_signature(b"signature".to_vec())
                    .set_signature_crc32c(crc32c(b"signature"))
                    .set_verified_digest_crc32c(true),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::sign_asymmetric::sample(&client, VERSION, b"Sample message")
        .await?;
    assert_eq!(&got[..], b"signature");
    Ok(())
}

fn ec_public_key(pem: String) -> PublicKey {
    let crc = crc32c(pem.as_bytes());
    PublicKey::new()
        .set_pem(pem)
        .set_pem_crc32c(crc)
        .set_algorithm(crypto_key_version::CryptoKeyVersionAlgorithm::EcSignP256Sha256)
}

#[tokio::test]
async fn verify_asymmetric_ec() -> Result<()> {
    use p256::ecdsa::signature::Signer as _;
    use p256::ecdsa::{Signature, SigningKey};
    use p256::pkcs8::{EncodePublicKey as _, LineEnding};

    let signing = SigningKey::from_slice(&[42_u8; 32])?;
    let pem = signing.verifying_key().to_public_key_pem(LineEnding::LF)?;
    let signature: Signature = signing.sign(b"Sample message");
    let signature = signature.to_der();

    let mut mock = MockKms::new();
    mock.expect_get_public_key()
        .withf(|r, _| r.name == VERSION)
        .times(2)
        .returning(move |_, _| Ok(Response::from(ec_public_key(pem.clone()))));
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::verify_asymmetric_ec::sample(
        &client,
        VERSION,
        b"Sample message",
        signature.as_bytes(),
    )
    .await?;
    assert!(got);
    let got = kms_samples::crypto::verify_asymmetric_ec::sample(
        &client,
        VERSION,
        b"Tampered message",
        signature.as_bytes(),
    )
    .await?;
    assert!(!got);
    Ok(())
}

#[tokio::test]
async fn verify_asymmetric_rsa() -> Result<()> {
    use rsa::pkcs8::{EncodePublicKey as _, LineEnding};
    use rsa::signature::{RandomizedSigner as _, SignatureEncoding as _};

    let private = rsa::RsaPrivateKey::new(&mut rsa::rand_core::OsRng, 1024)?;
    let pem = private.to_public_key().to_public_key_pem(LineEnding::LF)?;
    let signing = rsa::pss::BlindedSigningKey::<sha2::Sha256>::new(private);
    let signature = signing
        .sign_with_rng(&mut rsa::rand_core::OsRng, b"Sample message")
        .to_vec();

    let mut mock = MockKms::new();
    mock.expect_get_public_key()
        .withf(|r, _| r.name == VERSION)
        .times(2)
        .returning(move |_, _| {
            let crc = crc32c(pem.as_bytes());
            Ok(Response::from(
                PublicKey::new()
                    .set_pem(pem.clone())
                    .set_pem_crc32c(crc)
                    .set_algorithm(crypto_key_version::CryptoKeyVersionAlgorithm::RsaSignPss2048Sha256),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::verify_asymmetric_rsa::sample(
        &client,
        VERSION,
        b"Sample message",
        &signature,
    )
    .await?;
    assert!(got);
    let got = kms_samples::crypto::verify_asymmetric_rsa::sample(
        &client,
        VERSION,
        b"Tampered message",
        &signature,
    )
    .await?;
    assert!(!got);
    Ok(())
}

#[tokio::test]
async fn public_key_corrupted() {
    let mut mock = MockKms::new();
    mock.expect_get_public_key().return_once(|_, _| {
        Ok(Response::from(
            PublicKey::new()
                .set_pem("-----BEGIN PUBLIC KEY-----")
                .set_pem_crc32c(0),
        ))
    });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::versions::get_public_key::sample(&client, VERSION).await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn verify_mac_integrity() {
    let mut mock = MockKms::new();
    mock.expect_mac_verify().return_once(|_, _| {
        Ok(Response::from(
            MacVerifyResponse::new()
                .set_success(true)
                .set_verified_data_crc32c(true)
                .set_verified_mac_crc32c(true)
                .set_verified_success_integrity(false),
        ))
    });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::verify_mac::sample(&client, VERSION, b"data", b"mac").await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn verify_mac() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_mac_verify()
        .withf(|r, _| {
            r.data_crc32c == Some(crc32c(b"data")) && r.mac_crc32c == Some(crc32c(b"mac"))
        })
        .return_once(|_, _| {
            Ok(Response::from(
                MacVerifyResponse::new()
                    .set_success(true)
                    .set_verified_data_crc32c(true)
                    .set_verified_mac_crc32c(true)
                    .set_verified_success_integrity(true),
            ))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::crypto::verify_mac::sample(&client, VERSION, b"data", b"mac").await?;
    assert!(got);
    Ok(())
}

#[tokio::test]
async fn iam_add_member() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_get_iam_policy()
        .withf(|r, _| r.resource == KEY)
        .return_once(|_, _| {
            Ok(Response::from(Policy::new().set_etag(b"etag-1".to_vec()).set_bindings([
                Binding::new()
                    .set_role("roles/viewer")
                    .set_members(["user:viewer@example.com"]),
            ])))
        });
    mock.expect_set_iam_policy()
        .withf(|r, _| {
            r.policy.as_ref().is_some_and(|p| {
                p.etag[..] == b"etag-1"[..]
                    && p.bindings.iter().any(|b| {
                        b.role == kms_samples::iam::ENCRYPTER_DECRYPTER_ROLE
                            && b.members == vec!["user:test@example.com".to_string()]
                    })
            })
        })
        .return_once(|r, _| Ok(Response::from(r.policy.unwrap_or_default())));
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::iam::add_member::sample(&client, KEY, "user:test@example.com").await?;
    assert_eq!(got.bindings.len(), 2);
    Ok(())
}

#[tokio::test]
async fn iam_get_policy() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_get_iam_policy()
        .withf(|r, _| r.resource == KEY)
        .return_once(|_, _| {
            Ok(Response::from(Policy::new().set_bindings([
                Binding::new()
                    .set_role(kms_samples::iam::ENCRYPTER_DECRYPTER_ROLE)
                    .set_members(["user:test@example.com", "group:team@example.com"]),
            ])))
        });
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got = kms_samples::iam::get_policy::sample(&client, KEY).await?;
    let members: Vec<_> = got
        .bindings
        .iter()
        .flat_map(|b| b.members.iter().map(String::as_str))
        .collect();
    assert_eq!(members, vec!["user:test@example.com", "group:team@example.com"]);
    Ok(())
}

#[tokio::test]
async fn iam_remove_missing_member() -> Result<()> {
    let mut mock = MockKms::new();
    mock.expect_get_iam_policy()
        .return_once(|_, _| Ok(Response::from(Policy::new())));
    mock.expect_set_iam_policy().never();
    let client = kms::client::KeyManagementService::from_stub(mock);

    let got =
        kms_samples::iam::remove_member::sample(&client, KEY, "user:test@example.com").await?;
    assert!(got.bindings.is_empty(), "{got:?}");
    Ok(())
}
