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

//! The `kms` command line.

use crate::crypto::from_base64;
use clap::{Parser, Subcommand};
use google_cloud_kms_v1::client::KeyManagementService;

/// Cloud Key Management Service samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The project that owns the key rings.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    #[arg(long, default_value = "global")]
    pub location: String,

    /// The key ring used by the key and version commands.
    #[arg(long, env = "KMS_KEY_RING_ID", default_value = "")]
    pub key_ring: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create a key ring. Fails if the key ring exists.
    CreateKeyRing { key_ring_id: String },
    /// List the key rings in the location.
    ListKeyRings,
    /// Create a symmetric encryption key.
    CreateKeySymmetricEncryptDecrypt { key_id: String },
    /// Create an EC P-256 signing key.
    CreateKeyAsymmetricSign { key_id: String },
    /// Create an RSA decryption key.
    CreateKeyAsymmetricDecrypt { key_id: String },
    /// Create a symmetric key protected by an HSM.
    CreateKeyHsm { key_id: String },
    /// Create an HMAC SHA-256 key.
    CreateKeyMac { key_id: String },
    /// Create a symmetric key rotated every 30 days.
    CreateKeyRotationSchedule { key_id: String },
    /// Create a symmetric key with labels.
    CreateKeyLabels { key_id: String },
    /// Add a version to a key.
    CreateKeyVersion { key_id: String },
    /// List the keys in the key ring.
    ListKeys,
    /// Print the labels of a key.
    GetKeyLabels { key_id: String },
    /// Replace the labels of a key.
    UpdateKeyUpdateLabels {
        key_id: String,
        /// Labels in `key=value` format.
        #[arg(value_parser = parse_label, default_value = "new_label=new_value")]
        labels: Vec<(String, String)>,
    },
    /// Add a rotation schedule to a key.
    UpdateKeyAddRotation { key_id: String },
    /// Remove the rotation schedule of a key.
    UpdateKeyRemoveRotation { key_id: String },
    /// Change the primary version of a key.
    UpdateKeySetPrimary { key_id: String, version_id: String },
    EnableKeyVersion { key_id: String, version_id: String },
    DisableKeyVersion { key_id: String, version_id: String },
    DestroyKeyVersion { key_id: String, version_id: String },
    RestoreKeyVersion { key_id: String, version_id: String },
    GetPublicKey { key_id: String, version_id: String },
    /// Encrypt a string with a symmetric key.
    EncryptSymmetric { key_id: String, plaintext: String },
    /// Decrypt base64 ciphertext with a symmetric key.
    DecryptSymmetric { key_id: String, ciphertext: String },
    /// Encrypt a string locally with the public key of a decryption key.
    EncryptAsymmetric {
        key_id: String,
        version_id: String,
        plaintext: String,
    },
    /// Decrypt base64 ciphertext with an asymmetric key.
    DecryptAsymmetric {
        key_id: String,
        version_id: String,
        ciphertext: String,
    },
    /// Sign a message with an asymmetric key.
    SignAsymmetric {
        key_id: String,
        version_id: String,
        message: String,
    },
    /// Verify a base64 EC signature locally.
    VerifyAsymmetricEc {
        key_id: String,
        version_id: String,
        message: String,
        signature: String,
    },
    /// Verify a base64 RSA signature locally.
    VerifyAsymmetricRsa {
        key_id: String,
        version_id: String,
        message: String,
        signature: String,
    },
    /// Compute the MAC of some data.
    SignMac {
        key_id: String,
        version_id: String,
        data: String,
    },
    /// Verify a base64 MAC.
    VerifyMac {
        key_id: String,
        version_id: String,
        data: String,
        mac: String,
    },
    /// Print the IAM policy of a key.
    IamGetPolicy { key_id: String },
    /// Grant a member the encrypter/decrypter role on a key.
    IamAddMember { key_id: String, member: String },
    /// Revoke the encrypter/decrypter role on a key.
    IamRemoveMember { key_id: String, member: String },
}

fn parse_label(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got {arg}")),
    }
}

impl Cli {
    fn key_ring_name(&self) -> anyhow::Result<String> {
        if self.key_ring.is_empty() {
            anyhow::bail!("this command requires --key-ring or KMS_KEY_RING_ID");
        }
        Ok(crate::key_ring_name(
            &self.project_id,
            &self.location,
            &self.key_ring,
        ))
    }

    fn key_name(&self, key_id: &str) -> anyhow::Result<String> {
        Ok(format!("{}/cryptoKeys/{key_id}", self.key_ring_name()?))
    }

    fn version_name(&self, key_id: &str, version_id: &str) -> anyhow::Result<String> {
        Ok(format!(
            "{}/cryptoKeyVersions/{version_id}",
            self.key_name(key_id)?
        ))
    }
}

/// Creates a client and runs the selected command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = KeyManagementService::builder().build().await?;
    dispatch(&client, cli).await
}

/// Runs the selected command using `client`.
pub async fn dispatch(client: &KeyManagementService, cli: Cli) -> anyhow::Result<()> {
    use crate::{crypto, iam, key_rings, keys, versions};
    tracing::info!("running {:?}", cli.command);
    match &cli.command {
        Command::CreateKeyRing { key_ring_id } => {
            key_rings::create_key_ring::sample(client, &cli.project_id, &cli.location, key_ring_id)
                .await?;
        }
        Command::ListKeyRings => {
            key_rings::list_key_rings::sample(client, &cli.project_id, &cli.location).await?;
        }
        Command::CreateKeySymmetricEncryptDecrypt { key_id } => {
            keys::create_key_symmetric_encrypt_decrypt::sample(client, &cli.key_ring_name()?, key_id)
                .await?;
        }
        Command::CreateKeyAsymmetricSign { key_id } => {
            keys::create_key_asymmetric_sign::sample(client, &cli.key_ring_name()?, key_id).await?;
        }
        Command::CreateKeyAsymmetricDecrypt { key_id } => {
            keys::create_key_asymmetric_decrypt::sample(client, &cli.key_ring_name()?, key_id)
                .await?;
        }
        Command::CreateKeyHsm { key_id } => {
            keys::create_key_hsm::sample(client, &cli.key_ring_name()?, key_id).await?;
        }
        Command::CreateKeyMac { key_id } => {
            keys::create_key_mac::sample(client, &cli.key_ring_name()?, key_id).await?;
        }
        Command::CreateKeyRotationSchedule { key_id } => {
            keys::create_key_rotation_schedule::sample(client, &cli.key_ring_name()?, key_id)
                .await?;
        }
        Command::CreateKeyLabels { key_id } => {
            keys::create_key_labels::sample(client, &cli.key_ring_name()?, key_id).await?;
        }
        Command::CreateKeyVersion { key_id } => {
            versions::create_key_version::sample(client, &cli.key_name(key_id)?).await?;
        }
        Command::ListKeys => {
            keys::list_keys::sample(client, &cli.key_ring_name()?).await?;
        }
        Command::GetKeyLabels { key_id } => {
            keys::get_key_labels::sample(client, &cli.key_name(key_id)?).await?;
        }
        Command::UpdateKeyUpdateLabels { key_id, labels } => {
            keys::update_key_update_labels::sample(client, &cli.key_name(key_id)?, labels).await?;
        }
        Command::UpdateKeyAddRotation { key_id } => {
            keys::update_key_add_rotation::sample(client, &cli.key_name(key_id)?).await?;
        }
        Command::UpdateKeyRemoveRotation { key_id } => {
            keys::update_key_remove_rotation::sample(client, &cli.key_name(key_id)?).await?;
        }
        Command::UpdateKeySetPrimary { key_id, version_id } => {
            keys::update_key_set_primary::sample(client, &cli.key_name(key_id)?, version_id)
                .await?;
        }
        Command::EnableKeyVersion { key_id, version_id } => {
            versions::enable_key_version::sample(client, &cli.version_name(key_id, version_id)?)
                .await?;
        }
        Command::DisableKeyVersion { key_id, version_id } => {
            versions::disable_key_version::sample(client, &cli.version_name(key_id, version_id)?)
                .await?;
        }
        Command::DestroyKeyVersion { key_id, version_id } => {
            versions::destroy_key_version::sample(client, &cli.version_name(key_id, version_id)?)
                .await?;
        }
        Command::RestoreKeyVersion { key_id, version_id } => {
            versions::restore_key_version::sample(client, &cli.version_name(key_id, version_id)?)
                .await?;
        }
        Command::GetPublicKey { key_id, version_id } => {
            versions::get_public_key::sample(client, &cli.version_name(key_id, version_id)?)
                .await?;
        }
        Command::EncryptSymmetric { key_id, plaintext } => {
            crypto::encrypt_symmetric::sample(client, &cli.key_name(key_id)?, plaintext.as_bytes())
                .await?;
        }
        Command::DecryptSymmetric { key_id, ciphertext } => {
            let ciphertext = from_base64(ciphertext)?;
            crypto::decrypt_symmetric::sample(client, &cli.key_name(key_id)?, &ciphertext).await?;
        }
        Command::EncryptAsymmetric {
            key_id,
            version_id,
            plaintext,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            crypto::encrypt_asymmetric::sample(client, &name, plaintext.as_bytes()).await?;
        }
        Command::DecryptAsymmetric {
            key_id,
            version_id,
            ciphertext,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            crypto::decrypt_asymmetric::sample(client, &name, &from_base64(ciphertext)?).await?;
        }
        Command::SignAsymmetric {
            key_id,
            version_id,
            message,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            crypto::sign_asymmetric::sample(client, &name, message.as_bytes()).await?;
        }
        Command::VerifyAsymmetricEc {
            key_id,
            version_id,
            message,
            signature,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            let signature = from_base64(signature)?;
            crypto::verify_asymmetric_ec::sample(client, &name, message.as_bytes(), &signature)
                .await?;
        }
        Command::VerifyAsymmetricRsa {
            key_id,
            version_id,
            message,
            signature,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            let signature = from_base64(signature)?;
            crypto::verify_asymmetric_rsa::sample(client, &name, message.as_bytes(), &signature)
                .await?;
        }
        Command::SignMac {
            key_id,
            version_id,
            data,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            crypto::sign_mac::sample(client, &name, data.as_bytes()).await?;
        }
        Command::VerifyMac {
            key_id,
            version_id,
            data,
            mac,
        } => {
            let name = cli.version_name(key_id, version_id)?;
            crypto::verify_mac::sample(client, &name, data.as_bytes(), &from_base64(mac)?).await?;
        }
        Command::IamGetPolicy { key_id } => {
            iam::get_policy::sample(client, &cli.key_name(key_id)?).await?;
        }
        Command::IamAddMember { key_id, member } => {
            iam::add_member::sample(client, &cli.key_name(key_id)?, member).await?;
        }
        Command::IamRemoveMember { key_id, member } => {
            iam::remove_member::sample(client, &cli.key_name(key_id)?, member).await?;
        }
    }
    Ok(())
}
