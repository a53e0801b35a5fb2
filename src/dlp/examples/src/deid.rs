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

//! De-identify and re-identify content.

pub mod date_shift;
pub mod deid_deterministic;
pub mod deid_fpe;
pub mod mask;
pub mod redact;
pub mod reid_deterministic;
pub mod reid_fpe;
pub mod replace_info_type;

use anyhow::Context;
use base64::Engine as _;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoKey, CustomInfoType, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, KmsWrappedCryptoKey, PrimitiveTransformation,
    custom_info_type::SurrogateType, info_type_transformations::InfoTypeTransformation,
};

/// A data encryption key, wrapped by a Cloud KMS key.
#[derive(Clone, Debug)]
pub struct WrappedKey {
    /// The full name of the KMS key that wrapped the data key.
    pub key_name: String,
    /// The wrapped data key, base64 encoded.
    pub wrapped_key: String,
}

impl WrappedKey {
    pub fn new(key_name: impl Into<String>, wrapped_key: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            wrapped_key: wrapped_key.into(),
        }
    }

    pub fn to_crypto_key(&self) -> anyhow::Result<CryptoKey> {
        let wrapped = base64::engine::general_purpose::STANDARD
            .decode(self.wrapped_key.trim())
            .context("the wrapped key must be base64 encoded")?;
        Ok(CryptoKey::new().set_kms_wrapped(
            KmsWrappedCryptoKey::new()
                .set_wrapped_key(wrapped)
                .set_crypto_key_name(&self.key_name),
        ))
    }
}

/// Applies `transformation` to every finding of the given info types.
///
/// An empty `info_types` applies the transformation to all findings.
pub fn info_type_config<I, S>(info_types: I, transformation: PrimitiveTransformation) -> DeidentifyConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let transformation = InfoTypeTransformation::new()
        .set_info_types(crate::info_types(info_types))
        .set_primitive_transformation(transformation);
    DeidentifyConfig::new().set_info_type_transformations(
        InfoTypeTransformations::new().set_transformations([transformation]),
    )
}

/// Finds the surrogate values produced by a previous de-identification.
pub fn surrogate_inspect_config(surrogate_type: &str) -> InspectConfig {
    let custom = CustomInfoType::new()
        .set_info_type(InfoType::new().set_name(surrogate_type))
        .set_surrogate_type(SurrogateType::new());
    InspectConfig::new().set_custom_info_types([custom])
}

/// Returns the text of a transformed item, empty if the item is not text.
pub fn output_text(item: Option<&ContentItem>) -> String {
    item.and_then(|i| i.value()).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_key() -> anyhow::Result<()> {
        let key = WrappedKey::new("projects/p/locations/global/keyRings/r/cryptoKeys/k", "AQID\n");
        let got = key.to_crypto_key()?;
        let wrapped = got.kms_wrapped().map(|k| (k.wrapped_key.to_vec(), k.crypto_key_name.clone()));
        assert_eq!(
            wrapped,
            Some((vec![1_u8, 2, 3], key.key_name.clone()))
        );
        Ok(())
    }

    #[test]
    fn crypto_key_bad_base64() {
        let key = WrappedKey::new("k", "not base64!");
        let got = key.to_crypto_key();
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn transformations() {
        let config = info_type_config(["PHONE_NUMBER"], PrimitiveTransformation::new());
        let got = config
            .info_type_transformations()
            .map(|t| t.transformations.len());
        assert_eq!(got, Some(1));
    }

    #[test]
    fn output() {
        let item = ContentItem::new().set_value("My phone number is [PHONE_NUMBER].");
        assert_eq!(output_text(Some(&item)), "My phone number is [PHONE_NUMBER].");
        assert_eq!(output_text(None), "");
        let table = ContentItem::new().set_table(google_cloud_privacy_dlp_v2::model::Table::new());
        assert_eq!(output_text(Some(&table)), "");
    }

    #[test]
    fn surrogate() {
        let config = surrogate_inspect_config("SSN_TOKEN");
        assert_eq!(config.custom_info_types.len(), 1);
        let custom = &config.custom_info_types[0];
        assert_eq!(custom.info_type.as_ref().map(|t| t.name.as_str()), Some("SSN_TOKEN"));
        assert!(custom.surrogate_type().is_some());
    }
}
