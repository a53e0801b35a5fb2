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

//! Inspect content for sensitive data.

pub mod inspect_custom_regex;
pub mod inspect_file;
pub mod inspect_gcs;
pub mod inspect_string;
pub mod redact_image;

use google_cloud_privacy_dlp_v2::model::{
    InspectConfig, Likelihood, byte_content_item::BytesType, inspect_config::FindingLimits,
};
use std::path::Path;

/// Options shared by the inspection samples.
#[derive(Clone, Debug)]
pub struct InspectOptions {
    pub info_types: Vec<String>,
    pub min_likelihood: Likelihood,
    /// Zero means the service default.
    pub max_findings: i32,
    pub include_quote: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            info_types: crate::DEFAULT_INFO_TYPES.map(str::to_string).to_vec(),
            min_likelihood: Likelihood::Possible,
            max_findings: 0,
            include_quote: true,
        }
    }
}

impl InspectOptions {
    pub fn to_config(&self) -> InspectConfig {
        InspectConfig::new()
            .set_info_types(crate::info_types(self.info_types.iter().map(String::as_str)))
            .set_min_likelihood(self.min_likelihood.clone())
            .set_limits(FindingLimits::new().set_max_findings_per_request(self.max_findings))
            .set_include_quote(self.include_quote)
    }
}

/// Picks the content type from the file extension.
pub fn bytes_type(path: &Path) -> BytesType {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("txt") | Some("csv") => BytesType::TextUtf8,
        Some("png") => BytesType::ImagePng,
        Some("jpg") | Some("jpeg") => BytesType::ImageJpeg,
        Some("bmp") => BytesType::ImageBmp,
        Some("svg") => BytesType::ImageSvg,
        _ => BytesType::Image,
    }
}
