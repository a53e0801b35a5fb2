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

//! Render DLP model values for the console.

use google_cloud_privacy_dlp_v2::model::{Finding, Value};

/// Formats a table or risk-analysis value.
///
/// Dates use the `MM/DD/YYYY` format, the same format accepted by
/// [crate::table::csv_to_table].
pub fn value_to_string(value: &Value) -> String {
    if let Some(s) = value.string_value() {
        return s.clone();
    }
    if let Some(v) = value.integer_value() {
        return v.to_string();
    }
    if let Some(v) = value.float_value() {
        return v.to_string();
    }
    if let Some(v) = value.boolean_value() {
        return v.to_string();
    }
    if let Some(d) = value.date_value() {
        return format!("{:02}/{:02}/{:04}", d.month, d.day, d.year);
    }
    if let Some(t) = value.timestamp_value() {
        return format!("{}s", t.seconds());
    }
    String::new()
}

/// Prints each finding, or a notice if there are none.
pub fn print_findings(findings: &[Finding]) {
    if findings.is_empty() {
        println!("No findings.");
        return;
    }
    println!("Findings: {}", findings.len());
    for f in findings {
        let info_type = f.info_type.as_ref().map(|t| t.name.as_str()).unwrap_or_default();
        if !f.quote.is_empty() {
            println!("\tQuote: {}", f.quote);
        }
        println!("\tInfo type: {info_type}");
        println!("\tLikelihood: {:?}", f.likelihood);
    }
}
