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

// [START dlp_deidentify_date_shift]
use super::WrappedKey;
use anyhow::Context;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, DateShiftConfig, DeidentifyConfig, FieldId, FieldTransformation,
    PrimitiveTransformation, RecordTransformations, Table,
};
use std::ops::RangeInclusive;
use std::path::Path;

/// Shifts dates by a consistent amount per `field`, using `key`.
#[derive(Clone, Debug)]
pub struct ShiftContext {
    pub field: String,
    pub key: WrappedKey,
}

/// Shifts the dates in `date_fields` by a random number of days in `days`.
pub async fn sample(
    client: &DlpService,
    parent: &str,
    input: &Path,
    output: &Path,
    days: RangeInclusive<i32>,
    date_fields: &[String],
    context: Option<&ShiftContext>,
) -> anyhow::Result<Table> {
    let data = tokio::fs::read(input)
        .await
        .with_context(|| format!("reading {}", input.display()))?;
    let table = crate::table::csv_to_table(data.as_slice(), date_fields)?;

    let mut shift = DateShiftConfig::new()
        .set_lower_bound_days(*days.start())
        .set_upper_bound_days(*days.end());
    if let Some(context) = context {
        shift = shift
            .set_context(FieldId::new().set_name(&context.field))
            .set_crypto_key(context.key.to_crypto_key()?);
    }
    let transformation = FieldTransformation::new()
        .set_fields(date_fields.iter().map(|f| FieldId::new().set_name(f)))
        .set_primitive_transformation(PrimitiveTransformation::new().set_date_shift_config(shift));
    let config = DeidentifyConfig::new().set_record_transformations(
        RecordTransformations::new().set_field_transformations([transformation]),
    );

    let response = client
        .deidentify_content()
        .set_parent(parent)
        .set_deidentify_config(config)
        .set_item(ContentItem::new().set_table(table))
        .send()
        .await?;

    let table = response
        .item
        .as_ref()
        .and_then(|i| i.table())
        .map(|t| t.as_ref().clone())
        .context("the response does not contain a table")?;
    let mut buffer = Vec::new();
    crate::table::table_to_csv(&table, &mut buffer)?;
    tokio::fs::write(output, buffer)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Successfully saved date-shift output to {}", output.display());
    Ok(table)
}
// [END dlp_deidentify_date_shift]
