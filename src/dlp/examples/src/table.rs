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

//! Convert CSV files to and from DLP tables.
//!
//! Cells in the date columns must be `MM/DD/YYYY` dates, or empty. They
//! become date values so the date shift transformation can find them. Every
//! other cell is a string.

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use google_cloud_privacy_dlp_v2::model::{FieldId, Table, Value, table::Row};
use google_cloud_type::model::Date;
use std::io::{Read, Write};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Reads a CSV document, with a header row, into a table.
///
/// Cells in the `date_fields` columns are parsed as dates. All the
/// `date_fields` must be present in the header row.
pub fn csv_to_table<R: Read>(reader: R, date_fields: &[String]) -> anyhow::Result<Table> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().context("reading CSV headers")?.clone();
    if let Some(missing) = date_fields.iter().find(|f| !headers.iter().any(|h| h == f.as_str())) {
        anyhow::bail!("date field {missing} is not a column in the CSV headers");
    }
    let is_date: Vec<bool> = headers
        .iter()
        .map(|h| date_fields.iter().any(|f| f == h))
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV row {}", i + 1))?;
        let values = record
            .iter()
            .zip(headers.iter())
            .zip(&is_date)
            .map(|((cell, header), is_date)| {
                if *is_date {
                    parse_date_cell(cell)
                        .with_context(|| format!("CSV row {}, column {header}", i + 1))
                } else {
                    Ok(Value::new().set_string_value(cell))
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        rows.push(Row::new().set_values(values));
    }
    let headers = headers.iter().map(|h| FieldId::new().set_name(h));
    Ok(Table::new().set_headers(headers).set_rows(rows))
}

/// Writes a table as CSV, with a header row.
pub fn table_to_csv<W: Write>(table: &Table, writer: W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers.iter().map(|h| h.name.as_str()))?;
    for row in &table.rows {
        writer.write_record(row.values.iter().map(crate::format::value_to_string))?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_date_cell(cell: &str) -> anyhow::Result<Value> {
    if cell.trim().is_empty() {
        return Ok(Value::new().set_string_value(cell));
    }
    let date = parse_date(cell.trim())?;
    Ok(Value::new().set_date_value(date))
}

fn parse_date(cell: &str) -> anyhow::Result<Date> {
    // chrono accepts single digit months and days, the CSV format does not.
    if cell.len() != 10 {
        anyhow::bail!("{cell:?} is not a MM/DD/YYYY date");
    }
    let date = NaiveDate::parse_from_str(cell, DATE_FORMAT)
        .with_context(|| format!("{cell:?} is not a MM/DD/YYYY date"))?;
    Ok(Date::new()
        .set_year(date.year())
        .set_month(date.month() as i32)
        .set_day(date.day() as i32))
}
