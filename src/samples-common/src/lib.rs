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

//! Helpers shared by the command-line samples.
//!
//! Each sample binary parses its verb, runs exactly one sample function, and
//! maps the outcome to an exit code. The functions in this crate cover the
//! handful of concerns every binary repeats: installing a tracing subscriber,
//! reporting errors, tolerating `ALREADY_EXISTS` on idempotent creates, and
//! waiting for remote work with a bounded budget.

pub mod errors;
pub mod logging;
pub mod wait;

pub use errors::{ignore_already_exists, is_already_exists};
pub use humantime::parse_duration;
pub use logging::enable_tracing;

use std::process::ExitCode;

/// Converts the outcome of a sample into the process exit code.
///
/// Errors are printed once to stderr with their full chain of causes.
/// Argument errors never reach this function, `clap` exits with status 2 for
/// those.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn error_message(e: &anyhow::Error) -> String {
    format!("error: {e:#}")
}

/// Returns `name` if it is already a full resource name, otherwise joins it
/// to `parent` under `collection`.
///
/// Several verbs accept either a short id (`my-template`) or the full name
/// (`projects/p/locations/global/inspectTemplates/my-template`).
pub fn qualify(parent: &str, collection: &str, name: &str) -> String {
    if name.starts_with("projects/") || name.starts_with("organizations/") {
        return name.to_string();
    }
    format!("{parent}/{collection}/{name}")
}
