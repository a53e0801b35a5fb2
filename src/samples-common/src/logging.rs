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

use tracing_subscriber::EnvFilter;

/// Enables tracing for a sample binary.
///
/// The filter comes from `RUST_LOG` when set. Otherwise dependencies log at
/// `WARN` and the sample crate (`crate_name`) at `INFO`. Logs go to stderr,
/// stdout is reserved for the sample output.
pub fn enable_tracing(crate_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(crate_name)));
    // Ignore errors, a global subscriber may already be installed in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_directives(crate_name: &str) -> String {
    format!("warn,samples_common=info,{crate_name}=info")
}
