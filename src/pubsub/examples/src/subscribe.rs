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

//! Receive messages from a subscription for a bounded time.
//!
//! Applications typically process messages indefinitely. The samples stop
//! after a fixed duration so they can run as commands and tests.

pub mod subscribe_messages;
pub mod subscribe_stream;

use futures::{Stream, StreamExt as _};
use google_cloud_pubsub::model::Message;
use samples_common::wait::CancellationToken;
use std::time::Duration;

/// How long the subscribe samples listen by default.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);

pub(crate) fn print_message(message: &Message) {
    println!(
        "Received message {}: {}",
        message.message_id,
        String::from_utf8_lossy(&message.data)
    );
    for (key, value) in &message.attributes {
        println!("  {key} = {value}");
    }
}

/// Calls `on_item` for each item in `stream` until `token` is cancelled.
///
/// Returns the number of items processed. The first error ends the stream.
pub(crate) async fn drain_until<S, T, E, F>(
    stream: S,
    token: CancellationToken,
    mut on_item: F,
) -> anyhow::Result<usize>
where
    S: Stream<Item = Result<T, E>>,
    E: Into<anyhow::Error>,
    F: FnMut(T),
{
    let stream = stream.take_until(token.cancelled_owned());
    tokio::pin!(stream);
    let mut count = 0_usize;
    while let Some(item) = stream.next().await {
        on_item(item.map_err(Into::into)?);
        count += 1;
    }
    Ok(count)
}
