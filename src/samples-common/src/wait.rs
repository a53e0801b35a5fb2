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

//! Bounded waits for remote work.
//!
//! The samples never block indefinitely. Jobs are polled a fixed number of
//! times with a fixed delay, and listeners run for a fixed duration before
//! they are asked to stop.

use std::future::Future;
use std::time::Duration;
pub use tokio_util::sync::CancellationToken;

/// The outcome of [poll_bounded].
#[derive(Clone, Debug, PartialEq)]
pub enum Polled<T> {
    /// The check returned a value.
    Done(T),
    /// The budget was exhausted before the check returned a value.
    NotFinished { attempts: u32 },
}

impl<T> Polled<T> {
    /// Converts the outcome into a `Result`, for callers that need a value.
    pub fn into_result(self) -> Result<T, NotFinished> {
        match self {
            Polled::Done(v) => Ok(v),
            Polled::NotFinished { attempts } => Err(NotFinished { attempts }),
        }
    }
}

/// The error returned by [Polled::into_result] when the budget ran out.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("the operation did not finish after {attempts} attempts")]
pub struct NotFinished {
    pub attempts: u32,
}

/// Calls `check` up to `attempts` times, sleeping `delay` between calls.
///
/// `check` receives the zero-based attempt index. It returns `Ok(Some(_))`
/// once the remote work is complete and `Ok(None)` while it is still
/// running. Errors stop the loop immediately.
pub async fn poll_bounded<T, F, Fut>(
    attempts: u32,
    delay: Duration,
    mut check: F,
) -> anyhow::Result<Polled<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    for attempt in 0..attempts {
        if attempt != 0 {
            tokio::time::sleep(delay).await;
        }
        if let Some(v) = check(attempt).await? {
            return Ok(Polled::Done(v));
        }
        tracing::info!("attempt {} of {attempts}: still running", attempt + 1);
    }
    tracing::warn!("giving up after {attempts} attempts");
    Ok(Polled::NotFinished { attempts })
}

/// Runs `listener` until `duration` elapses, then cancels it.
///
/// The listener receives a [CancellationToken] and must return promptly once
/// the token is cancelled. This function awaits the listener's completion
/// and returns its output. If the listener finishes early the timer is
/// abandoned.
pub async fn run_for<T, F, Fut>(duration: Duration, listener: F) -> T
where
    F: FnOnce(CancellationToken) -> Fut,
    Fut: Future<Output = T>,
{
    let token = CancellationToken::new();
    let stop = token.clone();
    let done = token.clone();
    let listen = async move {
        let output = listener(token).await;
        done.cancel();
        output
    };
    let timer = async move {
        tokio::select! {
            _ = tokio::time::sleep(duration) => {
                tracing::info!("stopping listener after {duration:?}");
                stop.cancel();
            }
            _ = stop.cancelled() => {}
        }
    };
    let (output, _) = tokio::join!(listen, timer);
    output
}
