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

//! Create, list and delete subscriptions.
//!
//! The variants differ only in the fields they set on the new subscription.

pub mod create_dead_letter_subscription;
pub mod create_filtered_subscription;
pub mod create_ordered_subscription;
pub mod create_pull_subscription;
pub mod create_push_subscription;
pub mod delete_subscription;
pub mod list_subscriptions;

/// The default number of delivery attempts before a message is forwarded
/// to the dead letter topic.
pub const DEFAULT_MAX_DELIVERY_ATTEMPTS: i32 = 10;
