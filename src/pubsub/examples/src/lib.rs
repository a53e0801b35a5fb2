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

//! Samples for Pub/Sub.
//!
//! The admin samples receive a [TopicAdmin][google_cloud_pubsub::client::TopicAdmin],
//! [SubscriptionAdmin][google_cloud_pubsub::client::SubscriptionAdmin] or
//! [SchemaService][google_cloud_pubsub::client::SchemaService] client. The
//! data plane samples receive a `Publisher` or `Subscriber`.

pub mod cli;
pub mod publish;
pub mod schema;
pub mod subscribe;
pub mod subscription;
pub mod topic;

/// Formats the name of a project.
pub fn project_name(project_id: &str) -> String {
    format!("projects/{project_id}")
}

/// Formats the name of a topic.
pub fn topic_name(project_id: &str, topic_id: &str) -> String {
    format!("projects/{project_id}/topics/{topic_id}")
}

/// Formats the name of a subscription.
pub fn subscription_name(project_id: &str, subscription_id: &str) -> String {
    format!("projects/{project_id}/subscriptions/{subscription_id}")
}

/// Formats the name of a schema.
pub fn schema_name(project_id: &str, schema_id: &str) -> String {
    format!("projects/{project_id}/schemas/{schema_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(project_name("p"), "projects/p");
        assert_eq!(topic_name("p", "t"), "projects/p/topics/t");
        assert_eq!(subscription_name("p", "s"), "projects/p/subscriptions/s");
        assert_eq!(schema_name("p", "s"), "projects/p/schemas/s");
    }
}
