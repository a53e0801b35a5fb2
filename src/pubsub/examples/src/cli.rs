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

//! The `pubsub` command line.

use crate::publish::publish_with_batch_settings::BatchSettings;
use clap::{Parser, Subcommand, ValueEnum};
use google_cloud_pubsub::client::{
    Publisher, SchemaService, Subscriber, SubscriptionAdmin, TopicAdmin,
};
use google_cloud_pubsub::model::Encoding;
use samples_common::parse_duration;
use std::path::PathBuf;
use std::time::Duration;

/// Pub/Sub samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The project that owns the topics, subscriptions and schemas.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create a topic, succeeds if the topic exists.
    CreateTopic {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
    },
    /// Create a topic that validates messages against a schema.
    CreateTopicWithSchema {
        topic_id: String,
        schema_id: String,
        #[arg(long, value_enum, default_value_t = SchemaEncoding::Json)]
        encoding: SchemaEncoding,
    },
    GetTopic {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
    },
    ListTopics,
    DeleteTopic {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
    },
    /// List the subscriptions attached to a topic.
    ListTopicSubscriptions {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
    },
    /// Create a pull subscription, succeeds if the subscription exists.
    CreatePullSubscription {
        topic_id: String,
        subscription_id: String,
    },
    CreatePushSubscription {
        topic_id: String,
        subscription_id: String,
        /// The HTTPS endpoint that receives the messages.
        endpoint: String,
    },
    /// Create a subscription with message ordering enabled.
    CreateOrderedSubscription {
        topic_id: String,
        subscription_id: String,
    },
    CreateDeadLetterSubscription {
        topic_id: String,
        subscription_id: String,
        dead_letter_topic_id: String,
        #[arg(long, default_value_t = crate::subscription::DEFAULT_MAX_DELIVERY_ATTEMPTS)]
        max_delivery_attempts: i32,
    },
    CreateFilteredSubscription {
        topic_id: String,
        subscription_id: String,
        #[arg(default_value = r#"attributes.author="unknown""#)]
        filter: String,
    },
    ListSubscriptions,
    DeleteSubscription {
        #[arg(env = "PUBSUB_SUBSCRIPTION_ID")]
        subscription_id: String,
    },
    /// Create an Avro schema from an `.avsc` file.
    CreateAvroSchema { schema_id: String, path: PathBuf },
    /// Create a protocol buffer schema from a `.proto` file.
    CreateProtoSchema { schema_id: String, path: PathBuf },
    GetSchema { schema_id: String },
    ListSchemas,
    DeleteSchema { schema_id: String },
    /// Publish a number of messages.
    Publish {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Publish a message with custom attributes.
    PublishWithAttributes {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
        #[arg(long, default_value = "Hello, World!")]
        data: String,
        /// Attributes in `key=value` format.
        #[arg(long = "attribute", value_parser = parse_pair, default_values = ["origin=rust-sample", "username=gcp"])]
        attributes: Vec<(String, String)>,
    },
    /// Publish messages with ordering keys.
    PublishWithOrderingKeys {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
        /// Messages in `ordering_key=data` format.
        #[arg(long = "message", value_parser = parse_pair, default_values = ["key1=message1", "key2=message2", "key1=message3", "key2=message4"])]
        messages: Vec<(String, String)>,
    },
    /// Publish messages with custom batching thresholds.
    PublishWithBatchSettings {
        #[arg(env = "PUBSUB_TOPIC_ID")]
        topic_id: String,
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 10)]
        message_count_threshold: u32,
        #[arg(long, default_value_t = 1024)]
        byte_threshold: u32,
        #[arg(long, value_parser = parse_duration, default_value = "100ms")]
        delay_threshold: Duration,
    },
    /// Receive messages for a bounded time.
    Subscribe {
        #[arg(env = "PUBSUB_SUBSCRIPTION_ID")]
        subscription_id: String,
        #[arg(long, value_parser = parse_duration, default_value = "10s")]
        timeout: Duration,
    },
    /// Receive messages for a bounded time, using a stream.
    SubscribeStream {
        #[arg(env = "PUBSUB_SUBSCRIPTION_ID")]
        subscription_id: String,
        #[arg(long, value_parser = parse_duration, default_value = "10s")]
        timeout: Duration,
    },
}

/// The encoding of messages published to a topic with a schema.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum SchemaEncoding {
    Json,
    Binary,
}

impl From<SchemaEncoding> for Encoding {
    fn from(value: SchemaEncoding) -> Self {
        match value {
            SchemaEncoding::Json => Encoding::Json,
            SchemaEncoding::Binary => Encoding::Binary,
        }
    }
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got {arg}")),
    }
}

/// The admin clients used by the topic, subscription and schema commands.
#[derive(Clone, Debug)]
pub struct AdminClients {
    pub topics: TopicAdmin,
    pub subscriptions: SubscriptionAdmin,
    pub schemas: SchemaService,
}

impl AdminClients {
    pub async fn new() -> anyhow::Result<Self> {
        Ok(Self {
            topics: TopicAdmin::builder().build().await?,
            subscriptions: SubscriptionAdmin::builder().build().await?,
            schemas: SchemaService::builder().build().await?,
        })
    }
}

/// Runs the selected command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let clients = AdminClients::new().await?;
    dispatch(&clients, cli).await
}

/// Runs the selected command using `clients` for the admin operations.
///
/// The publish and subscribe commands create their own data plane clients.
pub async fn dispatch(clients: &AdminClients, cli: Cli) -> anyhow::Result<()> {
    let project = cli.project_id.as_str();
    let topic = |id: &str| crate::topic_name(project, id);
    let subscription = |id: &str| crate::subscription_name(project, id);
    let schema = |id: &str| crate::schema_name(project, id);
    tracing::info!("running {:?} in project {project}", cli.command);

    let topics = &clients.topics;
    let subscriptions = &clients.subscriptions;
    let schemas = &clients.schemas;
    match cli.command {
        Command::CreateTopic { topic_id } => {
            crate::topic::create_topic::sample(topics, &topic(&topic_id)).await?;
        }
        Command::CreateTopicWithSchema {
            topic_id,
            schema_id,
            encoding,
        } => {
            crate::topic::create_topic_with_schema::sample(
                topics,
                &topic(&topic_id),
                &schema(&schema_id),
                encoding.into(),
            )
            .await?;
        }
        Command::GetTopic { topic_id } => {
            crate::topic::get_topic::sample(topics, &topic(&topic_id)).await?;
        }
        Command::ListTopics => {
            crate::topic::list_topics::sample(topics, &crate::project_name(project)).await?;
        }
        Command::DeleteTopic { topic_id } => {
            crate::topic::delete_topic::sample(topics, &topic(&topic_id)).await?;
        }
        Command::ListTopicSubscriptions { topic_id } => {
            crate::topic::list_topic_subscriptions::sample(topics, &topic(&topic_id)).await?;
        }
        Command::CreatePullSubscription {
            topic_id,
            subscription_id,
        } => {
            crate::subscription::create_pull_subscription::sample(
                subscriptions,
                &topic(&topic_id),
                &subscription(&subscription_id),
            )
            .await?;
        }
        Command::CreatePushSubscription {
            topic_id,
            subscription_id,
            endpoint,
        } => {
            crate::subscription::create_push_subscription::sample(
                subscriptions,
                &topic(&topic_id),
                &subscription(&subscription_id),
                &endpoint,
            )
            .await?;
        }
        Command::CreateOrderedSubscription {
            topic_id,
            subscription_id,
        } => {
            crate::subscription::create_ordered_subscription::sample(
                subscriptions,
                &topic(&topic_id),
                &subscription(&subscription_id),
            )
            .await?;
        }
        Command::CreateDeadLetterSubscription {
            topic_id,
            subscription_id,
            dead_letter_topic_id,
            max_delivery_attempts,
        } => {
            crate::subscription::create_dead_letter_subscription::sample(
                subscriptions,
                &topic(&topic_id),
                &subscription(&subscription_id),
                &topic(&dead_letter_topic_id),
                max_delivery_attempts,
            )
            .await?;
        }
        Command::CreateFilteredSubscription {
            topic_id,
            subscription_id,
            filter,
        } => {
            crate::subscription::create_filtered_subscription::sample(
                subscriptions,
                &topic(&topic_id),
                &subscription(&subscription_id),
                &filter,
            )
            .await?;
        }
        Command::ListSubscriptions => {
            crate::subscription::list_subscriptions::sample(
                subscriptions,
                &crate::project_name(project),
            )
            .await?;
        }
        Command::DeleteSubscription { subscription_id } => {
            crate::subscription::delete_subscription::sample(
                subscriptions,
                &subscription(&subscription_id),
            )
            .await?;
        }
        Command::CreateAvroSchema { schema_id, path } => {
            crate::schema::create_avro_schema::sample(
                schemas,
                &crate::project_name(project),
                &schema_id,
                &path,
            )
            .await?;
        }
        Command::CreateProtoSchema { schema_id, path } => {
            crate::schema::create_proto_schema::sample(
                schemas,
                &crate::project_name(project),
                &schema_id,
                &path,
            )
            .await?;
        }
        Command::GetSchema { schema_id } => {
            crate::schema::get_schema::sample(schemas, &schema(&schema_id)).await?;
        }
        Command::ListSchemas => {
            crate::schema::list_schemas::sample(schemas, &crate::project_name(project)).await?;
        }
        Command::DeleteSchema { schema_id } => {
            crate::schema::delete_schema::sample(schemas, &schema(&schema_id)).await?;
        }
        Command::Publish { topic_id, count } => {
            let publisher = Publisher::builder(topic(&topic_id)).build().await?;
            crate::publish::publish_messages::sample(&publisher, count).await?;
        }
        Command::PublishWithAttributes {
            topic_id,
            data,
            attributes,
        } => {
            let publisher = Publisher::builder(topic(&topic_id)).build().await?;
            crate::publish::publish_with_attributes::sample(&publisher, &data, &attributes)
                .await?;
        }
        Command::PublishWithOrderingKeys { topic_id, messages } => {
            let publisher = Publisher::builder(topic(&topic_id)).build().await?;
            crate::publish::publish_with_ordering_keys::sample(&publisher, &messages).await?;
        }
        Command::PublishWithBatchSettings {
            topic_id,
            count,
            message_count_threshold,
            byte_threshold,
            delay_threshold,
        } => {
            let settings = BatchSettings {
                message_count: message_count_threshold,
                bytes: byte_threshold,
                delay: delay_threshold,
            };
            crate::publish::publish_with_batch_settings::sample(
                &topic(&topic_id),
                count,
                &settings,
            )
            .await?;
        }
        Command::Subscribe {
            subscription_id,
            timeout,
        } => {
            let client = Subscriber::builder().build().await?;
            crate::subscribe::subscribe_messages::sample(
                &client,
                &subscription(&subscription_id),
                timeout,
            )
            .await?;
        }
        Command::SubscribeStream {
            subscription_id,
            timeout,
        } => {
            let client = Subscriber::builder().build().await?;
            crate::subscribe::subscribe_stream::sample(
                &client,
                &subscription(&subscription_id),
                timeout,
            )
            .await?;
        }
    }
    Ok(())
}
