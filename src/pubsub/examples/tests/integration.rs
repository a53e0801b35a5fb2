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

#[cfg(all(test, feature = "run-integration-tests"))]
mod pubsub {
    use google_cloud_gax::paginator::ItemPaginator as _;
    use google_cloud_pubsub::client::{
        Publisher, SchemaService, Subscriber, SubscriptionAdmin, TopicAdmin,
    };
    use google_cloud_pubsub::model::{Encoding, Topic};
    use pubsub_samples::publish::publish_with_batch_settings::BatchSettings;
    use samples_test_utils::{resource_names::random_pubsub_id, runtime_config};
    use std::io::Write as _;
    use std::time::Duration;

    const AVRO_DEFINITION: &str = r#"{
  "type": "record",
  "name": "State",
  "fields": [
    {"name": "name", "type": "string"},
    {"name": "post_abbr", "type": "string"}
  ]
}"#;

    fn project_id() -> anyhow::Result<String> {
        samples_common::enable_tracing("pubsub_samples");
        runtime_config::project_id()
    }

    /// Creates a topic labeled for cleanup by [cleanup_stale_topics].
    async fn create_test_topic(client: &TopicAdmin, project_id: &str) -> anyhow::Result<Topic> {
        cleanup_stale_topics(client, project_id).await?;
        let now = chrono::Utc::now().timestamp().to_string();
        let topic = client
            .create_topic()
            .set_name(pubsub_samples::topic_name(project_id, &random_pubsub_id()))
            .set_labels([("integration-test", "true"), ("create-time", &now)])
            .send()
            .await?;
        Ok(topic)
    }

    /// Deletes topics left behind by previous runs.
    async fn cleanup_stale_topics(client: &TopicAdmin, project_id: &str) -> anyhow::Result<()> {
        let stale_deadline = chrono::Utc::now() - chrono::Duration::hours(48);
        let mut topics = client
            .list_topics()
            .set_project(pubsub_samples::project_name(project_id))
            .by_item();
        while let Some(topic) = topics.next().await.transpose()? {
            let stale = topic
                .labels
                .get("integration-test")
                .is_some_and(|v| v == "true")
                && topic
                    .labels
                    .get("create-time")
                    .and_then(|v| v.parse::<i64>().ok())
                    .and_then(|s| chrono::DateTime::from_timestamp(s, 0))
                    .is_some_and(|create_time| create_time < stale_deadline);
            if stale {
                let r = client.delete_topic().set_topic(&topic.name).send().await;
                tracing::info!("deleting topic {} resulted in {r:?}", topic.name);
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn topics() -> anyhow::Result<()> {
        let project_id = project_id()?;
        let client = TopicAdmin::builder().build().await?;
        let name = pubsub_samples::topic_name(&project_id, &random_pubsub_id());

        let created = pubsub_samples::topic::create_topic::sample(&client, &name).await?;
        assert!(created.is_some(), "{created:?}");
        let again = pubsub_samples::topic::create_topic::sample(&client, &name).await?;
        assert!(again.is_none(), "{again:?}");

        let got = pubsub_samples::topic::get_topic::sample(&client, &name).await?;
        assert_eq!(got.name, name);
        let all = pubsub_samples::topic::list_topics::sample(
            &client,
            &pubsub_samples::project_name(&project_id),
        )
        .await?;
        assert!(all.iter().any(|t| t.name == name), "{all:?}");
        let subscriptions =
            pubsub_samples::topic::list_topic_subscriptions::sample(&client, &name).await?;
        assert!(subscriptions.is_empty(), "{subscriptions:?}");

        pubsub_samples::topic::delete_topic::sample(&client, &name).await?;
        Ok(())
    }

    #[tokio::test]
    async fn subscriptions() -> anyhow::Result<()> {
        let project_id = project_id()?;
        let topic_admin = TopicAdmin::builder().build().await?;
        let client = SubscriptionAdmin::builder().build().await?;
        let topic = create_test_topic(&topic_admin, &project_id).await?;
        let dead_letter = create_test_topic(&topic_admin, &project_id).await?;

        let names: Vec<String> = (0..4)
            .map(|_| pubsub_samples::subscription_name(&project_id, &random_pubsub_id()))
            .collect();
        let result = async {
            let created = pubsub_samples::subscription::create_pull_subscription::sample(
                &client, &topic.name, &names[0],
            )
            .await?;
            assert!(created.is_some(), "{created:?}");
            let again = pubsub_samples::subscription::create_pull_subscription::sample(
                &client, &topic.name, &names[0],
            )
            .await?;
            assert!(again.is_none(), "{again:?}");

            let ordered = pubsub_samples::subscription::create_ordered_subscription::sample(
                &client, &topic.name, &names[1],
            )
            .await?;
            assert!(ordered.enable_message_ordering, "{ordered:?}");
            let filtered = pubsub_samples::subscription::create_filtered_subscription::sample(
                &client,
                &topic.name,
                &names[2],
                r#"attributes.author="unknown""#,
            )
            .await?;
            assert!(!filtered.filter.is_empty(), "{filtered:?}");
            pubsub_samples::subscription::create_dead_letter_subscription::sample(
                &client,
                &topic.name,
                &names[3],
                &dead_letter.name,
                pubsub_samples::subscription::DEFAULT_MAX_DELIVERY_ATTEMPTS,
            )
            .await?;

            let attached =
                pubsub_samples::topic::list_topic_subscriptions::sample(&topic_admin, &topic.name)
                    .await?;
            assert_eq!(attached.len(), 4, "{attached:?}");
            let all = pubsub_samples::subscription::list_subscriptions::sample(
                &client,
                &pubsub_samples::project_name(&project_id),
            )
            .await?;
            assert!(all.iter().any(|s| s.name == names[0]), "{all:?}");
            anyhow::Ok(())
        }
        .await;

        for name in &names {
            if let Err(e) =
                pubsub_samples::subscription::delete_subscription::sample(&client, name).await
            {
                println!("Error cleaning up test subscription {name}: {e:?}");
            }
        }
        for name in [&topic.name, &dead_letter.name] {
            if let Err(e) = pubsub_samples::topic::delete_topic::sample(&topic_admin, name).await {
                println!("Error cleaning up test topic {name}: {e:?}");
            }
        }
        result
    }

    #[tokio::test]
    async fn publish_and_subscribe() -> anyhow::Result<()> {
        let project_id = project_id()?;
        let topic_admin = TopicAdmin::builder().build().await?;
        let subscription_admin = SubscriptionAdmin::builder().build().await?;
        let topic = create_test_topic(&topic_admin, &project_id).await?;
        let subscription = pubsub_samples::subscription_name(&project_id, &random_pubsub_id());

        let result = async {
            pubsub_samples::subscription::create_pull_subscription::sample(
                &subscription_admin,
                &topic.name,
                &subscription,
            )
            .await?;

            let publisher = Publisher::builder(&topic.name).build().await?;
            let ids = pubsub_samples::publish::publish_messages::sample(&publisher, 3).await?;
            assert_eq!(ids.len(), 3, "{ids:?}");
            let attributes = [("origin".to_string(), "rust-sample".to_string())];
            pubsub_samples::publish::publish_with_attributes::sample(
                &publisher,
                "Hello",
                &attributes,
            )
            .await?;
            let ordered = [
                ("key1".to_string(), "message1".to_string()),
                ("key1".to_string(), "message2".to_string()),
            ];
            let ids =
                pubsub_samples::publish::publish_with_ordering_keys::sample(&publisher, &ordered)
                    .await?;
            assert_eq!(ids.len(), 2, "{ids:?}");
            let ids = pubsub_samples::publish::publish_with_batch_settings::sample(
                &topic.name,
                4,
                &BatchSettings::default(),
            )
            .await?;
            assert_eq!(ids.len(), 4, "{ids:?}");

            let subscriber = Subscriber::builder().build().await?;
            let count = pubsub_samples::subscribe::subscribe_messages::sample(
                &subscriber,
                &subscription,
                Duration::from_secs(20),
            )
            .await?;
            assert!(count > 0, "expected at least one message");
            pubsub_samples::subscribe::subscribe_stream::sample(
                &subscriber,
                &subscription,
                Duration::from_secs(5),
            )
            .await?;
            anyhow::Ok(())
        }
        .await;

        if let Err(e) =
            pubsub_samples::subscription::delete_subscription::sample(&subscription_admin, &subscription)
                .await
        {
            println!("Error cleaning up test subscription {subscription}: {e:?}");
        }
        if let Err(e) = pubsub_samples::topic::delete_topic::sample(&topic_admin, &topic.name).await
        {
            println!("Error cleaning up test topic {}: {e:?}", topic.name);
        }
        result
    }

    #[tokio::test]
    async fn schemas() -> anyhow::Result<()> {
        let project_id = project_id()?;
        let project = pubsub_samples::project_name(&project_id);
        let client = SchemaService::builder().build().await?;
        let topic_admin = TopicAdmin::builder().build().await?;
        let schema_id = random_pubsub_id();
        let schema = pubsub_samples::schema_name(&project_id, &schema_id);
        let topic = pubsub_samples::topic_name(&project_id, &random_pubsub_id());

        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(AVRO_DEFINITION.as_bytes())?;

        let result = async {
            let created = pubsub_samples::schema::create_avro_schema::sample(
                &client,
                &project,
                &schema_id,
                file.path(),
            )
            .await?;
            assert!(created.is_some(), "{created:?}");
            let again = pubsub_samples::schema::create_avro_schema::sample(
                &client,
                &project,
                &schema_id,
                file.path(),
            )
            .await?;
            assert!(again.is_none(), "{again:?}");

            let got = pubsub_samples::schema::get_schema::sample(&client, &schema).await?;
            assert_eq!(got.name, schema);
            let all = pubsub_samples::schema::list_schemas::sample(&client, &project).await?;
            assert!(all.iter().any(|s| s.name == schema), "{all:?}");

            pubsub_samples::topic::create_topic_with_schema::sample(
                &topic_admin,
                &topic,
                &schema,
                Encoding::Json,
            )
            .await?;
            pubsub_samples::topic::delete_topic::sample(&topic_admin, &topic).await?;
            anyhow::Ok(())
        }
        .await;

        if let Err(e) = pubsub_samples::schema::delete_schema::sample(&client, &schema).await {
            println!("Error cleaning up test schema {schema}: {e:?}");
        }
        result
    }
}
