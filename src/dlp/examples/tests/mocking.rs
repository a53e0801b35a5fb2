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

//! Run the samples against a mocked DLP service.

use dlp_samples::inspect::InspectOptions;
use dlp_samples::risk::{PollOptions, SourceTable};
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;
use google_cloud_gax as gax;
use google_cloud_privacy_dlp_v2 as dlp;
use dlp::model::*;
use pretty_assertions::assert_eq;
use samples_common::wait::Polled;
use std::time::Duration;
use test_case::test_case;

type Result<T> = anyhow::Result<T>;

const PARENT: &str = "projects/test-project/locations/global";

mockall::mock! {
    #[derive(Debug)]
    Dlp {}
    impl dlp::stub::DlpService for Dlp {
        async fn inspect_content(&self, req: InspectContentRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<InspectContentResponse>>;
        async fn redact_image(&self, req: RedactImageRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<RedactImageResponse>>;
        async fn deidentify_content(&self, req: DeidentifyContentRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<DeidentifyContentResponse>>;
        async fn reidentify_content(&self, req: ReidentifyContentRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ReidentifyContentResponse>>;
        async fn list_inspect_templates(&self, req: ListInspectTemplatesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListInspectTemplatesResponse>>;
        async fn delete_inspect_template(&self, req: DeleteInspectTemplateRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<()>>;
        async fn list_job_triggers(&self, req: ListJobTriggersRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListJobTriggersResponse>>;
        async fn create_job_trigger(&self, req: CreateJobTriggerRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<JobTrigger>>;
        async fn create_dlp_job(&self, req: CreateDlpJobRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<DlpJob>>;
        async fn list_dlp_jobs(&self, req: ListDlpJobsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListDlpJobsResponse>>;
        async fn get_dlp_job(&self, req: GetDlpJobRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<DlpJob>>;
        async fn delete_dlp_job(&self, req: DeleteDlpJobRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<()>>;
        async fn delete_job_trigger(&self, req: DeleteJobTriggerRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<()>>;
    }
}

fn phone_finding() -> Finding {
    Finding::new()
        .set_quote("4359916732")
        .set_info_type(InfoType::new().set_name("PHONE_NUMBER"))
        .set_likelihood(Likelihood::VeryLikely)
}

#[tokio::test]
async fn inspect_string() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_inspect_content()
        .withf(|r, _| {
            r.parent == PARENT
                && r.item.as_ref().and_then(|i| i.value()).map(String::as_str)
                    == Some("My phone number is 4359916732.")
                && r.inspect_config
                    .as_ref()
                    .is_some_and(|c| c.info_types.len() == 3 && c.include_quote)
        })
        .return_once(|_, _| {
            Ok(Response::from(InspectContentResponse::new().set_result(
                InspectResult::new().set_findings([phone_finding()]),
            )))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let findings = dlp_samples::inspect::inspect_string::sample(
        &client,
        PARENT,
        "My phone number is 4359916732.",
        &InspectOptions::default(),
    )
    .await?;
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].info_type.as_ref().map(|t| t.name.as_str()),
        Some("PHONE_NUMBER")
    );
    Ok(())
}

#[tokio::test]
async fn inspect_string_no_findings() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_inspect_content()
        .return_once(|_, _| Ok(Response::from(InspectContentResponse::new())));
    let client = dlp::client::DlpService::from_stub(mock);

    let findings = dlp_samples::inspect::inspect_string::sample(
        &client,
        PARENT,
        "nothing to see",
        &InspectOptions::default(),
    )
    .await?;
    assert!(findings.is_empty(), "{findings:?}");
    Ok(())
}

#[tokio::test]
async fn inspect_file_uses_extension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("image.png");
    std::fs::write(&path, b"not really a png")?;

    let mut mock = MockDlp::new();
    mock.expect_inspect_content()
        .withf(|r, _| {
            r.item.as_ref().and_then(|i| i.byte_item()).is_some_and(|b| {
                b.r#type == byte_content_item::BytesType::ImagePng
                    && b.data.as_ref() == b"not really a png"
            })
        })
        .return_once(|_, _| Ok(Response::from(InspectContentResponse::new())));
    let client = dlp::client::DlpService::from_stub(mock);

    dlp_samples::inspect::inspect_file::sample(&client, PARENT, &path, &InspectOptions::default())
        .await?;
    Ok(())
}

#[tokio::test]
async fn inspect_file_missing() {
    let client = dlp::client::DlpService::from_stub(MockDlp::new());
    let got = dlp_samples::inspect::inspect_file::sample(
        &client,
        PARENT,
        std::path::Path::new("/does/not/exist.txt"),
        &InspectOptions::default(),
    )
    .await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn redact_image_writes_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.jpg");
    let output = dir.path().join("output.jpg");
    std::fs::write(&input, b"original")?;

    let mut mock = MockDlp::new();
    mock.expect_redact_image()
        .withf(|r, _| r.image_redaction_configs.len() == 1)
        .return_once(|_, _| {
            Ok(Response::from(
                RedactImageResponse::new().set_redacted_image(bytes::Bytes::from_static(b"redacted")),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::inspect::redact_image::sample(
        &client,
        PARENT,
        &input,
        &output,
        &["PHONE_NUMBER".to_string()],
    )
    .await?;
    assert_eq!(got.as_ref(), b"redacted");
    assert_eq!(std::fs::read(&output)?, b"redacted");
    Ok(())
}

#[tokio::test]
async fn deid_redact() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_deidentify_content()
        .withf(|r, _| {
            let transformation = r
                .deidentify_config
                .as_ref()
                .and_then(|c| c.info_type_transformations())
                .and_then(|t| t.transformations.first());
            transformation.is_some_and(|t| {
                t.info_types.iter().map(|i| i.name.as_str()).eq(["PHONE_NUMBER"])
                    && t.primitive_transformation
                        .as_ref()
                        .is_some_and(|p| p.redact_config().is_some())
            })
        })
        .return_once(|_, _| {
            Ok(Response::from(DeidentifyContentResponse::new().set_item(
                ContentItem::new().set_value("My phone number is ."),
            )))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::deid::redact::sample(
        &client,
        PARENT,
        "My phone number is 4359916732.",
        &["PHONE_NUMBER".to_string()],
    )
    .await?;
    assert_eq!(got, "My phone number is .");
    Ok(())
}

#[tokio::test]
async fn deid_mask() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_deidentify_content()
        .withf(|r, _| {
            r.deidentify_config
                .as_ref()
                .and_then(|c| c.info_type_transformations())
                .and_then(|t| t.transformations.first())
                .and_then(|t| t.primitive_transformation.as_ref())
                .and_then(|p| p.character_mask_config())
                .is_some_and(|m| m.masking_character == "#" && m.number_to_mask == 4)
        })
        .return_once(|_, _| {
            Ok(Response::from(DeidentifyContentResponse::new().set_item(
                ContentItem::new().set_value("My phone number is ####916732."),
            )))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got =
        dlp_samples::deid::mask::sample(&client, PARENT, "My phone number is 4359916732.", '#', 4)
            .await?;
    assert_eq!(got, "My phone number is ####916732.");
    Ok(())
}

#[tokio::test]
async fn reid_fpe_uses_surrogate() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_reidentify_content()
        .withf(|r, _| {
            let surrogate = r
                .inspect_config
                .as_ref()
                .and_then(|c| c.custom_info_types.first())
                .is_some_and(|c| c.surrogate_type().is_some());
            let key = r
                .reidentify_config
                .as_ref()
                .and_then(|c| c.info_type_transformations())
                .and_then(|t| t.transformations.first())
                .and_then(|t| t.primitive_transformation.as_ref())
                .and_then(|p| p.crypto_replace_ffx_fpe_config())
                .and_then(|f| f.crypto_key.as_ref())
                .and_then(|k| k.kms_wrapped())
                .is_some_and(|k| k.crypto_key_name == "test-key" && k.wrapped_key.as_ref() == [1, 2, 3]);
            surrogate && key
        })
        .return_once(|_, _| {
            Ok(Response::from(ReidentifyContentResponse::new().set_item(
                ContentItem::new().set_value("My phone number is 4359916732."),
            )))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let key = dlp_samples::deid::WrappedKey::new("test-key", "AQID");
    let got = dlp_samples::deid::reid_fpe::sample(
        &client,
        PARENT,
        "My phone number is SSN_TOKEN(10):9617256398.",
        &key,
        crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet::Numeric,
        "SSN_TOKEN",
    )
    .await?;
    assert_eq!(got, "My phone number is 4359916732.");
    Ok(())
}

#[tokio::test]
async fn deid_fpe_bad_key() {
    let client = dlp::client::DlpService::from_stub(MockDlp::new());
    let key = dlp_samples::deid::WrappedKey::new("test-key", "%%%");
    let got = dlp_samples::deid::deid_fpe::sample(
        &client,
        PARENT,
        "text",
        &["PHONE_NUMBER".to_string()],
        &key,
        crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet::Numeric,
        "SSN_TOKEN",
    )
    .await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn date_shift_round_trips_csv() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    std::fs::write(&input, "name,birth_date\nAnn,01/02/1980\n")?;

    let mut mock = MockDlp::new();
    mock.expect_deidentify_content()
        .withf(|r, _| {
            let table = r.item.as_ref().and_then(|i| i.table());
            let fields = r
                .deidentify_config
                .as_ref()
                .and_then(|c| c.record_transformations())
                .and_then(|t| t.field_transformations.first())
                .map(|t| t.fields.iter().map(|f| f.name.clone()).collect::<Vec<_>>());
            table.is_some_and(|t| t.rows.len() == 1) && fields == Some(vec!["birth_date".to_string()])
        })
        .return_once(|_, _| {
            let date = google_cloud_type::model::Date::new()
                .set_year(1980)
                .set_month(1)
                .set_day(7);
            let table = Table::new()
                .set_headers([
                    FieldId::new().set_name("name"),
                    FieldId::new().set_name("birth_date"),
                ])
                .set_rows([table::Row::new().set_values([
                    Value::new().set_string_value("Ann"),
                    Value::new().set_date_value(date),
                ])]);
            Ok(Response::from(
                DeidentifyContentResponse::new().set_item(ContentItem::new().set_table(table)),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    dlp_samples::deid::date_shift::sample(
        &client,
        PARENT,
        &input,
        &output,
        -5..=5,
        &["birth_date".to_string()],
        None,
    )
    .await?;
    assert_eq!(std::fs::read_to_string(&output)?, "name,birth_date\nAnn,01/07/1980\n");
    Ok(())
}

#[tokio::test]
async fn list_templates_all_pages() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockDlp::new();
    mock.expect_list_inspect_templates()
        .withf(|r, _| r.parent == PARENT && r.page_token.is_empty())
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListInspectTemplatesResponse::new()
                    .set_inspect_templates([
                        InspectTemplate::new().set_name("t1"),
                        InspectTemplate::new().set_name("t2"),
                    ])
                    .set_next_page_token("page-2"),
            ))
        });
    mock.expect_list_inspect_templates()
        .withf(|r, _| r.page_token == "page-2")
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListInspectTemplatesResponse::new()
                    .set_inspect_templates([InspectTemplate::new().set_name("t3")]),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::templates::list_inspect_templates::sample(&client, PARENT).await?;
    let names: Vec<_> = got.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["t1", "t2", "t3"]);
    Ok(())
}

#[tokio::test]
async fn list_triggers_all_pages() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockDlp::new();
    mock.expect_list_job_triggers()
        .withf(|r, _| r.page_token.is_empty())
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListJobTriggersResponse::new()
                    .set_job_triggers([JobTrigger::new().set_name("a")])
                    .set_next_page_token("next"),
            ))
        });
    mock.expect_list_job_triggers()
        .withf(|r, _| r.page_token == "next")
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListJobTriggersResponse::new().set_job_triggers([JobTrigger::new().set_name("b")]),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::triggers::list_triggers::sample(&client, PARENT).await?;
    let names: Vec<_> = got.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    Ok(())
}

#[tokio::test]
async fn list_jobs_all_pages() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockDlp::new();
    mock.expect_list_dlp_jobs()
        .withf(|r, _| r.page_token.is_empty() && r.r#type == DlpJobType::RiskAnalysisJob)
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListDlpJobsResponse::new()
                    .set_jobs([DlpJob::new().set_name("j1")])
                    .set_next_page_token("next"),
            ))
        });
    mock.expect_list_dlp_jobs()
        .withf(|r, _| r.page_token == "next")
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(Response::from(
                ListDlpJobsResponse::new().set_jobs([DlpJob::new().set_name("j2")]),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got =
        dlp_samples::jobs::list_jobs::sample(&client, PARENT, None, DlpJobType::RiskAnalysisJob)
            .await?;
    let names: Vec<_> = got.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["j1", "j2"]);
    Ok(())
}

#[tokio::test]
async fn delete_template_propagates_errors() {
    let mut mock = MockDlp::new();
    mock.expect_delete_inspect_template()
        .withf(|r, _| r.name == format!("{PARENT}/inspectTemplates/missing"))
        .return_once(|_, _| {
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("template not found");
            Err(Error::service(status))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got =
        dlp_samples::templates::delete_inspect_template::sample(&client, PARENT, "missing").await;
    assert!(got.is_err(), "{got:?}");
}

#[tokio::test]
async fn create_trigger() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_create_job_trigger()
        .withf(|r, _| {
            let Some(trigger) = r.job_trigger.as_ref() else {
                return false;
            };
            let period = trigger
                .triggers
                .first()
                .and_then(|t| t.schedule())
                .and_then(|s| s.recurrence_period_duration())
                .map(|d| d.seconds());
            let auto_populated = trigger
                .inspect_job()
                .and_then(|j| j.storage_config.as_ref())
                .and_then(|s| s.timespan_config.as_ref())
                .is_some_and(|t| t.enable_auto_population_of_timespan_config);
            r.trigger_id == "my-trigger"
                && trigger.status == job_trigger::Status::Healthy
                && period == Some(2 * 24 * 60 * 60)
                && auto_populated
        })
        .return_once(|r, _| {
            Ok(Response::from(
                JobTrigger::new().set_name(format!("{}/jobTriggers/{}", r.parent, r.trigger_id)),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let options = dlp_samples::triggers::create_trigger::TriggerOptions {
        scan_period_days: 2,
        ..Default::default()
    };
    let got = dlp_samples::triggers::create_trigger::sample(
        &client,
        PARENT,
        "my-trigger",
        "gs://bucket/*.txt",
        &options,
    )
    .await?;
    assert_eq!(got.name, format!("{PARENT}/jobTriggers/my-trigger"));
    Ok(())
}

#[tokio::test]
async fn create_trigger_period_out_of_range() {
    let client = dlp::client::DlpService::from_stub(MockDlp::new());
    let options = dlp_samples::triggers::create_trigger::TriggerOptions {
        scan_period_days: 61,
        ..Default::default()
    };
    let got = dlp_samples::triggers::create_trigger::sample(
        &client,
        PARENT,
        "my-trigger",
        "gs://bucket/*.txt",
        &options,
    )
    .await;
    assert!(got.is_err(), "{got:?}");
}

fn source_table() -> SourceTable {
    SourceTable {
        project_id: "bigquery-public-data".into(),
        dataset_id: "samples".into(),
        table_id: "natality".into(),
    }
}

#[tokio::test(start_paused = true)]
async fn risk_job_done() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job()
        .withf(|r, _| {
            r.risk_job()
                .and_then(|j| j.privacy_metric.as_ref())
                .and_then(|m| m.numerical_stats_config())
                .and_then(|c| c.field.as_ref())
                .is_some_and(|f| f.name == "mother_age")
        })
        .return_once(|_, _| {
            Ok(Response::from(
                DlpJob::new()
                    .set_name("projects/test-project/dlpJobs/r-1")
                    .set_state(dlp_job::JobState::Pending),
            ))
        });
    let mut seq = mockall::Sequence::new();
    mock.expect_get_dlp_job()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|r, _| {
            Ok(Response::from(
                DlpJob::new().set_name(r.name).set_state(dlp_job::JobState::Running),
            ))
        });
    mock.expect_get_dlp_job()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|r, _| {
            let result = analyze_data_source_risk_details::NumericalStatsResult::new()
                .set_min_value(Value::new().set_integer_value(15))
                .set_max_value(Value::new().set_integer_value(45))
                .set_quantile_values([
                    Value::new().set_integer_value(15),
                    Value::new().set_integer_value(15),
                    Value::new().set_integer_value(30),
                ]);
            Ok(Response::from(
                DlpJob::new()
                    .set_name(r.name)
                    .set_state(dlp_job::JobState::Done)
                    .set_risk_details(
                        AnalyzeDataSourceRiskDetails::new().set_numerical_stats_result(result),
                    ),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let poll = PollOptions {
        attempts: 5,
        delay: Duration::from_secs(10),
    };
    let got = dlp_samples::risk::numerical_stats::sample(
        &client,
        PARENT,
        &source_table(),
        "mother_age",
        poll,
    )
    .await?;
    let Polled::Done(job) = got else {
        panic!("expected a finished job, got {got:?}");
    };
    assert_eq!(job.state, dlp_job::JobState::Done);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn risk_job_not_finished() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job().return_once(|_, _| {
        Ok(Response::from(
            DlpJob::new()
                .set_name("projects/test-project/dlpJobs/r-2")
                .set_state(dlp_job::JobState::Pending),
        ))
    });
    mock.expect_get_dlp_job().times(3).returning(|r, _| {
        Ok(Response::from(
            DlpJob::new().set_name(r.name).set_state(dlp_job::JobState::Running),
        ))
    });
    let client = dlp::client::DlpService::from_stub(mock);

    let poll = PollOptions {
        attempts: 3,
        delay: Duration::from_secs(10),
    };
    let start = tokio::time::Instant::now();
    let got = dlp_samples::risk::k_anonymity::sample(
        &client,
        PARENT,
        &source_table(),
        &["state".to_string(), "year".to_string()],
        poll,
    )
    .await?;
    assert!(matches!(got, Polled::NotFinished { attempts: 3 }), "{got:?}");
    assert_eq!(start.elapsed(), Duration::from_secs(20));
    Ok(())
}

#[test_case(dlp_job::JobState::Failed)]
#[test_case(dlp_job::JobState::Canceled)]
#[tokio::test(start_paused = true)]
async fn risk_job_not_done(state: dlp_job::JobState) {
    let want = format!("{state:?}");
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job().return_once(|_, _| {
        Ok(Response::from(DlpJob::new().set_name("projects/test-project/dlpJobs/r-3")))
    });
    mock.expect_get_dlp_job().times(1).returning(move |r, _| {
        let error = dlp::model::Error::new().set_details(
            google_cloud_rpc::model::Status::new()
                .set_code(13)
                .set_message("internal error"),
        );
        Ok(Response::from(
            DlpJob::new()
                .set_name(r.name)
                .set_state(state.clone())
                .set_errors([error]),
        ))
    });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::risk::categorical_stats::sample(
        &client,
        PARENT,
        &source_table(),
        "mother_residence_state_abbreviation",
        PollOptions::default(),
    )
    .await;
    let err = got.unwrap_err();
    assert!(err.to_string().contains("projects/test-project/dlpJobs/r-3"), "{err}");
    assert!(err.to_string().contains(&want), "{err}");
}

#[tokio::test(start_paused = true)]
async fn l_diversity() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job()
        .withf(|r, _| {
            r.risk_job()
                .and_then(|j| j.privacy_metric.as_ref())
                .and_then(|m| m.l_diversity_config())
                .is_some_and(|c| {
                    c.quasi_ids.iter().map(|f| f.name.as_str()).eq(["age", "city"])
                        && c.sensitive_attribute.as_ref().is_some_and(|f| f.name == "diagnosis")
                })
        })
        .return_once(|_, _| {
            Ok(Response::from(DlpJob::new().set_name("projects/test-project/dlpJobs/r-4")))
        });
    mock.expect_get_dlp_job().times(1).returning(|r, _| {
        use analyze_data_source_risk_details::l_diversity_result::{
            LDiversityEquivalenceClass, LDiversityHistogramBucket,
        };
        let class = LDiversityEquivalenceClass::new()
            .set_quasi_ids_values([
                Value::new().set_integer_value(42),
                Value::new().set_string_value("Springfield"),
            ])
            .set_equivalence_class_size(3)
            .set_top_sensitive_values([ValueFrequency::new()
                .set_value(Value::new().set_string_value("flu"))
                .set_count(2)]);
        let result = analyze_data_source_risk_details::LDiversityResult::new()
            .set_sensitive_value_frequency_histogram_buckets([LDiversityHistogramBucket::new()
                .set_sensitive_value_frequency_lower_bound(1)
                .set_sensitive_value_frequency_upper_bound(1)
                .set_bucket_values([class])]);
        Ok(Response::from(
            DlpJob::new()
                .set_name(r.name)
                .set_state(dlp_job::JobState::Done)
                .set_risk_details(AnalyzeDataSourceRiskDetails::new().set_l_diversity_result(result)),
        ))
    });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::risk::l_diversity::sample(
        &client,
        PARENT,
        &source_table(),
        &["age".to_string(), "city".to_string()],
        "diagnosis",
        PollOptions::default(),
    )
    .await?;
    let Polled::Done(job) = got else {
        panic!("expected a finished job, got {got:?}");
    };
    let buckets = job
        .risk_details()
        .and_then(|d| d.l_diversity_result())
        .map(|r| r.sensitive_value_frequency_histogram_buckets.len());
    assert_eq!(buckets, Some(1));
    Ok(())
}

fn gcs_job(state: dlp_job::JobState) -> DlpJob {
    let stats = InfoTypeStats::new()
        .set_info_type(InfoType::new().set_name("PHONE_NUMBER"))
        .set_count(7);
    DlpJob::new()
        .set_name("projects/test-project/dlpJobs/i-1")
        .set_state(state)
        .set_inspect_details(
            InspectDataSourceDetails::new().set_result(
                inspect_data_source_details::Result::new().set_info_type_stats([stats]),
            ),
        )
}

#[tokio::test(start_paused = true)]
async fn inspect_gcs_done() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job()
        .withf(|r, _| {
            let url = r
                .inspect_job()
                .and_then(|j| j.storage_config.as_ref())
                .and_then(|s| s.cloud_storage_options())
                .and_then(|o| o.file_set.as_ref())
                .map(|f| f.url.as_str());
            r.parent == PARENT && url == Some("gs://bucket/*.txt")
        })
        .return_once(|_, _| Ok(Response::from(gcs_job(dlp_job::JobState::Pending))));
    let mut seq = mockall::Sequence::new();
    mock.expect_get_dlp_job()
        .withf(|r, _| r.name == "projects/test-project/dlpJobs/i-1")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(Response::from(gcs_job(dlp_job::JobState::Running))));
    mock.expect_get_dlp_job()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(Response::from(gcs_job(dlp_job::JobState::Done))));
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::inspect::inspect_gcs::sample(
        &client,
        PARENT,
        "gs://bucket/*.txt",
        &InspectOptions::default(),
        5,
        Duration::from_secs(10),
    )
    .await?;
    let Polled::Done(job) = got else {
        panic!("expected a finished job, got {got:?}");
    };
    let counts: Vec<_> = job
        .inspect_details()
        .and_then(|d| d.result.as_ref())
        .map(|r| r.info_type_stats.iter().map(|s| s.count).collect())
        .unwrap_or_default();
    assert_eq!(counts, vec![7]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn inspect_gcs_not_finished() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job()
        .return_once(|_, _| Ok(Response::from(gcs_job(dlp_job::JobState::Pending))));
    mock.expect_get_dlp_job()
        .times(2)
        .returning(|_, _| Ok(Response::from(gcs_job(dlp_job::JobState::Running))));
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::inspect::inspect_gcs::sample(
        &client,
        PARENT,
        "gs://bucket/*.txt",
        &InspectOptions::default(),
        2,
        Duration::from_secs(10),
    )
    .await?;
    assert!(matches!(got, Polled::NotFinished { attempts: 2 }), "{got:?}");
    Ok(())
}

#[test_case(dlp_job::JobState::Failed)]
#[test_case(dlp_job::JobState::Canceled)]
#[tokio::test(start_paused = true)]
async fn inspect_gcs_not_done(state: dlp_job::JobState) {
    let mut mock = MockDlp::new();
    mock.expect_create_dlp_job()
        .return_once(|_, _| Ok(Response::from(gcs_job(dlp_job::JobState::Pending))));
    mock.expect_get_dlp_job()
        .times(1)
        .returning(move |_, _| Ok(Response::from(gcs_job(state.clone()))));
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::inspect::inspect_gcs::sample(
        &client,
        PARENT,
        "gs://bucket/*.txt",
        &InspectOptions::default(),
        5,
        Duration::from_secs(10),
    )
    .await;
    let err = got.unwrap_err();
    assert!(err.to_string().contains("projects/test-project/dlpJobs/i-1"), "{err}");
}

#[tokio::test]
async fn inspect_custom_regex() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_inspect_content()
        .withf(|r, _| {
            let custom = r
                .inspect_config
                .as_ref()
                .and_then(|c| c.custom_info_types.first());
            custom.is_some_and(|c| {
                c.info_type.as_ref().is_some_and(|t| t.name == "C_MRN")
                    && c.regex().is_some_and(|x| x.pattern == "[1-9]{3}-[1-9]{1}-[1-9]{5}")
                    && c.likelihood == Likelihood::Possible
            }) && r.inspect_config.as_ref().is_some_and(|c| c.include_quote)
        })
        .return_once(|_, _| {
            let finding = Finding::new()
                .set_quote("444-5-22222")
                .set_info_type(InfoType::new().set_name("C_MRN"))
                .set_likelihood(Likelihood::Possible);
            Ok(Response::from(
                InspectContentResponse::new()
                    .set_result(InspectResult::new().set_findings([finding])),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::inspect::inspect_custom_regex::sample(
        &client,
        PARENT,
        "Patients MRN 444-5-22222",
        "[1-9]{3}-[1-9]{1}-[1-9]{5}",
        "C_MRN",
    )
    .await?;
    let quotes: Vec<_> = got.iter().map(|f| f.quote.as_str()).collect();
    assert_eq!(quotes, vec!["444-5-22222"]);
    Ok(())
}

#[tokio::test]
async fn deid_replace_info_type() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_deidentify_content()
        .withf(|r, _| {
            let inspect = r
                .inspect_config
                .as_ref()
                .is_some_and(|c| c.info_types.iter().map(|t| t.name.as_str()).eq(["EMAIL_ADDRESS"]));
            let replace = r
                .deidentify_config
                .as_ref()
                .and_then(|c| c.info_type_transformations())
                .and_then(|t| t.transformations.first())
                .and_then(|t| t.primitive_transformation.as_ref())
                .is_some_and(|p| p.replace_with_info_type_config().is_some());
            inspect && replace
        })
        .return_once(|_, _| {
            Ok(Response::from(DeidentifyContentResponse::new().set_item(
                ContentItem::new().set_value("My email is [EMAIL_ADDRESS]"),
            )))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::deid::replace_info_type::sample(
        &client,
        PARENT,
        "My email is test@example.com",
        &["EMAIL_ADDRESS".to_string()],
    )
    .await?;
    assert_eq!(got, "My email is [EMAIL_ADDRESS]");
    Ok(())
}

#[tokio::test]
async fn get_job() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_get_dlp_job()
        .withf(|r, _| r.name == format!("{PARENT}/dlpJobs/j-1"))
        .return_once(|r, _| {
            Ok(Response::from(
                DlpJob::new().set_name(r.name).set_state(dlp_job::JobState::Running),
            ))
        });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::jobs::get_job::sample(&client, PARENT, "j-1").await?;
    assert_eq!(got.name, format!("{PARENT}/dlpJobs/j-1"));
    assert_eq!(got.state, dlp_job::JobState::Running);
    Ok(())
}

#[tokio::test]
async fn delete_job() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_delete_dlp_job()
        .withf(|r, _| r.name == "projects/other/dlpJobs/j-2")
        .times(1)
        .return_once(|_, _| Ok(Response::from(())));
    let client = dlp::client::DlpService::from_stub(mock);

    dlp_samples::jobs::delete_job::sample(&client, PARENT, "projects/other/dlpJobs/j-2").await?;
    Ok(())
}

#[tokio::test]
async fn delete_trigger() -> Result<()> {
    let mut mock = MockDlp::new();
    mock.expect_delete_job_trigger()
        .withf(|r, _| r.name == format!("{PARENT}/jobTriggers/my-trigger"))
        .times(1)
        .return_once(|_, _| Ok(Response::from(())));
    let client = dlp::client::DlpService::from_stub(mock);

    dlp_samples::triggers::delete_trigger::sample(&client, PARENT, "my-trigger").await?;
    Ok(())
}

#[tokio::test]
async fn delete_trigger_not_found() {
    let mut mock = MockDlp::new();
    mock.expect_delete_job_trigger().return_once(|_, _| {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("trigger not found");
        Err(Error::service(status))
    });
    let client = dlp::client::DlpService::from_stub(mock);

    let got = dlp_samples::triggers::delete_trigger::sample(&client, PARENT, "missing").await;
    assert!(got.is_err(), "{got:?}");
}
