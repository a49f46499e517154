use httpmock::prelude::*;
use literacy_predict::{ConsoleSink, PredictEngine, SubmitHandler, TomlForm};
use std::io::Write;
use tempfile::NamedTempFile;

struct EndpointConfig {
    endpoint: String,
}

impl literacy_predict::core::ConfigProvider for EndpointConfig {
    fn predict_endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[tokio::test]
async fn test_toml_form_submission_sends_numeric_age() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
social_group = "Other Backward Classes"
rural_urban = "Urban"
state = "Tamil Nadu"
gender = "Female"
age = "34"
internet_access = "Yes"
computer_access = "Yes"
marital_status = "Single"
"#
    )
    .unwrap();

    let server = MockServer::start();

    // The file carries age as the string "34"; the wire body must be numeric
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(serde_json::json!({
                "social_group": "Other Backward Classes",
                "rural_urban": "Urban",
                "state": "Tamil Nadu",
                "gender": "Female",
                "age": 34,
                "internet_access": "Yes",
                "computer_access": "Yes",
                "marital_status": "Single"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "Literate"}));
    });

    let form = TomlForm::from_path(file.path()).unwrap();
    let sink = ConsoleSink::new();
    let handler = SubmitHandler::new(
        form,
        sink.clone(),
        EndpointConfig {
            endpoint: server.url("/predict"),
        },
    );

    let engine = PredictEngine::new(handler);
    let outcome = engine.run().await.unwrap();

    api_mock.assert();
    assert!(outcome.is_success());
    assert_eq!(
        sink.last_text().unwrap(),
        "This individual is predicted to be: Literate"
    );
}

#[tokio::test]
async fn test_incomplete_form_file_fails_before_any_request() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
social_group = "Others"
age = 34
"#
    )
    .unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .json_body(serde_json::json!({"status": "Literate"}));
    });

    let form = TomlForm::from_path(file.path()).unwrap();
    let sink = ConsoleSink::new();
    let handler = SubmitHandler::new(
        form,
        sink.clone(),
        EndpointConfig {
            endpoint: server.url("/predict"),
        },
    );

    let engine = PredictEngine::new(handler);
    let result = engine.run().await;

    assert!(result.is_err());
    assert_eq!(sink.last_text(), None);
    api_mock.assert_hits(0);
}
