use crate::core::{ConfigProvider, FormSource, ResultSink, Submission};
use crate::domain::model::{
    parse_age, ErrorBody, PredictionRequest, PredictionResponse, SubmitOutcome, WelcomeBody,
};
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::Validate;
use reqwest::Client;
use url::Url;

/// The submit-event handler: reads the eight form fields, posts them as JSON
/// to the predict endpoint, and writes the rendered outcome into the result
/// sink. One best-effort attempt per call; no retries, no timeouts.
pub struct SubmitHandler<F: FormSource, R: ResultSink, C: ConfigProvider> {
    form: F,
    sink: R,
    config: C,
    client: Client,
}

impl<F: FormSource, R: ResultSink, C: ConfigProvider> SubmitHandler<F, R, C> {
    pub fn new(form: F, sink: R, config: C) -> Self {
        Self {
            form,
            sink,
            config,
            client: Client::new(),
        }
    }

    fn field_value(&self, field_id: &str) -> Result<String> {
        self.form
            .value(field_id)
            .ok_or_else(|| PredictError::MissingFieldError {
                field: field_id.to_string(),
            })
    }

    /// Reads the eight inputs and builds the request record. Fails fast on a
    /// missing field, a non-numeric age, or a value outside the form's
    /// choices; nothing goes over the wire in those cases.
    pub fn collect_form(&self) -> Result<PredictionRequest> {
        // 收集表單資料，age 需要轉成數字
        let request = PredictionRequest {
            social_group: self.field_value("social_group")?,
            rural_urban: self.field_value("rural_urban")?,
            state: self.field_value("state")?,
            gender: self.field_value("gender")?,
            age: parse_age("age", &self.field_value("age")?)?,
            internet_access: self.field_value("internet_access")?,
            computer_access: self.field_value("computer_access")?,
            marital_status: self.field_value("marital_status")?,
        };
        request.validate()?;
        Ok(request)
    }

    async fn exchange(&self, request: &PredictionRequest) -> Result<SubmitOutcome> {
        tracing::debug!(
            "Posting prediction request to: {}",
            self.config.predict_endpoint()
        );
        let response = self
            .client
            .post(self.config.predict_endpoint())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            let verdict: PredictionResponse = response.json().await?;
            tracing::debug!(
                "Prediction verdict: status={}, probability={:?}, class={:?}",
                verdict.status,
                verdict.probability,
                verdict.class_label
            );
            Ok(SubmitOutcome::predicted(verdict.status))
        } else {
            let body: ErrorBody = response.json().await?;
            Ok(SubmitOutcome::rejected(body.detail))
        }
    }

    /// GET the service root and return its welcome message.
    pub async fn check_health(&self) -> Result<String> {
        let root = Url::parse(self.config.predict_endpoint())?.join("/")?;
        tracing::debug!("Checking service health at: {}", root);
        let body: WelcomeBody = self.client.get(root).send().await?.json().await?;
        Ok(body.message)
    }
}

#[async_trait::async_trait]
impl<F: FormSource, R: ResultSink, C: ConfigProvider> Submission for SubmitHandler<F, R, C> {
    async fn submit(&self) -> Result<SubmitOutcome> {
        let request = self.collect_form()?;

        // 傳輸或解析失敗都折疊成同一個通用訊息，細節只進日誌
        let outcome = match self.exchange(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Error: {}", e);
                SubmitOutcome::unreachable()
            }
        };

        self.sink.display(&outcome.text())?;
        Ok(outcome)
    }
}
