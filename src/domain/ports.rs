use crate::domain::model::SubmitOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of raw form values, keyed by input id. The analog of reading
/// `element.value` off the page: values come back as strings and any numeric
/// coercion happens in the handler.
pub trait FormSource: Send + Sync {
    fn value(&self, field_id: &str) -> Option<String>;
}

impl FormSource for Box<dyn FormSource> {
    fn value(&self, field_id: &str) -> Option<String> {
        (**self).value(field_id)
    }
}

/// Destination for the outcome text. Each call overwrites whatever was
/// displayed before; overlapping submissions are last-writer-wins.
pub trait ResultSink: Send + Sync {
    fn display(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn predict_endpoint(&self) -> &str;
}

#[async_trait]
pub trait Submission: Send + Sync {
    async fn submit(&self) -> Result<SubmitOutcome>;
}
