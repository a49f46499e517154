pub mod engine;
pub mod handler;

pub use crate::domain::model::{PredictionRequest, PredictionResponse, SubmitOutcome, Verdict};
pub use crate::domain::ports::{ConfigProvider, FormSource, ResultSink, Submission};
pub use crate::utils::error::Result;
