pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::ArgsForm, CliConfig};

pub use config::cli::ConsoleSink;
pub use config::form_file::TomlForm;
pub use crate::core::{engine::PredictEngine, handler::SubmitHandler};
pub use domain::model::{PredictionRequest, SubmitOutcome, Verdict};
pub use utils::error::{PredictError, Result};
