pub mod cli;
pub mod form_file;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_required_field, validate_url,
    Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "literacy-predict")]
#[command(about = "Submit a literacy prediction request to the classifier service")]
pub struct CliConfig {
    #[arg(long, default_value = "http://127.0.0.1:8000/predict")]
    pub endpoint: String,

    #[arg(long, help = "Read the form fields from a flat TOML file")]
    pub form_file: Option<String>,

    #[arg(long)]
    pub social_group: Option<String>,

    #[arg(long)]
    pub rural_urban: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long, help = "Age in years; coerced to a number on submission")]
    pub age: Option<String>,

    #[arg(long)]
    pub internet_access: Option<String>,

    #[arg(long)]
    pub computer_access: Option<String>,

    #[arg(long)]
    pub marital_status: Option<String>,

    #[arg(long, help = "Only check the service root and exit")]
    pub health: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The eight form flags paired with their input ids.
    pub fn form_args(&self) -> [(&'static str, &Option<String>); 8] {
        [
            ("social_group", &self.social_group),
            ("rural_urban", &self.rural_urban),
            ("state", &self.state),
            ("gender", &self.gender),
            ("age", &self.age),
            ("internet_access", &self.internet_access),
            ("computer_access", &self.computer_access),
            ("marital_status", &self.marital_status),
        ]
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn predict_endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;

        if self.health {
            return Ok(());
        }

        // 表單檔案模式：欄位完整性在提交時檢查
        if let Some(path) = &self.form_file {
            validate_non_empty_string("form_file", path)?;
            validate_file_extension("form_file", path, &["toml"])?;
            return Ok(());
        }

        for (field, value) in self.form_args() {
            validate_required_field(field, value)?;
        }
        Ok(())
    }
}
