#[cfg(feature = "cli")]
use crate::config::CliConfig;
use crate::core::{FormSource, ResultSink};
use crate::utils::error::{PredictError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Form values taken from the CLI flags.
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct ArgsForm {
    fields: HashMap<String, String>,
}

#[cfg(feature = "cli")]
impl ArgsForm {
    pub fn from_config(config: &CliConfig) -> Self {
        let mut fields = HashMap::new();
        for (field, value) in config.form_args() {
            if let Some(value) = value {
                fields.insert(field.to_string(), value.clone());
            }
        }
        Self { fields }
    }
}

#[cfg(feature = "cli")]
impl FormSource for ArgsForm {
    fn value(&self, field_id: &str) -> Option<String> {
        self.fields.get(field_id).cloned()
    }
}

/// Prints the outcome text to stdout and retains the last rendered line, the
/// way the page's result element holds whatever was written most recently.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    last: Arc<Mutex<Option<String>>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_text(&self) -> Option<String> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl ResultSink for ConsoleSink {
    fn display(&self, text: &str) -> Result<()> {
        println!("{}", text);
        let mut last = self.last.lock().map_err(|_| PredictError::SinkError {
            message: "result display state is poisoned".to_string(),
        })?;
        *last = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "cli")]
    #[test]
    fn test_args_form_exposes_only_present_flags() {
        let config = CliConfig {
            endpoint: "http://127.0.0.1:8000/predict".to_string(),
            form_file: None,
            social_group: Some("Others".to_string()),
            rural_urban: None,
            state: None,
            gender: None,
            age: Some("34".to_string()),
            internet_access: None,
            computer_access: None,
            marital_status: None,
            health: false,
            verbose: false,
            monitor: false,
        };

        let form = ArgsForm::from_config(&config);
        assert_eq!(form.value("social_group"), Some("Others".to_string()));
        assert_eq!(form.value("age"), Some("34".to_string()));
        assert_eq!(form.value("gender"), None);
    }

    #[test]
    fn test_console_sink_keeps_last_text() {
        let sink = ConsoleSink::new();
        assert_eq!(sink.last_text(), None);

        sink.display("first").unwrap();
        sink.display("second").unwrap();
        assert_eq!(sink.last_text(), Some("second".to_string()));
    }

    #[test]
    fn test_console_sink_clones_share_state() {
        let sink = ConsoleSink::new();
        let observer = sink.clone();

        sink.display("Error: bad input").unwrap();
        assert_eq!(observer.last_text(), Some("Error: bad input".to_string()));
    }
}
