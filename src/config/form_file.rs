use crate::core::FormSource;
use crate::utils::error::{PredictError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Form values loaded from a flat TOML file, one key per input id:
///
/// ```toml
/// social_group = "Others"
/// rural_urban = "Urban"
/// state = "Kerala"
/// gender = "Female"
/// age = 34
/// internet_access = "Yes"
/// computer_access = "No"
/// marital_status = "Married"
/// ```
///
/// Scalar values are stringified, so `age = 34` and `age = "34"` go through
/// the same numeric coercion as the `--age` flag.
#[derive(Debug, Clone)]
pub struct TomlForm {
    fields: HashMap<String, String>,
}

impl TomlForm {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let table: HashMap<String, toml::Value> = toml::from_str(raw)?;

        let mut fields = HashMap::new();
        for (key, value) in table {
            let rendered = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(PredictError::ConfigError {
                        message: format!(
                            "Unsupported TOML value for form field '{}': {}",
                            key, other
                        ),
                    })
                }
            };
            fields.insert(key, rendered);
        }

        Ok(Self { fields })
    }
}

impl FormSource for TomlForm {
    fn value(&self, field_id: &str) -> Option<String> {
        self.fields.get(field_id).cloned()
    }
}
