use crate::utils::error::{PredictError, Result};
use crate::utils::validation::{validate_choice, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The eight input ids the prediction form exposes, in submission order.
pub const FORM_FIELDS: [&str; 8] = [
    "social_group",
    "rural_urban",
    "state",
    "gender",
    "age",
    "internet_access",
    "computer_access",
    "marital_status",
];

// 表單下拉選單的選項（與服務端的編碼映射一致）
pub const SOCIAL_GROUPS: [&str; 4] = [
    "Scheduled Tribes",
    "Scheduled Castes",
    "Other Backward Classes",
    "Others",
];
pub const RURAL_URBAN: [&str; 2] = ["Rural", "Urban"];
pub const GENDERS: [&str; 2] = ["Male", "Female"];
pub const MARITAL_STATUSES: [&str; 3] = ["Single", "Married", "Widowed"];
pub const YES_NO: [&str; 2] = ["Yes", "No"];

/// States the service's region mapping recognizes.
pub const STATES: [&str; 36] = [
    "Jammu & Kashmir",
    "Himachal Pradesh",
    "Punjab",
    "Chandigarh",
    "Uttarakhand",
    "Haryana",
    "Delhi",
    "Rajasthan",
    "Uttar Pradesh",
    "Bihar",
    "Sikkim",
    "Arunachal Pradesh",
    "Nagaland",
    "Manipur",
    "Mizoram",
    "Tripura",
    "Meghalaya",
    "Assam",
    "West Bengal",
    "Jharkhand",
    "Odisha",
    "Chhattisgarh",
    "Madhya Pradesh",
    "Gujarat",
    "Daman & Diu",
    "Dadara and Nagar Haveli",
    "Maharashtra",
    "Andhra Pradesh",
    "Karnataka",
    "Goa",
    "Lakshadweep",
    "Kerala",
    "Tamil Nadu",
    "Pondicherry",
    "Andaman and Nicobar Islands",
    "Telangana",
];

/// One prediction request: seven categorical fields plus a numeric age.
/// Serializes to exactly the eight keys the predict endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub social_group: String,
    pub rural_urban: String,
    pub state: String,
    pub gender: String,
    pub age: u32,
    pub internet_access: String,
    pub computer_access: String,
    pub marital_status: String,
}

impl Validate for PredictionRequest {
    fn validate(&self) -> Result<()> {
        validate_choice("social_group", &self.social_group, &SOCIAL_GROUPS)?;
        validate_choice("rural_urban", &self.rural_urban, &RURAL_URBAN)?;
        validate_choice("state", &self.state, &STATES)?;
        validate_choice("gender", &self.gender, &GENDERS)?;
        validate_choice("internet_access", &self.internet_access, &YES_NO)?;
        validate_choice("computer_access", &self.computer_access, &YES_NO)?;
        validate_choice("marital_status", &self.marital_status, &MARITAL_STATUSES)?;
        Ok(())
    }
}

/// Success body from the predict endpoint. Only `status` is rendered; the
/// service also reports the raw probability and the thresholded class, which
/// we keep for debug logging.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub status: String,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default, rename = "class")]
    pub class_label: Option<i64>,
}

/// Error body from the predict endpoint (FastAPI convention).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Welcome body from the service root.
#[derive(Debug, Clone, Deserialize)]
pub struct WelcomeBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Verdict {
    /// 2xx response carrying a `status`.
    Predicted(String),
    /// Non-2xx response carrying a `detail`.
    Rejected(String),
    /// Transport or parse failure; details only in the log.
    Unreachable,
}

/// Resolved outcome of one submission, with the exact text written to the
/// result sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub verdict: Verdict,
    pub resolved_at: DateTime<Utc>,
}

impl SubmitOutcome {
    pub fn predicted(status: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Predicted(status.into()),
            resolved_at: Utc::now(),
        }
    }

    pub fn rejected(detail: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Rejected(detail.into()),
            resolved_at: Utc::now(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            verdict: Verdict::Unreachable,
            resolved_at: Utc::now(),
        }
    }

    pub fn text(&self) -> String {
        match &self.verdict {
            Verdict::Predicted(status) => {
                format!("This individual is predicted to be: {}", status)
            }
            Verdict::Rejected(detail) => format!("Error: {}", detail),
            Verdict::Unreachable => "Error connecting to the server.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.verdict, Verdict::Predicted(_))
    }
}

pub fn parse_age(field: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| PredictError::InvalidFieldValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Value must be a non-negative whole number".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            social_group: "Others".to_string(),
            rural_urban: "Urban".to_string(),
            state: "Kerala".to_string(),
            gender: "Female".to_string(),
            age: 34,
            internet_access: "Yes".to_string(),
            computer_access: "No".to_string(),
            marital_status: "Married".to_string(),
        }
    }

    #[test]
    fn test_request_serializes_eight_keys_with_numeric_age() {
        let value = serde_json::to_value(sample_request()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 8);
        for field in FORM_FIELDS {
            assert!(obj.contains_key(field), "missing key: {}", field);
        }

        // Age must go over the wire as a number, not a string
        assert_eq!(obj.get("age").unwrap(), &serde_json::json!(34));
        assert!(obj.get("age").unwrap().is_number());
        assert!(obj.get("gender").unwrap().is_string());
    }

    #[test]
    fn test_request_validation_accepts_form_choices() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_request_validation_accepts_any_parsed_age() {
        // The service bins any age (>60 is its top bracket); the numeric
        // parse is the only constraint on this field
        let mut request = sample_request();
        request.age = 130;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation_rejects_unknown_state() {
        let mut request = sample_request();
        request.state = "Atlantis".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_parse_age_coerces_string_to_number() {
        assert_eq!(parse_age("age", "34").unwrap(), 34);
        assert_eq!(parse_age("age", " 34 ").unwrap(), 34);
        assert!(parse_age("age", "abc").is_err());
        assert!(parse_age("age", "-1").is_err());
        assert!(parse_age("age", "34.5").is_err());
    }

    #[test]
    fn test_outcome_rendering() {
        assert_eq!(
            SubmitOutcome::predicted("Literate").text(),
            "This individual is predicted to be: Literate"
        );
        assert_eq!(
            SubmitOutcome::rejected("bad input").text(),
            "Error: bad input"
        );
        assert_eq!(
            SubmitOutcome::unreachable().text(),
            "Error connecting to the server."
        );
    }

    #[test]
    fn test_minimal_success_body_parses() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status": "Literate"}"#).unwrap();
        assert_eq!(response.status, "Literate");
        assert!(response.probability.is_none());
        assert!(response.class_label.is_none());
    }

    #[test]
    fn test_full_success_body_parses() {
        let body = r#"{"probability": 0.82, "class": 1, "status": "Literate"}"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "Literate");
        assert_eq!(response.probability, Some(0.82));
        assert_eq!(response.class_label, Some(1));
    }
}
