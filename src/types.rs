use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Payload = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub payload: Payload,
}

impl TestCase {
    pub fn new<S: Into<String>>(name: S, fields: &[(&str, &str)]) -> Self {
        let payload = fields
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self {
            name: name.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub json: Option<Value>,
}

impl ResponseRecord {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: String) -> Self {
        let json = serde_json::from_str(&body).ok();
        Self {
            status,
            headers,
            body,
            json,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// HTTP status and JSON-ness are judged independently.
    pub fn outcome(&self) -> Outcome {
        match (self.is_success(), &self.json) {
            (true, Some(v)) => Outcome::Success(v.clone()),
            (true, None) => Outcome::SuccessNonJson,
            (false, Some(v)) => Outcome::ErrorDetails(v.clone()),
            (false, None) => Outcome::RawError(self.body.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    SuccessNonJson,
    ErrorDetails(Value),
    RawError(String),
    NetworkError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_) | Outcome::SuccessNonJson)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: Outcome,
}
