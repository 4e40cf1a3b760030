//! Interpretation of the support service's loosely-shaped response bodies.

use serde::Serialize;
use serde_json::Value;

/// Field names that may carry the supportive message, in priority order.
const MESSAGE_FIELDS: [&str; 2] = ["supportive", "text"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Support {
    pub message: String,
    pub affirmations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupportShape {
    Structured {
        message: String,
        affirmations: Vec<String>,
    },
    Text(String),
    Unrecognized(Value),
}

impl SupportShape {
    /// Picks the nested `support` payload when it is present and truthy,
    /// otherwise the whole body.
    pub fn from_body(body: &Value) -> Self {
        let payload = match body.get("support") {
            Some(nested) if is_truthy(nested) => nested,
            _ => body,
        };
        Self::from_payload(payload)
    }

    pub fn from_payload(payload: &Value) -> Self {
        match payload {
            Value::String(text) if !text.is_empty() => SupportShape::Text(text.clone()),
            Value::Object(fields) => {
                let message = MESSAGE_FIELDS
                    .iter()
                    .filter_map(|name| fields.get(*name))
                    .find(|value| is_truthy(value))
                    .map(message_text);
                match message {
                    Some(message) => SupportShape::Structured {
                        message,
                        affirmations: affirmations_of(payload),
                    },
                    None => SupportShape::Unrecognized(payload.clone()),
                }
            }
            other => SupportShape::Unrecognized(other.clone()),
        }
    }

    pub fn into_support(self, sentiment: Option<String>) -> Support {
        let (message, affirmations) = match self {
            SupportShape::Structured {
                message,
                affirmations,
            } => (message, affirmations),
            SupportShape::Text(text) => (text, Vec::new()),
            SupportShape::Unrecognized(raw) => (raw.to_string(), affirmations_of(&raw)),
        };
        Support {
            message,
            affirmations,
            sentiment,
        }
    }
}

impl Support {
    pub fn from_body(body: &Value) -> Self {
        SupportShape::from_body(body).into_support(sentiment_of(body))
    }
}

fn sentiment_of(body: &Value) -> Option<String> {
    body.get("analysis")?
        .get("sentiment")?
        .as_str()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn affirmations_of(payload: &Value) -> Vec<String> {
    match payload.get("affirmations") {
        Some(Value::Array(items)) => items.iter().map(message_text).collect(),
        _ => Vec::new(),
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
