use serde_json::Value;

use crate::soap::SoapError;

pub const SUCCESS_TEXT: &str = "Login successful! User found.";
pub const REJECTED_TEXT: &str = "Login failed: Invalid credentials";
pub const ERROR_PREFIX: &str = "Error: ";

/// What a successfully transported `Login` call means for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated { entity: Value },
    Rejected { raw: String },
}

impl LoginOutcome {
    /// The reply counts as a login only if it is a JSON object with a truthy `EntityId`.
    pub fn interpret(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(entity) if has_entity_id(&entity) => LoginOutcome::Authenticated { entity },
            _ => LoginOutcome::Rejected { raw },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated { .. })
    }
}

fn has_entity_id(v: &Value) -> bool {
    v.get("EntityId").is_some_and(is_truthy)
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(..) | Value::Object(..) => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Danger,
}

impl MessageKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "alert-success",
            MessageKind::Danger => "alert-danger",
        }
    }
}

/// Content of the message region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    pub details: Option<String>,
}

impl Message {
    pub fn new(kind: MessageKind, text: impl Into<String>, details: Option<String>) -> Self {
        Self { kind, text: text.into(), details }
    }

    pub fn from_result(result: &Result<LoginOutcome, SoapError>) -> Self {
        match result {
            Ok(LoginOutcome::Authenticated { entity }) => Message::new(
                MessageKind::Success,
                SUCCESS_TEXT,
                Some(pretty_details(entity)),
            ),
            Ok(LoginOutcome::Rejected { raw }) => Message::new(
                MessageKind::Danger,
                REJECTED_TEXT,
                Some(raw.clone()),
            ),
            Err(e) => Message::new(MessageKind::Danger, format!("{}{}", ERROR_PREFIX, e), None),
        }
    }
}

// 2-space indent like `JSON.stringify(v, null, 2)`
fn pretty_details(entity: &Value) -> String {
    let entity = whole_floats_as_integers(entity);
    serde_json::to_string_pretty(&entity).unwrap_or_else(|_| entity.to_string())
}

/// JavaScript has one number type and prints `1.0` as `1`.
fn whole_floats_as_integers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&f) => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(whole_floats_as_integers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), whole_floats_as_integers(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
