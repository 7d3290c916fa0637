use serde_json::Value;

/// One fetched JSON document. The sequencer never looks inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// True when the payload is an object carrying `key`, whatever its value.
    pub fn has_key(&self, key: &str) -> bool {
        self.0
            .as_object()
            .is_some_and(|object| object.contains_key(key))
    }

    pub(crate) fn str_at(&self, path: &[&str]) -> Option<&str> {
        path.iter()
            .try_fold(&self.0, |value, key| value.get(key))
            .and_then(Value::as_str)
    }
}

/// Why a step could not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fetching {locator} failed: {reason}")]
pub struct FetchFailure {
    pub locator: String,
    pub reason: String,
    /// Raw response body, when the server sent one.
    pub body: Option<String>,
}

impl FetchFailure {
    pub fn new(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            reason: reason.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
