use crate::{ShapeError, TransformError};
use serde::Deserialize;
use serde_json::{error::Category, Value};

/// A CloudWatch Logs subscription payload, as decoded from a record's `data`.
///
/// Only the first log event is ever read, so the rest are kept as raw JSON
/// and never shape-checked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEnvelope {
  pub log_stream: String,
  pub log_events: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEvent {
  pub message: String,
  /// Milliseconds since the UNIX epoch.
  pub timestamp: i64,
}

impl LogEnvelope {
  /// Parse the decoded record bytes.
  /// Malformed JSON is a [`TransformError::Parse`],
  /// well-formed JSON without the expected fields is a [`TransformError::Shape`].
  pub fn from_slice(bytes: &[u8]) -> Result<Self, TransformError> {
    serde_json::from_slice(bytes).map_err(|e| match e.classify() {
      Category::Data => TransformError::Shape(ShapeError::Field(e)),
      Category::Io | Category::Syntax | Category::Eof => TransformError::Parse(e),
    })
  }

  /// The first log event of the envelope.
  pub fn first_event(&self) -> Result<LogEvent, ShapeError> {
    let first = self.log_events.first().ok_or(ShapeError::EmptyLogEvents)?;
    LogEvent::deserialize(first).map_err(ShapeError::Field)
  }
}
