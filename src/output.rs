use crate::{encode::to_ascii_json, LogEvent, TransformError};
use serde::Serialize;

/// The `sourcetype` stamped on every produced record.
pub const SOURCETYPE: &str = "aws:cloudwatchlogs";

/// The flattened record handed to the downstream consumer.
/// Field order is part of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLogRecord {
  pub event: String,
  pub source: String,
  pub sourcetype: &'static str,
  pub time: String,
}

impl OutputLogRecord {
  pub fn new(event: LogEvent, source: String) -> Self {
    OutputLogRecord {
      time: format_time(event.timestamp),
      event: event.message,
      source,
      sourcetype: SOURCETYPE,
    }
  }

  /// Serialize with [`AsciiFormatter`](crate::AsciiFormatter).
  /// The bytes are base64-encoded when the response record is serialized.
  pub fn to_json(&self) -> Result<Vec<u8>, TransformError> {
    to_ascii_json(self).map_err(TransformError::Encode)
  }
}

/// Convert an epoch-milliseconds timestamp to decimal seconds.
///
/// The division is done in floating point and rendered as the shortest
/// decimal that round-trips, always with a fractional part:
/// `1700000000000` is `"1700000000.0"`, `1500` is `"1.5"`.
pub fn format_time(timestamp_ms: i64) -> String {
  let seconds = timestamp_ms as f64 / 1000.0;
  let mut time = seconds.to_string();
  if !time.contains('.') {
    time.push_str(".0");
  }
  time
}
