/// Why a single record could not be transformed.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
  /// The record `data` is not valid standard base64.
  #[error("record data is not valid base64: {0}")]
  Decode(#[from] base64::DecodeError),
  /// The decoded bytes are not a JSON document.
  #[error("record data is not valid JSON: {0}")]
  Parse(serde_json::Error),
  /// The JSON document is not a log envelope we can read.
  #[error("log envelope has an unexpected shape: {0}")]
  Shape(#[from] ShapeError),
  #[error("failed to serialize log record: {0}")]
  Encode(serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
  /// `logEvents` is present but holds no event.
  #[error("`logEvents` is empty")]
  EmptyLogEvents,
  /// A required field is missing or has the wrong type.
  #[error(transparent)]
  Field(serde_json::Error),
}

/// An invocation-level failure. The whole batch is rejected.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
  #[error("record {record_id} (index {index}) failed: {source}")]
  Record {
    record_id: String,
    index: usize,
    #[source]
    source: TransformError,
  },
}
