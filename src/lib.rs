//! Flatten CloudWatch Logs subscription payloads delivered through a
//! Kinesis Data Firehose transformation function.
//!
//! Every incoming record carries a base64 encoded [`LogEnvelope`].
//! The first log event of the envelope is turned into an [`OutputLogRecord`]
//! (`event`, `source`, `sourcetype`, `time`) which replaces the record's `data`.
//!
//! ```
//! use firehose_log_transformer::{BatchProcessorBuilder, FirehoseEvent};
//!
//! let event: FirehoseEvent = serde_json::from_str(r#"{"records": []}"#).unwrap();
//! let response = BatchProcessorBuilder::new().build().process(event).unwrap();
//! assert!(response.records.is_empty());
//! ```

mod batch;
mod encode;
mod envelope;
mod error;
mod output;
mod record;
mod transformer;

pub use batch::*;
pub use encode::{decode_base64, encode_base64, to_ascii_json, AsciiFormatter};
pub use envelope::*;
pub use error::*;
pub use output::*;
pub use record::*;
pub use transformer::*;
