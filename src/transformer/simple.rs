use super::Transformer;
use crate::{
  encode::decode_base64, ok_record, InputRecord, KinesisFirehoseResponseRecord, LogEnvelope, OutputLogRecord,
  TransformError,
};

/// Flatten the first CloudWatch Logs event of a record into an [`OutputLogRecord`].
///
/// `data` is base64-decoded and parsed as a [`LogEnvelope`]. The first log event
/// becomes the new payload, any further events are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordTransformer;

impl Transformer for RecordTransformer {
  fn transform(&self, record: &InputRecord) -> Result<KinesisFirehoseResponseRecord, TransformError> {
    let bytes = decode_base64(&record.data)?;
    let envelope = LogEnvelope::from_slice(&bytes)?;
    let event = envelope.first_event()?;
    let data = OutputLogRecord::new(event, envelope.log_stream).to_json()?;
    Ok(ok_record(record.record_id.as_str(), data))
  }
}
