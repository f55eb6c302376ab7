mod builder;

use crate::{failed_record, BatchError, FirehoseEvent, KinesisFirehoseResponse, Transformer};
use tracing::{debug, error, warn};

pub use builder::*;

/// What to do when one record of a batch cannot be transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
  /// Reject the whole invocation. No record of the batch is returned.
  #[default]
  Abort,
  /// Return the failing record as `ProcessingFailed` and carry on.
  Isolate,
}

/// Apply a [`Transformer`] to every record of a [`FirehoseEvent`].
/// To create this, use [`BatchProcessorBuilder`].
pub struct BatchProcessor<T> {
  /// See [`BatchProcessorBuilder::transformer`].
  pub transformer: T,
  /// See [`BatchProcessorBuilder::failure_policy`].
  pub failure_policy: FailurePolicy,
}

impl<T: Transformer> BatchProcessor<T> {
  /// Transform the records one by one, in order.
  /// The response always has as many records as the event, in the same order.
  pub fn process(&self, event: FirehoseEvent) -> Result<KinesisFirehoseResponse, BatchError> {
    debug!(
      invocation_id = event.invocation_id.as_deref().unwrap_or_default(),
      records = event.records.len(),
      "processing batch"
    );

    let mut records = Vec::with_capacity(event.records.len());
    for (index, record) in event.records.iter().enumerate() {
      debug!(record_id = %record.record_id, index, "transforming record");
      match self.transformer.transform(record) {
        Ok(output) => records.push(output),
        Err(source) => match self.failure_policy {
          FailurePolicy::Abort => {
            error!(record_id = %record.record_id, index, error = %source, "aborting batch");
            return Err(BatchError::Record {
              record_id: record.record_id.clone(),
              index,
              source,
            });
          }
          FailurePolicy::Isolate => {
            warn!(record_id = %record.record_id, index, error = %source, "record failed");
            records.push(failed_record(record));
          }
        },
      }
    }

    Ok(KinesisFirehoseResponse { records })
  }
}
