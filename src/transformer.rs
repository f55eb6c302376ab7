mod simple;

use crate::{InputRecord, KinesisFirehoseResponseRecord, TransformError};

pub use simple::*;

/// Turn one incoming record into one outgoing record.
///
/// Implementations must not depend on other records of the batch:
/// records are transformed independently and in order.
/// Any `Fn(&InputRecord) -> Result<KinesisFirehoseResponseRecord, TransformError>` is a transformer.
pub trait Transformer {
  fn transform(&self, record: &InputRecord) -> Result<KinesisFirehoseResponseRecord, TransformError>;
}

impl<F> Transformer for F
where
  F: Fn(&InputRecord) -> Result<KinesisFirehoseResponseRecord, TransformError>,
{
  fn transform(&self, record: &InputRecord) -> Result<KinesisFirehoseResponseRecord, TransformError> {
    self(record)
  }
}
