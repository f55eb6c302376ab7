use super::{BatchProcessor, FailurePolicy};
use crate::RecordTransformer;

pub struct BatchProcessorBuilder<T> {
  /// See [`Self::transformer`].
  pub transformer: T,
  /// See [`Self::failure_policy`].
  pub failure_policy: FailurePolicy,
}

impl BatchProcessorBuilder<RecordTransformer> {
  /// Create a new [`BatchProcessorBuilder`] with the [`RecordTransformer`]
  /// and the [`Abort`](FailurePolicy::Abort) policy.
  pub fn new() -> Self {
    Self {
      transformer: RecordTransformer,
      failure_policy: FailurePolicy::default(),
    }
  }
}

impl Default for BatchProcessorBuilder<RecordTransformer> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> BatchProcessorBuilder<T> {
  /// Set the record transformer.
  pub fn transformer<N>(self, transformer: N) -> BatchProcessorBuilder<N> {
    BatchProcessorBuilder {
      transformer,
      failure_policy: self.failure_policy,
    }
  }

  /// Set what happens when a record fails.
  pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
    self.failure_policy = policy;
    self
  }

  pub fn build(self) -> BatchProcessor<T> {
    BatchProcessor {
      transformer: self.transformer,
      failure_policy: self.failure_policy,
    }
  }
}
