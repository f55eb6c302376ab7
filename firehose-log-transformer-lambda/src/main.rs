use firehose_log_transformer::{
  BatchProcessor, BatchProcessorBuilder, FirehoseEvent, KinesisFirehoseResponse, RecordTransformer,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

/// The deployed processor: a failing record fails the whole invocation.
fn processor() -> BatchProcessor<RecordTransformer> {
  BatchProcessorBuilder::new().build()
}

async fn handler(
  processor: &BatchProcessor<RecordTransformer>,
  event: LambdaEvent<FirehoseEvent>,
) -> Result<KinesisFirehoseResponse, Error> {
  let response = processor.process(event.payload)?;
  tracing::info!(
    request_id = %event.context.request_id,
    records = response.records.len(),
    "batch transformed"
  );
  Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
  // lambda already prefixes every line with a timestamp
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .without_time()
    .init();

  let processor = processor();
  run(service_fn(|event| handler(&processor, event))).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use base64::{engine::general_purpose, Engine};
  use firehose_log_transformer::{FailurePolicy, RESULT_PROCESSING_FAILED};
  use lambda_runtime::Context;
  use serde_json::json;

  fn encode(value: serde_json::Value) -> String {
    general_purpose::STANDARD.encode(value.to_string())
  }

  fn lambda_event(payload: serde_json::Value) -> LambdaEvent<FirehoseEvent> {
    LambdaEvent::new(serde_json::from_value(payload).unwrap(), Context::default())
  }

  #[test]
  fn deployed_processor_aborts() {
    assert_eq!(processor().failure_policy, FailurePolicy::Abort);
  }

  #[tokio::test]
  async fn handler_transforms_batch() {
    let event = lambda_event(json!({
      "invocationId": "inv-1",
      "records": [{
        "recordId": "r1",
        "approximateArrivalTimestamp": 1700000000000u64,
        "data": encode(json!({
          "logEvents": [{ "message": "hello", "timestamp": 1000 }],
          "logStream": "stream-A"
        }))
      }]
    }));

    let response = handler(&processor(), event).await.unwrap();
    let value = serde_json::to_value(&response).unwrap();
    let record = &value["records"][0];
    assert_eq!(value["records"].as_array().unwrap().len(), 1);
    assert_eq!(record["recordId"], "r1");
    assert_eq!(record["result"], "Ok");
    assert_eq!(
      record["data"],
      general_purpose::STANDARD.encode(
        r#"{"event": "hello", "source": "stream-A", "sourcetype": "aws:cloudwatchlogs", "time": "1.0"}"#
      )
    );
  }

  #[tokio::test]
  async fn handler_fails_invocation_on_bad_record() {
    let event = lambda_event(json!({
      "records": [
        { "recordId": "r0", "data": encode(json!({ "logEvents": [{ "message": "m", "timestamp": 1 }], "logStream": "s" })) },
        { "recordId": "r1", "data": encode(json!({ "logEvents": [], "logStream": "s" })) }
      ]
    }));

    let err = handler(&processor(), event).await.unwrap_err();
    assert!(err.to_string().contains("r1"));
  }

  #[tokio::test]
  async fn handler_isolates_bad_record() {
    let processor = BatchProcessorBuilder::new()
      .failure_policy(FailurePolicy::Isolate)
      .build();
    let event = lambda_event(json!({
      "records": [{ "recordId": "r1", "data": encode(json!({ "logEvents": [], "logStream": "s" })) }]
    }));

    let response = handler(&processor, event).await.unwrap();
    assert_eq!(
      response.records[0].result.as_deref(),
      Some(RESULT_PROCESSING_FAILED)
    );
  }
}
