use aws_lambda_events::encodings::Base64Data;
use aws_lambda_events::firehose::KinesisFirehoseResponseRecordMetadata;
use serde::Deserialize;

pub use aws_lambda_events::firehose::{KinesisFirehoseResponse, KinesisFirehoseResponseRecord};

/// `result` of a successfully transformed record.
pub const RESULT_OK: &str = "Ok";
/// `result` of a record that could not be transformed.
pub const RESULT_PROCESSING_FAILED: &str = "ProcessingFailed";

/// The payload a Kinesis Data Firehose delivery stream sends to its transformation function.
///
/// Fields the transform never reads are ignored rather than rejected.
/// `data` stays a string: decoding it is part of the per-record transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseEvent {
  #[serde(default)]
  pub invocation_id: Option<String>,
  #[serde(default)]
  pub delivery_stream_arn: Option<String>,
  #[serde(default)]
  pub region: Option<String>,
  pub records: Vec<InputRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
  /// Opaque identifier, echoed back unchanged.
  pub record_id: String,
  /// Base64 encoded payload.
  pub data: String,
}

/// A successfully transformed record. `data` is base64-encoded on serialization.
pub fn ok_record(record_id: impl Into<String>, data: Vec<u8>) -> KinesisFirehoseResponseRecord {
  KinesisFirehoseResponseRecord {
    record_id: Some(record_id.into()),
    result: Some(RESULT_OK.to_string()),
    data: Base64Data(data),
    metadata: KinesisFirehoseResponseRecordMetadata {
      partition_keys: Default::default(),
    },
  }
}

/// A failed record. The delivery stream still requires `data`, so the input
/// payload is echoed back, or left empty when it is not valid base64.
pub fn failed_record(input: &InputRecord) -> KinesisFirehoseResponseRecord {
  KinesisFirehoseResponseRecord {
    record_id: Some(input.record_id.clone()),
    result: Some(RESULT_PROCESSING_FAILED.to_string()),
    data: Base64Data(crate::decode_base64(&input.data).unwrap_or_default()),
    metadata: KinesisFirehoseResponseRecordMetadata {
      partition_keys: Default::default(),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn deserialize_event_ignores_unknown_fields() {
    let event: FirehoseEvent = serde_json::from_value(json!({
      "invocationId": "inv-1",
      "deliveryStreamArn": "arn:aws:firehose:us-east-1:123456789012:deliverystream/logs",
      "region": "us-east-1",
      "records": [
        {
          "recordId": "r1",
          "approximateArrivalTimestamp": 1700000000000u64,
          "data": "e30=",
          "kinesisRecordMetadata": { "shardId": "shardId-000000000000" }
        }
      ]
    }))
    .unwrap();

    assert_eq!(event.invocation_id.as_deref(), Some("inv-1"));
    assert_eq!(event.region.as_deref(), Some("us-east-1"));
    assert_eq!(
      event.records,
      vec![InputRecord {
        record_id: "r1".to_string(),
        data: "e30=".to_string(),
      }]
    );
  }

  #[test]
  fn deserialize_event_with_only_records() {
    let event: FirehoseEvent = serde_json::from_str(r#"{"records":[]}"#).unwrap();
    assert_eq!(event, FirehoseEvent::default());
  }

  #[test]
  fn undecodable_data_still_deserializes() {
    let event: FirehoseEvent =
      serde_json::from_str(r#"{"records":[{"recordId":"r1","data":"not base64!"}]}"#).unwrap();
    assert_eq!(event.records[0].data, "not base64!");
  }

  #[test]
  fn deserialize_event_requires_record_id() {
    let result = serde_json::from_str::<FirehoseEvent>(r#"{"records":[{"data":"e30="}]}"#);
    assert!(result.is_err());
  }

  #[test]
  fn serialize_ok_record() {
    let response = KinesisFirehoseResponse {
      records: vec![ok_record("r1", b"{}".to_vec())],
    };
    let value = serde_json::to_value(&response).unwrap();
    let record = &value["records"][0];
    assert_eq!(record["recordId"], "r1");
    assert_eq!(record["result"], "Ok");
    assert_eq!(record["data"], "e30=");
  }

  #[test]
  fn failed_record_echoes_input() {
    let input = InputRecord {
      record_id: "r2".to_string(),
      data: "bm90IGpzb24=".to_string(),
    };
    let output = failed_record(&input);
    assert_eq!(output.record_id.as_deref(), Some("r2"));
    assert_eq!(output.result.as_deref(), Some("ProcessingFailed"));
    assert_eq!(serde_json::to_value(&output).unwrap()["data"], "bm90IGpzb24=");
  }

  #[test]
  fn failed_record_with_undecodable_data() {
    let input = InputRecord {
      record_id: "r3".to_string(),
      data: "abc".to_string(),
    };
    let output = failed_record(&input);
    assert!(output.data.0.is_empty());
    assert_eq!(output.result.as_deref(), Some(RESULT_PROCESSING_FAILED));
  }
}
