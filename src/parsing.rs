//! Notification parsing and detection-result projection.

use aws_sdk_rekognition::types::TextDetection;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use tracing::warn;

use crate::core::models::{ObjectRef, S3Event};
use crate::errors::DetectionError;

/// Deserializes a raw Lambda payload into the typed S3 notification.
pub fn parse_event(payload: Value) -> Result<S3Event, DetectionError> {
    Ok(serde_json::from_value(payload)?)
}

/// Decodes an object key as S3 writes it into notifications.
///
/// S3 form-encodes keys, so `+` stands for a space and must be replaced
/// before percent-decoding (a literal `+` arrives as `%2B`).
///
/// ```
/// use textscan::parsing::decode_s3_key;
///
/// assert_eq!(decode_s3_key("scans/receipt+01.png").unwrap(), "scans/receipt 01.png");
/// assert_eq!(decode_s3_key("a%2Bb.jpg").unwrap(), "a+b.jpg");
/// ```
pub fn decode_s3_key(raw: &str) -> Result<String, DetectionError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| DetectionError::InvalidEvent(format!("object key is not valid UTF-8: {e}")))
}

/// Extracts the bucket and decoded key of the first record.
///
/// Only the first record is processed; any further records are logged and
/// ignored.
pub fn object_ref(event: &S3Event) -> Result<ObjectRef, DetectionError> {
    let Some(record) = event.records.first() else {
        return Err(DetectionError::InvalidEvent(
            "notification contains no records".to_string(),
        ));
    };

    if event.records.len() > 1 {
        warn!(
            ignored = event.records.len() - 1,
            "Notification has multiple records, processing only the first"
        );
    }

    let bucket = &record.s3.bucket.name;
    if bucket.is_empty() {
        return Err(DetectionError::InvalidEvent("bucket name is empty".to_string()));
    }

    let key = decode_s3_key(&record.s3.object.key)?;
    if key.is_empty() {
        return Err(DetectionError::InvalidEvent("object key is empty".to_string()));
    }

    Ok(ObjectRef {
        bucket: bucket.clone(),
        key,
    })
}

/// Keeps the text of each detection, in service order, duplicates included.
pub fn project_texts(detections: &[TextDetection]) -> Vec<String> {
    detections
        .iter()
        .filter_map(|d| d.detected_text().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detection(text: &str) -> TextDetection {
        TextDetection::builder().detected_text(text).confidence(99.1).build()
    }

    #[test]
    fn decodes_plus_and_percent_sequences() {
        assert_eq!(
            decode_s3_key("uploads/My+Photo%281%29.jpg").unwrap(),
            "uploads/My Photo(1).jpg"
        );
        assert_eq!(decode_s3_key("plain.png").unwrap(), "plain.png");
    }

    #[test]
    fn rejects_invalid_utf8_key() {
        let err = decode_s3_key("bad%FF.png").unwrap_err();
        assert!(matches!(err, DetectionError::InvalidEvent(_)));
    }

    #[test]
    fn projection_keeps_order_and_duplicates() {
        let detections = vec![detection("STOP"), detection("AHEAD"), detection("STOP")];
        assert_eq!(project_texts(&detections), vec!["STOP", "AHEAD", "STOP"]);
    }

    #[test]
    fn projection_skips_entries_without_text() {
        let detections = vec![TextDetection::builder().confidence(40.0).build(), detection("EXIT")];
        assert_eq!(project_texts(&detections), vec!["EXIT"]);
    }

    #[test]
    fn empty_records_is_invalid() {
        let event = parse_event(json!({ "Records": [] })).unwrap();
        assert!(matches!(object_ref(&event), Err(DetectionError::InvalidEvent(_))));
    }

    #[test]
    fn missing_key_fails_to_parse() {
        let err = parse_event(json!({
            "Records": [{ "s3": { "bucket": { "name": "b" }, "object": {} } }]
        }))
        .unwrap_err();
        assert!(matches!(err, DetectionError::InvalidEvent(_)));
    }
}
