use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// S3 notification as delivered to Lambda. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    /// URL-encoded the way S3 encodes keys in notifications.
    pub key: String,
}

/// Bucket and decoded key of the object to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

/// One row of the detections table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRecord {
    pub detection_id: Uuid,
    pub bucket: String,
    pub key: String,
    pub detected_texts: Vec<String>,
}

impl DetectionRecord {
    /// Creates a record under a freshly generated v4 identifier.
    pub fn new(object: ObjectRef, detected_texts: Vec<String>) -> Self {
        Self {
            detection_id: Uuid::new_v4(),
            bucket: object.bucket,
            key: object.key,
            detected_texts,
        }
    }
}

/// Payload returned to the Lambda runtime on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectionResponse {
    pub detection_id: Uuid,
    pub detected_texts: Vec<String>,
}

impl From<DetectionRecord> for DetectionResponse {
    fn from(record: DetectionRecord) -> Self {
        Self {
            detection_id: record.detection_id,
            detected_texts: record.detected_texts,
        }
    }
}
