//! DynamoDB persistence for detection records

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::core::models::DetectionRecord;
use crate::errors::DetectionError;

pub const ATTR_DETECTION_ID: &str = "DetectionId";
pub const ATTR_BUCKET: &str = "S3Bucket";
pub const ATTR_KEY: &str = "S3Key";
pub const ATTR_DETECTED_TEXTS: &str = "DetectedTexts";

/// Write-only sink for detection records.
#[async_trait]
pub trait DetectionStore: Send + Sync {
    async fn put_detection(&self, record: &DetectionRecord) -> Result<(), DetectionError>;
}

/// Maps a record onto table attributes.
///
/// Texts are stored as a list rather than a string set so that order and
/// duplicates are kept and an empty result is still representable.
pub fn to_item(record: &DetectionRecord) -> HashMap<String, AttributeValue> {
    let texts = record
        .detected_texts
        .iter()
        .cloned()
        .map(AttributeValue::S)
        .collect();

    HashMap::from([
        (
            ATTR_DETECTION_ID.to_string(),
            AttributeValue::S(record.detection_id.to_string()),
        ),
        (ATTR_BUCKET.to_string(), AttributeValue::S(record.bucket.clone())),
        (ATTR_KEY.to_string(), AttributeValue::S(record.key.clone())),
        (ATTR_DETECTED_TEXTS.to_string(), AttributeValue::L(texts)),
    ])
}

#[derive(Debug, Clone)]
pub struct DynamoDbDetectionStore {
    client: DynamoDbClient,
    table_name: String,
}

impl DynamoDbDetectionStore {
    pub fn new(sdk_config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self {
            client: DynamoDbClient::new(sdk_config),
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl DetectionStore for DynamoDbDetectionStore {
    async fn put_detection(&self, record: &DetectionRecord) -> Result<(), DetectionError> {
        // Unconditional write: reprocessing an object adds a new row.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| DetectionError::Persistence(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
