//! Rekognition text detection client

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::types::{Image, S3Object, TextDetection};
use tracing::info;

use crate::core::models::ObjectRef;
use crate::errors::DetectionError;

/// Finds text in a stored image.
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Returns the service's detections in the order it reported them.
    async fn detect_text(&self, object: &ObjectRef) -> Result<Vec<TextDetection>, DetectionError>;
}

/// Builds the `DetectText` image reference for a stored object.
pub fn to_image(object: &ObjectRef) -> Image {
    Image::builder()
        .s3_object(
            S3Object::builder()
                .bucket(&object.bucket)
                .name(&object.key)
                .build(),
        )
        .build()
}

/// Calls Rekognition `DetectText`.
///
/// The default build logs only the detection count and model version of each
/// response; the full response is logged with the `debug-logs` feature.
#[derive(Debug, Clone)]
pub struct RekognitionTextDetector {
    client: RekognitionClient,
}

impl RekognitionTextDetector {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: RekognitionClient::new(sdk_config),
        }
    }
}

#[async_trait]
impl TextDetector for RekognitionTextDetector {
    async fn detect_text(&self, object: &ObjectRef) -> Result<Vec<TextDetection>, DetectionError> {
        let output = self
            .client
            .detect_text()
            .image(to_image(object))
            .send()
            .await
            .map_err(|e| DetectionError::Detection(DisplayErrorContext(&e).to_string()))?;

        #[cfg(feature = "debug-logs")]
        info!("Rekognition response: {:?}", output);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            detections = output.text_detections().len(),
            model_version = output.text_model_version().unwrap_or("unknown"),
            "Rekognition response received"
        );

        Ok(output.text_detections().to_vec())
    }
}
