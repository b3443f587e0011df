//! Detection pipeline and Lambda entry point.
//!
//! One notification in, one record persisted and one response out:
//! extract bucket/key → detect text → project texts → new id → put item.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::clients::{DetectionStore, TextDetector};
use crate::core::models::{DetectionRecord, DetectionResponse, S3Event};
use crate::errors::DetectionError;
use crate::parsing;

/// Holds the service clients for the lifetime of the process.
pub struct Handler<D, S> {
    detector: D,
    store: S,
}

impl<D, S> Handler<D, S>
where
    D: TextDetector,
    S: DetectionStore,
{
    pub fn new(detector: D, store: S) -> Self {
        Self { detector, store }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the pipeline for one notification.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEvent` before any remote call when the notification has
    /// no usable record, `Detection` when Rekognition fails (nothing is
    /// written), and `Persistence` when the put fails (the detected texts are
    /// dropped).
    pub async fn process(&self, event: S3Event) -> Result<DetectionResponse, DetectionError> {
        let object = parsing::object_ref(&event)?;
        info!(bucket = %object.bucket, key = %object.key, "Processing file");

        let detections = self.detector.detect_text(&object).await?;
        let detected_texts = parsing::project_texts(&detections);
        info!(count = detected_texts.len(), "Detected text: {:?}", detected_texts);

        let record = DetectionRecord::new(object, detected_texts);
        self.store.put_detection(&record).await?;
        info!(
            detection_id = %record.detection_id,
            "Successfully saved detection result"
        );

        Ok(record.into())
    }
}

/// Lambda handler: parses the raw payload, runs the pipeline and logs any
/// failure once before handing it back to the runtime.
///
/// # Errors
///
/// Every [`DetectionError`] is returned unchanged (boxed) so the runtime
/// reports the invocation as failed.
#[tracing::instrument(
    level = "info",
    skip(handler, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<D, S>(
    handler: &Handler<D, S>,
    event: LambdaEvent<Value>,
) -> Result<DetectionResponse, Error>
where
    D: TextDetector,
    S: DetectionStore,
{
    info!("Received event: {}", event.payload);

    let result = match parsing::parse_event(event.payload) {
        Ok(notification) => handler.process(notification).await,
        Err(e) => Err(e),
    };

    result.map_err(|e| {
        error!("Error processing image: {}", e);
        Error::from(e)
    })
}
