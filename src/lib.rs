//! textscan - finds text in images uploaded to S3 and records it in DynamoDB.
//!
//! The crate backs a single Lambda subscribed to S3 `ObjectCreated`
//! notifications. For each notification it:
//! 1. Reads the bucket and (decoded) key of the first record
//! 2. Calls Rekognition `DetectText` on that object
//! 3. Writes `{DetectionId, S3Bucket, S3Key, DetectedTexts}` to DynamoDB
//! 4. Returns `{DetectionId, DetectedTexts}` to the runtime
//!
//! # Example
//!
//! ```no_run
//! use textscan::clients::{DynamoDbDetectionStore, RekognitionTextDetector};
//! use textscan::core::config::AppConfig;
//! use textscan::handler::{function_handler, Handler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     textscan::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let sdk_config = config.load_sdk_config().await;
//!     let handler = Handler::new(
//!         RekognitionTextDetector::new(&sdk_config),
//!         DynamoDbDetectionStore::new(&sdk_config, config.table_name.clone()),
//!     );
//!
//!     let handler = &handler;
//!     lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
//!         function_handler(handler, event).await
//!     }))
//!     .await
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod handler;
pub mod parsing;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output is filtered by `RUST_LOG` when set, `info` otherwise. Calling this
/// more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// textscan::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
