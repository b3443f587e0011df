//! AWS service clients used by the handler.

pub mod dynamodb;
pub mod rekognition;

pub use dynamodb::{DetectionStore, DynamoDbDetectionStore};
pub use rekognition::{RekognitionTextDetector, TextDetector};
