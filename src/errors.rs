use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Invalid S3 notification: {0}")]
    InvalidEvent(String),

    #[error("Failed to detect text with Rekognition: {0}")]
    Detection(String),

    #[error("Failed to persist detection to DynamoDB: {0}")]
    Persistence(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DetectionError {
    fn from(error: serde_json::Error) -> Self {
        DetectionError::InvalidEvent(error.to_string())
    }
}
