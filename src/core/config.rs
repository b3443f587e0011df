use std::env;

use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::errors::DetectionError;

pub const DEFAULT_TABLE_NAME: &str = "ImageTextDetections";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    /// Overrides the SDK region chain for both Rekognition and DynamoDB.
    pub aws_region: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DetectionError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DetectionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = match lookup("DETECTIONS_TABLE_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(DetectionError::Config(
                    "DETECTIONS_TABLE_NAME is set but empty".to_string(),
                ));
            }
            Some(name) => name,
            None => DEFAULT_TABLE_NAME.to_string(),
        };

        Ok(Self {
            table_name,
            aws_region: lookup("DETECTION_AWS_REGION").filter(|r| !r.trim().is_empty()),
        })
    }

    /// Loads the shared AWS config both service clients are built from.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        loader.load().await
    }
}
