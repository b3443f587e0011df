// Lambda bootstrap for the S3 text detection function

use lambda_runtime::{Error, run, service_fn};
use textscan::clients::{DynamoDbDetectionStore, RekognitionTextDetector};
use textscan::core::config::AppConfig;
use textscan::handler::{Handler, function_handler};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    textscan::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Clients are built once and reused by every invocation of this instance.
    let sdk_config = config.load_sdk_config().await;
    let store = DynamoDbDetectionStore::new(&sdk_config, config.table_name.clone());
    info!(table = store.table_name(), "Detector initialised");
    let handler = Handler::new(RekognitionTextDetector::new(&sdk_config), store);

    let handler = &handler;
    run(service_fn(move |event| async move {
        function_handler(handler, event).await
    }))
    .await
}
