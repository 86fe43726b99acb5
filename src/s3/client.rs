// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::SdkConfig;
use aws_sdk_s3::client::Client as S3Client;
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` built from the shared `SdkConfig`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!("new: Creating S3Client in region '{:?}'", config.region());

        let client = S3Client::new(config);

        Self {
            client,
        }
    }
}
