// s3top: Show the largest buckets in AWS S3, as reported by CloudWatch.
#![forbid(unsafe_code)]
use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod bucket_sizes;
mod cli;
mod cloudwatch;
mod common;
mod report;
mod s3;

use cloudwatch::MetricWindow;
use common::ClientConfig;
use report::Report;

// Environment variable holding the log filter directives.
const LOG_ENV_VAR: &str = "S3TOP_LOG";

// Progress messages from s3top, only warnings from the AWS SDK.
const DEFAULT_LOG_FILTER: &str = "warn,s3top=info";

// Filter from `S3TOP_LOG`, or the default when unset or invalid.
fn log_filter(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

// Logs go to stderr, stdout is reserved for the report.
fn init_tracing() {
    let value  = std::env::var(LOG_ENV_VAR).ok();
    let filter = log_filter(value.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    cli::parse_args();

    let config = ClientConfig::new().load_sdk_config().await;

    let s3_client         = s3::Client::new(&config);
    let cloudwatch_client = cloudwatch::Client::new(&config, MetricWindow::now());

    debug!("main: Metric window is {:?}", cloudwatch_client.window);

    let sizes = bucket_sizes::storage_type_sizes(
        &s3_client,
        &cloudwatch_client,
    ).await?;

    let report = Report::from(sizes);

    print!("{}", report);

    Ok(())
}
