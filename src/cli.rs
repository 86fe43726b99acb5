// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Command,
};
use tracing::debug;

// Create clap app
//
// s3top takes no options of its own, the region and credentials come from
// the usual AWS environment variables and profiles. Only `--help` and
// `--version` are available, anything else is a usage error.
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .after_help(
            "The AWS region is taken from AWS_REGION or AWS_DEFAULT_REGION, \
             falling back to the AWS profile. Set S3TOP_LOG to change the \
             log filter.",
        )
}

/// Validate the command line, exiting on `--help`, `--version` or
/// unexpected arguments.
///
/// There are no options, so nothing is returned.
pub fn parse_args() {
    debug!("Parsing command line arguments");

    create_app().get_matches();
}
