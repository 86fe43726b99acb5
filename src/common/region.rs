// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use tracing::debug;

/// Environment variables consulted for the region, in order of preference.
const REGION_ENV_VARS: &[&str] = &[
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
];

/// The AWS region our clients will be created in, if one was found in the
/// environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    /// Returns a `Region` taken from the environment.
    pub fn new() -> Self {
        let possibilities = REGION_ENV_VARS
            .iter()
            .map(env::var)
            .collect();

        let region = Self::from_possibilities(possibilities);

        debug!("AWS region in environment is: {:?}", region.region);

        region
    }

    // The first successfully read, non-empty value wins.
    fn from_possibilities(
        possibilities: Vec<Result<String, env::VarError>>,
    ) -> Self {
        let region = possibilities
            .into_iter()
            .filter_map(Result::ok)
            .find(|region| !region.is_empty())
            .map(region::Region::new);

        Self {
            region,
        }
    }

    /// Returns the region name
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_region_name_default() {
        let region = Region::default();

        assert_eq!(region.name(), "default");
    }

    #[test]
    fn test_region_from_possibilities() {
        let tests = vec![
            (
                vec![Ok("eu-west-1".into()), Ok("us-east-1".into())],
                "eu-west-1",
            ),
            (
                vec![Err(env::VarError::NotPresent), Ok("us-east-1".into())],
                "us-east-1",
            ),
            (
                vec![Ok("".into()), Ok("ap-southeast-2".into())],
                "ap-southeast-2",
            ),
            (
                vec![
                    Err(env::VarError::NotPresent),
                    Err(env::VarError::NotPresent),
                ],
                "default",
            ),
        ];

        for test in tests {
            let possibilities = test.0;
            let expected      = test.1;

            let region = Region::from_possibilities(possibilities);

            assert_eq!(region.name(), expected);
        }
    }
}
