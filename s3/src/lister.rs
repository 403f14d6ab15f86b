use aws_lister_core::config::load_sdk_config;
use aws_sdk_s3::{config::Region, error::SdkError};

use crate::util;

pub mod get;
pub mod list;
pub mod report;

pub const SERVICE: &str = "s3";

/// Entry point for every S3 listing operation.
///
/// Only the resolved service config is kept. Each operation builds its own client from
/// it, so no client outlives the call that made it.
pub struct S3Lister {
    config: aws_sdk_s3::Config,
}

impl S3Lister {
    /// Resolves region, credentials and any `aws/s3/config.ron` overrides from the
    /// ambient environment.
    pub async fn from_env() -> anyhow::Result<S3Lister> {
        let sdk_config = load_sdk_config(SERVICE).await?;
        Ok(S3Lister::from_conf(aws_sdk_s3::Config::from(&sdk_config)))
    }

    /// Wraps an already-built service config, e.g. one carrying a custom HTTP client.
    pub fn from_conf(config: aws_sdk_s3::Config) -> S3Lister {
        S3Lister { config }
    }

    pub fn get_client(&self) -> aws_sdk_s3::Client {
        aws_sdk_s3::Client::from_conf(self.config.clone())
    }

    /// Same as `get_client`, but bound to `region`. Buckets only answer object requests
    /// on their own regional endpoint.
    pub fn get_client_in(&self, region: &str) -> aws_sdk_s3::Client {
        let config = self.config.to_builder().region(Region::new(region.to_owned())).build();
        aws_sdk_s3::Client::from_conf(config)
    }

    fn client_for(&self, region: Option<&str>) -> aws_sdk_s3::Client {
        match region {
            Some(region) => self.get_client_in(region),
            None => self.get_client(),
        }
    }

    /// Region to retry in after `err`, if S3 pointed somewhere other than where the
    /// request was sent.
    fn redirect_target<E>(&self, err: &SdkError<E>, sent_to: Option<&str>) -> Option<String> {
        let target = util::redirect_region(err)?;
        let sent_to = sent_to.or_else(|| self.config.region().map(|r| AsRef::<str>::as_ref(r)));

        if sent_to == Some(target) {
            return None;
        }
        Some(target.to_owned())
    }
}
