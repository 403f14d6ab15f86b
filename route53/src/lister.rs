use aws_lister_core::config::load_sdk_config;

pub mod list;
pub mod report;

pub const SERVICE: &str = "route53";

/// Entry point for every Route53 listing operation.
///
/// Holds the resolved service config only; clients are built per call.
pub struct Route53Lister {
    config: aws_sdk_route53::Config,
}

impl Route53Lister {
    /// Resolves region, credentials and any `aws/route53/config.ron` overrides from the
    /// ambient environment.
    pub async fn from_env() -> anyhow::Result<Route53Lister> {
        let sdk_config = load_sdk_config(SERVICE).await?;
        Ok(Route53Lister::from_conf(aws_sdk_route53::Config::from(&sdk_config)))
    }

    /// Wraps an already-built service config, e.g. one carrying a custom HTTP client.
    pub fn from_conf(config: aws_sdk_route53::Config) -> Route53Lister {
        Route53Lister { config }
    }

    /// A new client per call; listers never hold one.
    pub fn get_client(&self) -> aws_sdk_route53::Client {
        aws_sdk_route53::Client::from_conf(self.config.clone())
    }
}
