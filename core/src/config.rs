use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use aws_config::{
    BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain,
    timeout::TimeoutConfig as SdkTimeoutConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// S3 and Route53 both serve their global endpoints from here.
pub const FALLBACK_REGION: &str = "us-east-1";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_timeout_secs:   Option<u64>,
    pub operation_timeout_secs: Option<u64>,
    pub read_timeout_secs:      Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ListerConfig {
    pub endpoint_url:   Option<String>,
    pub region:         Option<String>,
    pub timeout_config: Option<TimeoutConfig>,
}

impl ListerConfig {
    /// Loads `aws/<service>/config.ron` under `prefix`, falling back to the shared
    /// `aws/config.ron`, then to defaults.
    pub fn try_load(prefix: &Path, service: &str) -> Result<ListerConfig, ConfigError> {
        let service_path = prefix.join("aws").join(service).join("config.ron");
        if service_path.is_file() {
            return Self::load_file(service_path);
        }

        let shared_path = prefix.join("aws/config.ron");
        if shared_path.is_file() {
            return Self::load_file(shared_path);
        }

        tracing::info!("Lister config for {} not present under {:?}, using defaults.", service, prefix);
        Ok(ListerConfig::default())
    }

    fn load_file(path: PathBuf) -> Result<ListerConfig, ConfigError> {
        tracing::info!("Loading lister config file at {:?}", path);

        let s = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        match ron::from_str(&s) {
            Ok(config) => Ok(config),
            Err(source) => Err(ConfigError::Parse { path, source }),
        }
    }

    /// Resolves region and credentials from the ambient environment, applying any
    /// overrides carried by this config.
    pub async fn to_sdk_config(&self) -> SdkConfig {
        let region = match &self.region {
            Some(region) => RegionProviderChain::first_try(Region::new(region.clone())),
            None => RegionProviderChain::default_provider().or_else(Region::new(FALLBACK_REGION)),
        };

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        if let Some(timeouts) = &self.timeout_config {
            let mut builder = SdkTimeoutConfig::builder();
            if let Some(secs) = timeouts.connect_timeout_secs {
                builder = builder.connect_timeout(Duration::from_secs(secs));
            }
            if let Some(secs) = timeouts.operation_timeout_secs {
                builder = builder.operation_timeout(Duration::from_secs(secs));
            }
            if let Some(secs) = timeouts.read_timeout_secs {
                builder = builder.read_timeout(Duration::from_secs(secs));
            }
            loader = loader.timeout_config(builder.build());
        }

        loader.load().await
    }
}

/// Loads the config for `service` relative to the working directory and resolves it
/// into an `SdkConfig`.
pub async fn load_sdk_config(service: &str) -> anyhow::Result<SdkConfig> {
    let prefix = std::env::current_dir()?;
    let config = ListerConfig::try_load(&prefix, service)?;
    Ok(config.to_sdk_config().await)
}
