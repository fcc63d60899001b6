use aws_config::environment::credentials::EnvironmentVariableCredentialsProvider;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error};

use crate::error::ConfigError;

const REGION_VAR: &str = "AWS_REGION";
const PREWARM_VAR: &str = "RESIZE_PREWARM_CLIENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub region: String,
    /// Issue a `ListBuckets` call before serving the first event.
    pub prewarm: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup(REGION_VAR)
            .map(|region| region.trim().to_string())
            .filter(|region| !region.is_empty())
            .ok_or(ConfigError::MissingRegion)?;

        let prewarm = match lookup(PREWARM_VAR) {
            Some(value) => parse_flag(PREWARM_VAR, &value)?,
            None => true,
        };

        Ok(Self { region, prewarm })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

pub async fn build_s3_client(settings: &Settings) -> S3Client {
    let shared_config = aws_config::defaults(BehaviorVersion::v2025_01_17())
        .credentials_provider(EnvironmentVariableCredentialsProvider::new())
        .region(Region::new(settings.region.clone()))
        .load()
        .await;
    S3Client::new(&shared_config)
}

pub async fn prewarm(s3_client: &S3Client) -> Result<(), Error> {
    let output = s3_client.list_buckets().send().await?;
    tracing::info!("Client warmed up, {} buckets visible", output.buckets().len());
    Ok(())
}
