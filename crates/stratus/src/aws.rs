//! Shared AWS SDK configuration.

/// AWS client configuration read from the environment.
///
/// Credentials resolve through the SDK default provider chain
/// (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profiles, etc.);
/// only the endpoint and region are handled here.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local stacks such as LocalStack).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: stratus_core::env::var_or("AWS_REGION", "us-east-1"),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self, service: &str) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local {} ({})", service, url),
            None => format!("AWS {} (region: {})", service, self.region),
        }
    }

    /// Loads the shared SDK configuration for this target.
    pub async fn load(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}
