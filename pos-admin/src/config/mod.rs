use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub api: ApiSettings,
    #[serde(default)]
    pub onboarding: OnboardingSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Mark the session cookie `Secure`; enable behind HTTPS.
    #[serde(default)]
    pub secure_cookies: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    /// Base URL of the remote POS API (sales, stock, shops, auth).
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Deserialize, Clone, Debug)]
pub struct OnboardingSettings {
    /// Where business owners without a provisioned business are sent.
    #[serde(default = "default_onboarding_path")]
    pub path: String,
}

impl Default for OnboardingSettings {
    fn default() -> Self {
        Self {
            path: default_onboarding_path(),
        }
    }
}

fn default_onboarding_path() -> String {
    "/onboarding".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC endpoint, e.g. `http://tempo:4317`. Spans are only exported
    /// when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Allow running from the workspace root or from the crate directory
    let configuration_directory = if base_path.ends_with("pos-admin") {
        base_path.join("config")
    } else {
        base_path.join("pos-admin").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_sections() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
server:
  host: "127.0.0.1"
  port: 8090
api:
  url: "http://api.local"
"#,
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert!(!settings.server.secure_cookies);
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.onboarding.path, "/onboarding");
        assert_eq!(settings.telemetry.log_level, "info");
        assert!(settings.telemetry.otlp_endpoint.is_none());
    }
}
