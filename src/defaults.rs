//! Default Configuration Values
//!
//! This module centralizes the default values used throughout the crate.
//! Having defaults in one place makes them easier to maintain, document, and adjust.

use std::time::Duration;

/// Provider identity
pub mod provider {
    /// Registry key for the BitNet provider
    pub const ID: &str = "bitnet";

    /// Human-readable provider name
    pub const DISPLAY_NAME: &str = "BitNet 1-bit LLM";

    /// Value reported as `owned_by` in synthesized model lists
    pub const OWNED_BY: &str = "bitnet";
}

/// Backend endpoint configuration
pub mod endpoint {
    /// Environment variable holding the backend base URL
    pub const BASE_URL_ENV: &str = "BITNET_API_URL";

    /// Base URL used when the environment variable is unset
    ///
    /// Matches the service name of the inference container in the default
    /// compose setup.
    pub const BASE_URL: &str = "http://bitnet-server:8080";

    pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
    pub const COMPLETIONS_PATH: &str = "/v1/completions";
    pub const HEALTH_PATH: &str = "/health";
    pub const MODELS_PATH: &str = "/v1/models";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default connection timeout for establishing HTTP connections
    ///
    /// Set to 10 seconds which is sufficient for most network conditions
    /// while not being too aggressive.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Upper bound for a single health probe
    pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("bitnet-provider/", env!("CARGO_PKG_VERSION"));
}

/// Generation parameter defaults applied when the caller leaves them unset
pub mod generation {
    /// Default model id
    pub const MODEL: &str = crate::providers::bitnet::model_constants::BITNET_B1_58_2B;

    /// Default sampling temperature
    pub const TEMPERATURE: f32 = 0.7;

    /// Default maximum number of tokens to generate
    pub const MAX_TOKENS: u32 = 2048;

    /// Chat requests are non-streaming unless asked otherwise
    pub const STREAM: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_are_absolute() {
        for path in [
            endpoint::CHAT_COMPLETIONS_PATH,
            endpoint::COMPLETIONS_PATH,
            endpoint::HEALTH_PATH,
            endpoint::MODELS_PATH,
        ] {
            assert!(path.starts_with('/'), "{path} should start with '/'");
        }
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(http::USER_AGENT.starts_with("bitnet-provider/"));
        assert!(http::USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn generation_defaults_match_documented_values() {
        assert_eq!(generation::MODEL, "bitnet-b1.58-2b");
        assert!((generation::TEMPERATURE - 0.7).abs() < f32::EPSILON);
        assert_eq!(generation::MAX_TOKENS, 2048);
        assert!(!generation::STREAM);
    }
}
