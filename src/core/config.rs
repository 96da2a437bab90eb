//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Hosted Navigator application that `/app` redirects to
pub const DEFAULT_APP_URL: &str = "https://navigator-263010608613.us-east4.run.app";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// External application URL
    /// Example: https://app.example.com
    pub app_url: String,

    /// Whether responses are brotli/gzip compressed
    pub enable_compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("APP_URL").ok(),
            std::env::var("ENABLE_COMPRESSION").ok(),
        )
    }

    /// Build a config from raw variable values. Blank values fall back to the
    /// defaults.
    pub fn from_vars(app_url: Option<String>, enable_compression: Option<String>) -> Self {
        let app_url = app_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        let enable_compression = enable_compression
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(true);

        Self {
            app_url,
            enable_compression,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app_url, DEFAULT_APP_URL);
        assert!(config.enable_compression);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(
            Some("https://staging.example.com".to_string()),
            Some("false".to_string()),
        );
        assert_eq!(config.app_url, "https://staging.example.com");
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_blank_app_url_falls_back() {
        let config = Config::from_vars(Some("   ".to_string()), None);
        assert_eq!(config.app_url, DEFAULT_APP_URL);
    }

    #[test]
    fn test_compression_flag_parsing() {
        for (raw, expected) in [("0", false), ("OFF", false), ("yes", true), (" 1 ", true)] {
            let config = Config::from_vars(None, Some(raw.to_string()));
            assert_eq!(config.enable_compression, expected, "{raw}");
        }

        // unrecognised values keep the default
        let config = Config::from_vars(None, Some("maybe".to_string()));
        assert!(config.enable_compression);
    }

    #[test]
    fn test_from_env_reads_overrides() {
        let original_url = std::env::var("APP_URL").ok();
        let original_compression = std::env::var("ENABLE_COMPRESSION").ok();
        // SAFETY: no other test in this crate reads or writes these variables
        unsafe {
            std::env::set_var("APP_URL", "https://env.example.com");
            std::env::set_var("ENABLE_COMPRESSION", "off");
        }

        let config = Config::from_env();

        // SAFETY: as above
        unsafe {
            match original_url {
                Some(val) => std::env::set_var("APP_URL", val),
                None => std::env::remove_var("APP_URL"),
            }
            match original_compression {
                Some(val) => std::env::set_var("ENABLE_COMPRESSION", val),
                None => std::env::remove_var("ENABLE_COMPRESSION"),
            }
        }

        assert_eq!(config.app_url, "https://env.example.com");
        assert!(!config.enable_compression);
    }
}
