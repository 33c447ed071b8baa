//! `KEY=value` configuration.
//!
//! ```text
//! # cPanel account the proxy acts as
//! cpanel_url=https://cpanel.example.com:2083
//! cpanel_user=example
//! cpanel_apikey=XXXXXXXXXXXXXXXX
//!
//! # bearer token for the HTTP service
//! API_KEY=YYYYYYYYYYYYYYYY
//! api_bind_addr=127.0.0.1:5000
//! api_timeout=30
//! cpanel_timeout=30
//! ```
//!
//! Blank lines and `#` comments are skipped. Keys and values are trimmed and split on the
//! first `=`; a repeated key overrides the earlier value.

use crate::error::Error;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

pub const DEFAULT_API_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// cPanel account credentials. Immutable once loaded; `Debug` output never includes the
/// API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_url: String,
    pub user: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_key: Option<String>,
    pub api_bind_addr: SocketAddr,
    pub api_timeout: Duration,
    pub cpanel_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credentials", &self.credentials)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_bind_addr", &self.api_bind_addr)
            .field("api_timeout", &self.api_timeout)
            .field("cpanel_timeout", &self.cpanel_timeout)
            .finish()
    }
}

impl Config {
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = fs::read_to_string(p)?;
        contents.parse()
    }

    /// The bearer token inbound HTTP requests must present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] when `API_KEY` isn't configured.
    pub fn require_api_key(&self) -> Result<&str, Error> {
        self.api_key
            .as_deref()
            .ok_or(Error::MissingConfig("API_KEY"))
    }

    fn from_pairs(pairs: &HashMap<String, String>) -> Result<Self, Error> {
        let base_url = required(pairs, "cpanel_url")?
            .trim_end_matches('/')
            .to_string();
        cpanel_url_is_usable(&base_url)?;

        let credentials = Credentials {
            base_url,
            user: required(pairs, "cpanel_user")?,
            api_key: required(pairs, "cpanel_apikey")?,
        };

        Ok(Config {
            credentials,
            api_key: optional(pairs, "API_KEY"),
            api_bind_addr: parsed_or(pairs, "api_bind_addr", DEFAULT_API_BIND_ADDR)?,
            api_timeout: seconds_or(pairs, "api_timeout")?,
            cpanel_timeout: seconds_or(pairs, "cpanel_timeout")?,
        })
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pairs(&parse_pairs(s))
    }
}

fn parse_pairs(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

fn optional(pairs: &HashMap<String, String>, key: &str) -> Option<String> {
    pairs.get(key).filter(|v| !v.is_empty()).cloned()
}

fn required(pairs: &HashMap<String, String>, key: &'static str) -> Result<String, Error> {
    optional(pairs, key).ok_or(Error::MissingConfig(key))
}

fn parsed_or<T>(pairs: &HashMap<String, String>, key: &'static str, default: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = pairs.get(key).map_or(default, String::as_str);
    raw.parse().map_err(|err: T::Err| Error::InvalidConfig {
        key,
        reason: err.to_string(),
    })
}

fn seconds_or(pairs: &HashMap<String, String>, key: &'static str) -> Result<Duration, Error> {
    let secs: u64 = parsed_or(pairs, key, &DEFAULT_TIMEOUT_SECS.to_string())?;
    if secs == 0 {
        return Err(Error::InvalidConfig {
            key,
            reason: "timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn cpanel_url_is_usable(base_url: &str) -> Result<(), Error> {
    let url = reqwest::Url::parse(base_url).map_err(|err| Error::InvalidConfig {
        key: "cpanel_url",
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "https" => Ok(()),
        "http" => {
            // The API key travels in the Authorization header of every call.
            tracing::warn!("cpanel_url {base_url} is not https; the cPanel API key will be sent in plaintext");
            Ok(())
        }
        other => Err(Error::InvalidConfig {
            key: "cpanel_url",
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL: &str = "
        # cPanel
        cpanel_url = https://cpanel.example.com:2083/
        cpanel_user=example
        cpanel_apikey=secret-token

        API_KEY=bearer-token
        api_bind_addr=127.0.0.1:5001
        api_timeout=10
        not a pair
    ";

    #[test]
    fn parses_full_config() {
        let config: Config = FULL.parse().unwrap();
        assert_eq!(
            config.credentials.base_url,
            "https://cpanel.example.com:2083"
        );
        assert_eq!(config.credentials.user, "example");
        assert_eq!(config.credentials.api_key, "secret-token");
        assert_eq!(config.require_api_key().unwrap(), "bearer-token");
        assert_eq!(config.api_bind_addr, "127.0.0.1:5001".parse().unwrap());
        assert_eq!(config.api_timeout, Duration::from_secs(10));
        assert_eq!(
            config.cpanel_timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn values_keep_everything_after_first_equals() {
        let config: Config =
            "cpanel_url=https://h\ncpanel_user=u\ncpanel_apikey=abc==\n".parse().unwrap();
        assert_eq!(config.credentials.api_key, "abc==");
        assert!(config.api_key.is_none());
        assert!(matches!(
            config.require_api_key(),
            Err(Error::MissingConfig("API_KEY"))
        ));
    }

    #[test]
    fn missing_credentials_rejected() {
        let res: Result<Config, _> = "cpanel_url=https://h\ncpanel_user=u\ncpanel_apikey=\n".parse();
        assert!(matches!(res, Err(Error::MissingConfig("cpanel_apikey"))));
    }

    #[test]
    fn invalid_values_rejected() {
        let base = "cpanel_url=https://h\ncpanel_user=u\ncpanel_apikey=k\n";
        let res: Result<Config, _> = format!("{base}api_timeout=soon").parse();
        assert!(matches!(
            res,
            Err(Error::InvalidConfig {
                key: "api_timeout",
                ..
            })
        ));
        let res: Result<Config, _> = format!("{base}cpanel_timeout=0").parse();
        assert!(matches!(
            res,
            Err(Error::InvalidConfig {
                key: "cpanel_timeout",
                ..
            })
        ));
        let res: Result<Config, _> = "cpanel_url=ftp://h\ncpanel_user=u\ncpanel_apikey=k".parse();
        assert!(matches!(
            res,
            Err(Error::InvalidConfig {
                key: "cpanel_url",
                ..
            })
        ));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config: Config = FULL.parse().unwrap();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("secret-token"));
        assert!(!dbg.contains("bearer-token"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();
        let config = Config::try_from_file(file.path()).unwrap();
        assert_eq!(config.credentials.user, "example");

        let missing = Config::try_from_file("/nonexistent/dns-proxy.conf");
        assert!(matches!(missing, Err(Error::IO(_))));
    }
}
