//! Error types.

/// Error enumerates the possible DNS proxy error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a required request field is missing or empty. Never reaches the network.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// Returned when a domain name can't be split into labels cPanel would accept.
    #[error("invalid domain \"{domain}\": {reason}")]
    InvalidDomain { domain: String, reason: &'static str },

    /// Returned when cPanel can't be reached (connection, DNS, TLS or timeout failure).
    #[error("{func} request for zone \"{zone}\" failed")]
    Transport {
        func: &'static str,
        zone: String,
        #[source]
        source: reqwest::Error,
    },

    /// Returned when cPanel answers with a non-200 HTTP status.
    #[error("{func} for zone \"{zone}\" returned unexpected HTTP status {status}: {body}")]
    ApiStatus {
        func: &'static str,
        zone: String,
        status: u16,
        body: String,
    },

    /// Returned when a cPanel response body doesn't have the expected `cpanelresult` shape.
    #[error("failed to parse {func} response for zone \"{zone}\"")]
    Parse {
        func: &'static str,
        zone: String,
        #[source]
        source: serde_json::Error,
    },

    /// Returned when cPanel answers `fetchzone` with HTTP 200 but reports in the structured
    /// result that the zone couldn't be read.
    #[error("fetchzone rejected for zone \"{zone}\": {statusmsg}")]
    FetchRejected { zone: String, statusmsg: String },

    /// Returned when the fetched zone holds no TXT record matching the delete or edit
    /// criteria. Never treated as success.
    #[error("TXT record \"{name}\" with value \"{value}\" not found in zone \"{zone}\"")]
    NotFound {
        zone: String,
        name: String,
        value: String,
    },

    /// Returned when cPanel answers HTTP 200 but reports a failed operation in the
    /// structured result.
    #[error("{func} rejected for zone \"{zone}\": {statusmsg}")]
    MutationRejected {
        func: &'static str,
        zone: String,
        statusmsg: String,
    },

    /// Returned when a required configuration key is absent or empty.
    #[error("config incomplete: missing \"{0}\"")]
    MissingConfig(&'static str),

    /// Returned when a configuration value can't be parsed.
    #[error("invalid config value for \"{key}\": {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    /// Returned when the HTTP client used to reach cPanel can't be built.
    #[error("failed to build cPanel HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// Returned when a [HTTP API][crate::api] request lacks the configured bearer token.
    #[error("unauthorized")]
    Unauthorized,

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was raised before any network call because the input was unusable.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::InvalidDomain { .. })
    }

    /// Whether the error describes a failed exchange with cPanel.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::ApiStatus { .. }
                | Error::Parse { .. }
                | Error::FetchRejected { .. }
                | Error::MutationRejected { .. }
        )
    }
}
