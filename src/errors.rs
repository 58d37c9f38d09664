/// A service identifier that is not part of the service catalog.
///
/// This is a caller defect, not a data-quality problem, so it is kept
/// apart from [`WrapError`] in every signature that can produce it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Service key '{key}' not found.")]
pub struct UnknownService {
    pub key: String,
}

impl UnknownService {
    pub fn new(key: impl Into<String>) -> Self {
        UnknownService { key: key.into() }
    }
}

/// Recoverable outcomes of address wrapping the caller is expected to branch on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapError {
    #[error("Address cannot be empty.")]
    EmptyAddress,

    #[error("Address exceeds the total hard limit. Please shorten the address.")]
    TotalLimitExceeded { length: usize, total_limit: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    #[error(transparent)]
    UnknownService(#[from] UnknownService),

    #[error(transparent)]
    Address(#[from] WrapError),

    #[error("Invalid limits for service '{0}': a soft or hard limit is required")]
    InvalidServiceLimits(String),

    #[error("Missing required shipment field: {0}")]
    MissingField(&'static str),

    #[error("HTTP error: {status}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid JSON response from API: {message}")]
    Parse { message: String, body: Option<String> },

    #[error("Carrier error (level {level}): {message}")]
    Carrier { level: i64, message: String },

    #[error("Label image is not valid base64: {0}")]
    LabelDecode(#[from] base64::DecodeError),

    #[error("Carrier response did not contain a label image")]
    MissingLabel,

    #[error("Missing configuration: environment variable {var} is not set")]
    Config { var: &'static str },

    #[error("IO error writing label: {0}")]
    IoError(#[from] std::io::Error),
}

impl CourierError {
    /// Create a parse error that keeps the raw response body for diagnostics.
    pub fn parse(message: impl Into<String>, body: impl Into<String>) -> Self {
        CourierError::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CourierError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for errors caused by address data rather than by the
    /// caller, the configuration or the transport.
    pub fn is_address_error(&self) -> bool {
        matches!(self, CourierError::Address(_))
    }
}
