use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    /// Backend options response is missing a required binary field or carries
    /// one that is not valid base64url.
    MalformedOptions(String),
    /// The platform ceremony was aborted, denied, or is unsupported.
    Ceremony(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::MalformedOptions(message) => {
                write!(formatter, "Malformed options: {message}")
            }
            AppError::Ceremony(message) => write!(formatter, "Passkey ceremony failed: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
