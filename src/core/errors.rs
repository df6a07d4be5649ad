use std::net::IpAddr;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors raised while loading range datasets or resolving addresses to regions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dataset is structurally broken; the load is aborted.
    #[error("malformed {format} input: {message}")]
    MalformedInput {
        format: &'static str,
        message: String,
    },

    /// A single CIDR literal could not be parsed into an IPv4 subnet.
    #[error("invalid CIDR `{cidr}`: {reason}")]
    InvalidCidr { cidr: String, reason: String },

    /// The caller supplied an unusable address or host.
    #[error("{0}")]
    InvalidInput(String),

    /// The host name did not resolve to any address.
    #[error("unable to resolve host `{host}`: {reason}")]
    Resolution { host: String, reason: String },

    /// Only IPv4 addresses can be matched against the range datasets.
    #[error("unsupported address family: {0}")]
    UnsupportedAddressFamily(IpAddr),

    /// A dataset file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(format: &'static str, message: impl ToString) -> Self {
        Error::MalformedInput {
            format,
            message: message.to_string(),
        }
    }
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}
