//! Unified error type.

use std::fmt;

/// The error type returned by canon's fallible operations.
///
/// Rule evaluation itself is pure and cannot fail; a verdict always comes
/// back. Errors surface only at the edges, where host strings and request
/// URLs handed over by the outside world turn out to be malformed.
#[derive(Debug)]
pub enum Error {
    /// A host string that cannot be split into a name and a port.
    InvalidHost(String),
    /// A request carrying no authority at all: no `Host` header and no
    /// absolute-form request target.
    MissingHost,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHost(host) => write!(f, "invalid host: {host:?}"),
            Self::MissingHost => f.write_str("request has no host"),
        }
    }
}

impl std::error::Error for Error {}
