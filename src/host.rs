//! Host names with optional ports.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A host with an optional port, as carried by a `Host` header or the
/// authority of an absolute URL.
///
/// Two hosts are equal when their names match case-insensitively and their
/// ports match exactly. `example.com` and `EXAMPLE.com` are the same host;
/// `example.com` and `example.com:8080` are not.
#[derive(Clone, Debug)]
pub struct Host {
    name: String,
    port: Option<u16>,
}

impl Host {
    /// A host with no explicit port.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), port: None }
    }

    /// A host with an explicit port.
    pub fn with_port(name: impl Into<String>, port: u16) -> Self {
        Self { name: name.into(), port: Some(port) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// True for `localhost` under any port.
    pub fn is_localhost(&self) -> bool {
        self.name.eq_ignore_ascii_case("localhost")
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.port == other.port
    }
}

impl Eq for Host {}

/// Parses `name` or `name:port`.
///
/// IPv6 literals keep their brackets: `[::1]:8080` parses to name `[::1]`
/// and port `8080`. The name is taken as-is; only an unparsable port is an
/// error. Malformed names surface later, if at all, when the rule builds a
/// URL around them.
impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidHost(s.to_owned()));
        }
        // The port separator must sit after the closing bracket of an IPv6
        // literal, never inside it.
        let sep = match s.rfind(']') {
            Some(end) => s[end..].find(':').map(|i| end + i),
            None => s.rfind(':'),
        };
        match sep {
            Some(i) => {
                let port = s[i + 1..]
                    .parse::<u16>()
                    .map_err(|_| Error::InvalidHost(s.to_owned()))?;
                Ok(Self { name: s[..i].to_owned(), port: Some(port) })
            }
            None => Ok(Self { name: s.to_owned(), port: None }),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.name, port),
            None => f.write_str(&self.name),
        }
    }
}
