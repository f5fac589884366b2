//! Request destinations.
//!
//! A destination is either a full URL or the concatenation `host + path`.
//! The join is plain string concatenation, so `host` carries the scheme and
//! `path` carries its own leading slash.

use std::fmt;

use url::Url;

/// A validated absolute `http`/`https` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    url: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("invalid destination {0:?}: {1}")]
    Invalid(String, url::ParseError),
    #[error("unsupported scheme {scheme:?} in {url}")]
    UnsupportedScheme { url: String, scheme: String },
}

impl Destination {
    pub fn parse(s: &str) -> Result<Self, DestinationError> {
        let url = Url::parse(s).map_err(|e| DestinationError::Invalid(s.to_string(), e))?;
        match url.scheme() {
            "http" | "https" => Ok(Self { url }),
            other => Err(DestinationError::UnsupportedScheme {
                url: s.to_string(),
                scheme: other.to_string(),
            }),
        }
    }

    /// Build a destination from a host and a path, e.g.
    /// `("http://kdc.local:8888", "/as")`.
    pub fn join(host: &str, path: &str) -> Result<Self, DestinationError> {
        let mut s = String::with_capacity(host.len() + path.len());
        s.push_str(host);
        s.push_str(path);
        Self::parse(&s)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl std::str::FromStr for Destination {
    type Err = DestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
