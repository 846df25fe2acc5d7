// src/internal/page/mod.rs

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// Read-only view of the location the host application is currently showing
pub trait PageSource: Send + Sync {
    fn current_url(&self) -> Url;
}

/// Navigable page location, updated by the host as the user moves around
pub struct Page {
    location: RwLock<Url>,
}

impl Page {
    pub fn new(url: Url) -> Self {
        Self {
            location: RwLock::new(url),
        }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    pub fn navigate(&self, url: Url) {
        *self.location.write().unwrap_or_else(PoisonError::into_inner) = url;
    }
}

impl PageSource for Page {
    fn current_url(&self) -> Url {
        self.location
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Snapshot of a page location, shaped like a browser `Location`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSnapshot {
    pub href: String,
    pub origin: String,
    pub protocol: String,
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    pub search_params: Map<String, Value>,
}

impl LocationSnapshot {
    pub fn capture(url: &Url) -> Self {
        let hostname = url.host_str().unwrap_or_default().to_string();
        let port = url.port().map(|p| p.to_string()).unwrap_or_default();
        let host = if port.is_empty() {
            hostname.clone()
        } else {
            format!("{}:{}", hostname, port)
        };

        Self {
            href: url.as_str().to_string(),
            origin: url.origin().ascii_serialization(),
            protocol: format!("{}:", url.scheme()),
            host,
            hostname,
            port,
            pathname: url.path().to_string(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
            search_params: search_params(url),
        }
    }
}

fn prefixed(prefix: char, part: Option<&str>) -> String {
    match part {
        Some(part) if !part.is_empty() => format!("{}{}", prefix, part),
        _ => String::new(),
    }
}

/// Flatten query parameters; a repeated key keeps its first position and its last value
pub fn search_params(url: &Url) -> Map<String, Value> {
    let mut params = Map::new();
    for (key, value) in url.query_pairs() {
        params.insert(key.into_owned(), Value::String(value.into_owned()));
    }
    params
}
