use serde::Serialize;
use std::fmt;

use crate::catalog::Product;

/// How a set of recommendations was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// No credential configured, local heuristic only
    Local,
    /// Names in the remote reply matched catalog products
    Remote,
    /// Remote path was tried and failed or matched nothing
    RemoteFallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Local => "local",
            Source::Remote => "remote",
            Source::RemoteFallback => "remote-fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up to three products plus where they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub items: Vec<Product>,
    pub source: Source,
    /// Unparsed remote reply, only set when `source` is `Remote`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl RecommendationResult {
    pub fn local(items: Vec<Product>) -> Self {
        Self {
            items,
            source: Source::Local,
            raw: None,
        }
    }

    pub fn remote(items: Vec<Product>, raw: String) -> Self {
        Self {
            items,
            source: Source::Remote,
            raw: Some(raw),
        }
    }

    pub fn remote_fallback(items: Vec<Product>) -> Self {
        Self {
            items,
            source: Source::RemoteFallback,
            raw: None,
        }
    }
}
