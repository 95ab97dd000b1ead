use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A cluster service as exposed by the registry.
///
/// External IPs are kept as the registry reports them; they are only parsed
/// when answers are synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub name: Arc<str>,

    #[serde(default)]
    pub namespace: Option<Arc<str>>,

    #[serde(default)]
    pub external_ips: Vec<Arc<str>>,
}

impl Service {
    pub fn new<I, S>(name: impl Into<Arc<str>>, external_ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            name: name.into(),
            namespace: None,
            external_ips: external_ips.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Lowercased lookup key: `name.namespace`, or just `name` when the
    /// service carries no namespace.
    pub fn index_key(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", self.name, namespace).to_ascii_lowercase(),
            None => self.name.to_ascii_lowercase(),
        }
    }
}
