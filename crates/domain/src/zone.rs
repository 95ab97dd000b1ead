use crate::DomainError;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Ordered set of zones this resolver is authoritative for.
///
/// Zones are lowercased and fully qualified on construction, so matching
/// only has to lowercase the query name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSet {
    zones: Vec<Arc<str>>,
}

impl ZoneSet {
    pub fn new<I, S>(zones: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let zones = zones
            .into_iter()
            .map(|zone| Self::normalize_zone(zone.as_ref()).map(Arc::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { zones })
    }

    /// Returns the longest configured zone containing `query_name`.
    ///
    /// Ties keep the zone configured first. Matching is label-aligned:
    /// `xkube.service.` is not inside `kube.service.`.
    pub fn matches(&self, query_name: &str) -> Option<&str> {
        let name = normalize_name(query_name);
        let mut best: Option<&str> = None;

        for zone in &self.zones {
            if !is_subdomain(zone, &name) {
                continue;
            }
            match best {
                Some(current) if current.len() >= zone.len() => {}
                _ => best = Some(zone),
            }
        }

        best
    }

    pub fn zones(&self) -> &[Arc<str>] {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    fn normalize_zone(zone: &str) -> Result<String, DomainError> {
        let trimmed = zone.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty zone".to_string()));
        }

        let normalized = normalize_name(trimmed);
        if normalized.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "zone '{}' exceeds {} bytes",
                zone, MAX_NAME_LEN
            )));
        }

        if normalized != "." {
            for label in normalized.trim_end_matches('.').split('.') {
                if label.is_empty() {
                    return Err(DomainError::InvalidDomainName(format!(
                        "zone '{}' contains an empty label",
                        zone
                    )));
                }
                if label.len() > MAX_LABEL_LEN {
                    return Err(DomainError::InvalidDomainName(format!(
                        "zone '{}' has a label longer than {} bytes",
                        zone, MAX_LABEL_LEN
                    )));
                }
                if label.chars().any(char::is_whitespace) {
                    return Err(DomainError::InvalidDomainName(format!(
                        "zone '{}' contains whitespace",
                        zone
                    )));
                }
            }
        }

        Ok(normalized)
    }
}

/// Lowercases a DNS name and makes it fully qualified.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.to_ascii_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}

/// Both arguments must already be normalized.
fn is_subdomain(zone: &str, name: &str) -> bool {
    if zone == "." || zone == name {
        return true;
    }
    name.len() > zone.len()
        && name.ends_with(zone)
        && name.as_bytes()[name.len() - zone.len() - 1] == b'.'
}
