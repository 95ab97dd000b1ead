use serde::{Deserialize, Serialize};

/// Settings of the external-name resolver.
///
/// Unknown keys are rejected so a misspelled directive fails at startup
/// instead of silently falling back to a default.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExternalNameConfig {
    #[serde(default)]
    pub zones: Vec<String>,

    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u32,

    #[serde(default = "default_continue_on_no_match")]
    pub continue_on_no_match: bool,
}

impl Default for ExternalNameConfig {
    fn default() -> Self {
        Self {
            zones: vec![],
            ttl_seconds: default_ttl_seconds(),
            continue_on_no_match: default_continue_on_no_match(),
        }
    }
}

fn default_ttl_seconds() -> u32 {
    120
}

fn default_continue_on_no_match() -> bool {
    true
}
