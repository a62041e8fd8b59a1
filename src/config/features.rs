//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Fan classification out across threads for large cohorts
    #[serde(default = "default_enable_parallel_classification")]
    pub enable_parallel_classification: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_parallel_classification: default_enable_parallel_classification(),
        }
    }
}

fn default_enable_parallel_classification() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_parallel_classification);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let flags: FeatureFlags =
            serde_json::from_str(r#"{ "enable_parallel_classification": false }"#).unwrap();
        assert!(!flags.enable_parallel_classification);

        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.enable_parallel_classification);
    }
}
