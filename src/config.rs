// AWS CLI Gateway - Configuration
//
// Immutable startup configuration: which external binary to invoke,
// the default output format, and the destructive-command denylist.
// Built once at startup; never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gateway configuration, fixed at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// External binary invoked for every operation (must be on PATH)
    pub binary: String,
    /// Output format appended when the command does not name one
    pub default_output_format: String,
    /// Substring denylist — any command containing one of these
    /// (case-insensitively) is refused before execution
    pub denylist: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            binary: "aws".to_string(),
            default_output_format: "json".to_string(),
            denylist: [
                "delete",
                "terminate",
                "destroy",
                "remove",
                "rm",
                "purge",
                "deregister",
                "disassociate",
                "detach",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl GatewayConfig {
    /// Load config from JSON file, falling back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            log::warn!("Config not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save config to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binary_and_output() {
        let config = GatewayConfig::default();
        assert_eq!(config.binary, "aws");
        assert_eq!(config.default_output_format, "json");
    }

    #[test]
    fn default_denylist_is_complete() {
        let config = GatewayConfig::default();
        let expected = [
            "delete", "terminate", "destroy", "remove", "rm",
            "purge", "deregister", "disassociate", "detach",
        ];
        assert_eq!(config.denylist.len(), expected.len());
        for token in expected {
            assert!(config.denylist.iter().any(|t| t == token), "missing token: {}", token);
        }
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let config = GatewayConfig::load(Path::new("/nonexistent/gateway.json")).unwrap();
        assert_eq!(config.binary, "aws");
        assert_eq!(config.denylist.len(), 9);
    }
}
