//! Configuration for SNMP polling: target list and shared credential.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default UDP port for SNMP agents.
fn default_port() -> u16 {
    161
}

fn default_community() -> String {
    "public".to_string()
}

/// SNMP polling configuration.
///
/// The target list is static for the process lifetime; there is no dynamic
/// discovery. All targets share one community string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SnmpConfig {
    /// Addresses of the devices to poll. At least one target is required.
    #[validate(length(min = 1, message = "At least one SNMP target must be configured"))]
    pub targets: Vec<String>,

    /// Community string shared by all targets. Must not be empty.
    #[validate(length(min = 1, message = "SNMP community must not be empty"))]
    pub community: String,

    /// UDP port the agents listen on.
    pub port: u16,
}

impl Default for SnmpConfig {
    fn default() -> Self {
        SnmpConfig {
            targets: Vec::new(),
            community: default_community(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_defaults() {
        let config = SnmpConfig::default();
        assert_eq!(config.community, "public");
        assert_eq!(config.port, 161);
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_validation_requires_targets() {
        let config = SnmpConfig::default();
        assert!(config.validate().is_err());

        let config = SnmpConfig {
            targets: vec!["192.0.2.1".to_string()],
            ..SnmpConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_community() {
        let config = SnmpConfig {
            targets: vec!["192.0.2.1".to_string()],
            community: String::new(),
            ..SnmpConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
