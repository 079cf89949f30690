//! Configuration for the HTTP listener serving the metrics endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Validates that the listen address parses as a socket address.
fn validate_listen_address(addr: &str) -> Result<(), ValidationError> {
    match addr.parse::<std::net::SocketAddr>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("invalid_listen_address");
            err.message = Some(format!("Invalid listen address: {}", addr).into());
            Err(err)
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WebConfig {
    /// Socket address to bind the metrics endpoint to.
    #[validate(custom(function = "validate_listen_address"))]
    pub listen_address: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            listen_address: "0.0.0.0:9326".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(WebConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_garbage_address() {
        let config = WebConfig {
            listen_address: "not-an-address".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
