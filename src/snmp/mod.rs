//! SNMP transport boundary.
//!
//! The collection engine talks to devices exclusively through the
//! `SnmpConnector`/`SnmpSession` traits defined here, which keeps the wire
//! protocol swappable and the engine testable against a scripted session.
//! Raw varbind payloads are decoded into the owned `SnmpValue` variant at
//! this boundary; nothing downstream ever sees an untyped value.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod oid;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use oid::{parse_oid, row_index};
pub use session::Snmp2Connector;

/// Errors produced by the SNMP transport.
#[derive(Debug, Error)]
pub enum SnmpError {
    /// A table OID string could not be parsed.
    #[error("invalid OID '{0}'")]
    InvalidOid(String),

    /// The agent did not answer within the request timeout.
    #[error("request timed out")]
    Timeout,

    /// The underlying SNMP library reported a failure.
    #[error("SNMP request failed: {0}")]
    Request(String),
}

/// A varbind payload decoded into one of the shapes the exporter understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnmpValue {
    /// Any of the unsigned integer types (Counter32/64, Unsigned32, ...).
    Unsigned(u64),
    /// An OCTET STRING payload, as used by the label tables.
    Bytes(Vec<u8>),
    /// A payload the exporter has no use for; carries the wire type name.
    Unsupported(&'static str),
}

impl SnmpValue {
    /// Human-readable type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SnmpValue::Unsigned(_) => "unsigned integer",
            SnmpValue::Bytes(_) => "OCTET STRING",
            SnmpValue::Unsupported(name) => name,
        }
    }
}

/// Establishes sessions to SNMP agents.
#[async_trait]
pub trait SnmpConnector: Send + Sync {
    /// Opens a session to `target`. Session setup is bounded by `timeout`;
    /// a slow or unreachable agent yields an error, not a hang.
    async fn connect(
        &self,
        target: &str,
        port: u16,
        community: &str,
        timeout: Duration,
    ) -> Result<Box<dyn SnmpSession>, SnmpError>;
}

/// An established session to one agent.
///
/// The transport is released when the session is dropped, so every exit path
/// of a collection closes it.
#[async_trait]
pub trait SnmpSession: Send {
    /// Walks all rows under `root_oid` and returns them in table order as
    /// (fully-qualified row OID, decoded value) pairs. A table with zero
    /// rows yields an empty vector, not an error.
    async fn walk(&mut self, root_oid: &str) -> Result<Vec<(String, SnmpValue)>, SnmpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_names() {
        assert_eq!(SnmpValue::Unsigned(1).type_name(), "unsigned integer");
        assert_eq!(SnmpValue::Bytes(vec![]).type_name(), "OCTET STRING");
        assert_eq!(SnmpValue::Unsupported("NULL").type_name(), "NULL");
    }
}
