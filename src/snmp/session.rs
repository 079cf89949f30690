//! Production SNMP transport backed by `snmp2`.
//!
//! Sessions are SNMPv2c over UDP. Table walks use GETBULK and stop as soon
//! as a returned OID leaves the requested subtree. Each request is bounded
//! by the session's own request timeout; the engine's connect timeout only
//! covers session setup.

use std::time::Duration;

use async_trait::async_trait;
use snmp2::{AsyncSession, Value};
use tokio::time::timeout;

use super::{oid::parse_oid, SnmpConnector, SnmpError, SnmpSession, SnmpValue};

/// Rows requested per GETBULK round trip.
const MAX_REPETITIONS: u32 = 25;

/// Timeout applied to every in-session request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Connector producing `snmp2`-backed v2c sessions.
#[derive(Debug, Default)]
pub struct Snmp2Connector;

impl Snmp2Connector {
    pub fn new() -> Self {
        Snmp2Connector
    }
}

#[async_trait]
impl SnmpConnector for Snmp2Connector {
    async fn connect(
        &self,
        target: &str,
        port: u16,
        community: &str,
        connect_timeout: Duration,
    ) -> Result<Box<dyn SnmpSession>, SnmpError> {
        let addr = format!("{}:{}", target, port);
        let session = timeout(
            connect_timeout,
            AsyncSession::new_v2c(&addr, community.as_bytes(), 0),
        )
        .await
        .map_err(|_| SnmpError::Timeout)?
        .map_err(|e| SnmpError::Request(format!("{:?}", e)))?;

        Ok(Box::new(Snmp2Session { session }))
    }
}

/// One live v2c session.
pub struct Snmp2Session {
    session: AsyncSession,
}

#[async_trait]
impl SnmpSession for Snmp2Session {
    async fn walk(&mut self, root_oid: &str) -> Result<Vec<(String, SnmpValue)>, SnmpError> {
        let root = parse_oid(root_oid)?;
        let mut rows = Vec::new();
        let mut current = root.clone();

        loop {
            let resp = timeout(
                REQUEST_TIMEOUT,
                self.session.getbulk(&[&current], 0, MAX_REPETITIONS),
            )
            .await
            .map_err(|_| SnmpError::Timeout)?
            .map_err(|e| SnmpError::Request(format!("{:?}", e)))?;

            let mut advanced = false;
            for (oid, value) in resp.varbinds {
                if !oid.starts_with(&root) {
                    return Ok(rows);
                }

                rows.push((oid.to_string(), decode_value(&value)));
                current = oid.to_owned();
                advanced = true;
            }

            if !advanced {
                break;
            }
        }

        Ok(rows)
    }
}

/// Decodes a wire value into the owned variant the engine consumes.
///
/// Anything that is not an octet string or an unsigned integer type is
/// reported as unsupported rather than cast; the engine turns that into an
/// explicit decode failure.
fn decode_value(value: &Value<'_>) -> SnmpValue {
    match value {
        Value::OctetString(bytes) => SnmpValue::Bytes(bytes.to_vec()),
        Value::Counter32(v) => SnmpValue::Unsigned(u64::from(*v)),
        Value::Unsigned32(v) => SnmpValue::Unsigned(u64::from(*v)),
        Value::Counter64(v) => SnmpValue::Unsigned(*v),
        Value::Timeticks(v) => SnmpValue::Unsigned(u64::from(*v)),
        Value::Integer(v) if *v >= 0 => SnmpValue::Unsigned(*v as u64),
        Value::Integer(_) => SnmpValue::Unsupported("negative INTEGER"),
        Value::Null => SnmpValue::Unsupported("NULL"),
        Value::ObjectIdentifier(_) => SnmpValue::Unsupported("OBJECT IDENTIFIER"),
        Value::IpAddress(_) => SnmpValue::Unsupported("IpAddress"),
        Value::EndOfMibView => SnmpValue::Unsupported("endOfMibView"),
        Value::NoSuchObject => SnmpValue::Unsupported("noSuchObject"),
        Value::NoSuchInstance => SnmpValue::Unsupported("noSuchInstance"),
        _ => SnmpValue::Unsupported("unsupported type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_counters_and_strings() {
        assert_eq!(
            decode_value(&Value::Counter32(42)),
            SnmpValue::Unsigned(42)
        );
        assert_eq!(
            decode_value(&Value::Counter64(u64::MAX)),
            SnmpValue::Unsigned(u64::MAX)
        );
        assert_eq!(
            decode_value(&Value::OctetString(b"ge-0/0/0")),
            SnmpValue::Bytes(b"ge-0/0/0".to_vec())
        );
    }

    #[test]
    fn test_decode_rejects_unusable_types() {
        assert_eq!(
            decode_value(&Value::Integer(-5)),
            SnmpValue::Unsupported("negative INTEGER")
        );
        assert_eq!(decode_value(&Value::Null), SnmpValue::Unsupported("NULL"));
    }
}
