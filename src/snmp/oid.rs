//! OID parsing and row-index helpers.

use snmp2::Oid;

use super::SnmpError;

/// Parses a dotted OID string into an owned `Oid`.
pub fn parse_oid(s: &str) -> Result<Oid<'static>, SnmpError> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.map_err(|_| SnmpError::InvalidOid(s.to_string()))?;
    Oid::from(&parts).map_err(|_| SnmpError::InvalidOid(s.to_string()))
}

/// Extracts the trailing dot-separated component of a row OID.
///
/// This is the interface's stable key within one poll: every walked table
/// indexes its rows by the same trailing component.
pub fn row_index(oid: &str) -> &str {
    oid.rsplit('.').next().unwrap_or(oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oid_accepts_leading_dot() {
        assert!(parse_oid(".1.3.6.1.2.1.2.2.1.10").is_ok());
        assert!(parse_oid("1.3.6.1.2.1.2.2.1.10").is_ok());
    }

    #[test]
    fn test_parse_oid_rejects_garbage() {
        assert!(matches!(
            parse_oid("1.3.abc.4"),
            Err(SnmpError::InvalidOid(_))
        ));
    }

    #[test]
    fn test_row_index_takes_last_component() {
        assert_eq!(row_index(".1.3.6.1.2.1.31.1.1.1.1.9"), "9");
        assert_eq!(row_index("1.2.3.528"), "528");
    }
}
