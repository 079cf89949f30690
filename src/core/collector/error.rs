//! Error taxonomy for per-target collection.
//!
//! None of these errors propagate beyond the engine: each is folded into the
//! target's sticky first-error slot, surfaces as `junos_up 0`, and is written
//! to the operational log. A failing target never aborts sibling targets.

use thiserror::Error;

use crate::snmp::SnmpError;

/// A failure while collecting one target.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Session setup failed. Fatal for the target: no walks are attempted.
    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: SnmpError,
    },

    /// A table walk failed mid-stream. The walk is abandoned; sibling walks
    /// are still attempted.
    #[error("walk of {oid} failed: {source}")]
    Walk {
        oid: String,
        #[source]
        source: SnmpError,
    },

    /// A row's value had an unexpected shape. Recorded for the row only;
    /// remaining rows in the same walk are still processed.
    #[error("row {row} of {oid} has value type {found}, expected {expected}")]
    Decode {
        oid: String,
        row: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Building the output metric failed (label arity mismatch or registry
    /// error).
    #[error("failed to emit {metric}: {source}")]
    Emit {
        metric: &'static str,
        #[source]
        source: prometheus::Error,
    },
}

/// First-error-wins slot for one unit of work.
///
/// The first recorded failure is retained; all later failures are silently
/// dropped. This is a deliberate policy, not aggregation.
#[derive(Debug, Default)]
pub struct FirstError(Option<CollectorError>);

impl FirstError {
    /// Records `err` if no error has been recorded yet.
    pub fn record(&mut self, err: CollectorError) {
        self.0.get_or_insert(err);
    }

    pub fn get(&self) -> Option<&CollectorError> {
        self.0.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_error(oid: &str) -> CollectorError {
        CollectorError::Walk {
            oid: oid.to_string(),
            source: SnmpError::Timeout,
        }
    }

    #[test]
    fn test_first_error_wins() {
        let mut sticky = FirstError::default();
        assert!(!sticky.is_set());

        sticky.record(walk_error("first"));
        sticky.record(walk_error("second"));

        match sticky.get() {
            Some(CollectorError::Walk { oid, .. }) => assert_eq!(oid, "first"),
            other => panic!("unexpected sticky error: {:?}", other),
        }
    }
}
