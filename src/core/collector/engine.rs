//! Per-target collection engine.
//!
//! For one target the engine establishes a session, walks the two label
//! tables, then the six counter tables, and finally emits the reachability
//! gauge. The first failure is retained on the scope and every failure is
//! handled best-effort: sibling walks and remaining rows are still
//! attempted so a partial poll yields as much coverage as possible.

use std::time::Duration;

use tracing::{debug, error};

use crate::snmp::{row_index, SnmpConnector, SnmpSession, SnmpValue};

use super::descriptors::{
    CounterTable, ScrapeMetrics, COUNTER_TABLES, IF_DESCRIPTION_OID, IF_NAME_OID, UP_DESC,
};
use super::error::{CollectorError, FirstError};
use super::labels::InterfaceLabels;

/// Session-setup timeout. Fixed by design, not configuration.
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Per-target mutable state for one poll: the accumulated label table and
/// the sticky first error. Owned exclusively by the task collecting the
/// target and discarded when it finishes.
#[derive(Default)]
struct TargetScope {
    labels: InterfaceLabels,
    error: FirstError,
}

/// Collects one target end to end.
///
/// Exactly one `junos_up` sample is emitted per call: 1 if no error was
/// recorded, 0 otherwise. Interface samples are only possible once session
/// setup succeeded; a connect failure skips all walks.
pub async fn collect_target(
    connector: &dyn SnmpConnector,
    target: &str,
    port: u16,
    community: &str,
    metrics: &ScrapeMetrics,
) {
    let mut scope = TargetScope::default();

    match connector.connect(target, port, community, CONNECT_TIMEOUT).await {
        Ok(mut session) => {
            // Both label walks fill the same table and must complete before
            // the counter walks resolve labels from it.
            fetch_labels(session.as_mut(), IF_NAME_OID, 0, &mut scope).await;
            fetch_labels(session.as_mut(), IF_DESCRIPTION_OID, 1, &mut scope).await;

            for table in &COUNTER_TABLES {
                fetch_counters(session.as_mut(), table, target, metrics, &mut scope).await;
            }
            // The session drops here, releasing the transport on every path.
        }
        Err(source) => {
            scope.error.record(CollectorError::Connect {
                target: target.to_string(),
                source,
            });
        }
    }

    let up = match scope.error.get() {
        None => {
            debug!(device = %target, interfaces = scope.labels.len(), "scrape completed");
            1.0
        }
        Some(err) => {
            error!(device = %target, error = %err, "scrape failed");
            0.0
        }
    };

    if let Err(err) = metrics.emit(&UP_DESC, up, &[target]) {
        error!(device = %target, error = %err, "failed to emit reachability metric");
    }
}

/// Walks one label table and records each row's octet-string value at the
/// given label dimension. Failures are recorded but never abort the poll.
async fn fetch_labels(
    session: &mut dyn SnmpSession,
    table_oid: &'static str,
    dimension: usize,
    scope: &mut TargetScope,
) {
    let rows = match session.walk(table_oid).await {
        Ok(rows) => rows,
        Err(source) => {
            scope.error.record(CollectorError::Walk {
                oid: table_oid.to_string(),
                source,
            });
            return;
        }
    };

    for (row_oid, value) in rows {
        match value {
            SnmpValue::Bytes(bytes) => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                scope.labels.record(row_index(&row_oid), dimension, text);
            }
            other => {
                scope.error.record(CollectorError::Decode {
                    oid: table_oid.to_string(),
                    row: row_index(&row_oid).to_string(),
                    expected: "OCTET STRING",
                    found: other.type_name(),
                });
            }
        }
    }
}

/// Walks one counter table and emits a gauge per row, resolving labels by
/// row index and appending the target as the final label. Row-level decode
/// or emit failures are recorded; the remaining rows are still processed.
async fn fetch_counters(
    session: &mut dyn SnmpSession,
    table: &CounterTable,
    target: &str,
    metrics: &ScrapeMetrics,
    scope: &mut TargetScope,
) {
    let rows = match session.walk(table.oid).await {
        Ok(rows) => rows,
        Err(source) => {
            scope.error.record(CollectorError::Walk {
                oid: table.oid.to_string(),
                source,
            });
            return;
        }
    };

    for (row_oid, value) in rows {
        let raw = match value {
            SnmpValue::Unsigned(v) => v,
            other => {
                scope.error.record(CollectorError::Decode {
                    oid: table.oid.to_string(),
                    row: row_index(&row_oid).to_string(),
                    expected: "unsigned integer",
                    found: other.type_name(),
                });
                continue;
            }
        };

        let mut labels = scope.labels.lookup(row_index(&row_oid));
        labels.push(target.to_string());
        let label_values: Vec<&str> = labels.iter().map(String::as_str).collect();

        if let Err(source) = metrics.emit(table.descriptor, (table.convert)(raw), &label_values) {
            scope.error.record(CollectorError::Emit {
                metric: table.descriptor.name,
                source,
            });
        }
    }
}
