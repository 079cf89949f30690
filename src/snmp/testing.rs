//! Scripted SNMP transport for engine and façade tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use super::{SnmpConnector, SnmpError, SnmpSession, SnmpValue};

/// Outcome of one scripted table walk.
#[derive(Clone)]
pub(crate) enum WalkScript {
    Rows(Vec<(String, SnmpValue)>),
    Fail,
}

/// Behavior of one scripted target.
#[derive(Clone, Default)]
pub(crate) struct MockTarget {
    /// Artificial session-setup latency.
    pub connect_delay: Duration,
    /// Whether session setup fails after the delay.
    pub refuse_connect: bool,
    /// Walk outcomes keyed by root OID. Unscripted OIDs walk zero rows.
    pub walks: HashMap<&'static str, WalkScript>,
}

impl MockTarget {
    pub fn with_walk(mut self, root_oid: &'static str, rows: Vec<(String, SnmpValue)>) -> Self {
        self.walks.insert(root_oid, WalkScript::Rows(rows));
        self
    }

    pub fn with_failing_walk(mut self, root_oid: &'static str) -> Self {
        self.walks.insert(root_oid, WalkScript::Fail);
        self
    }
}

/// Connector serving scripted targets. Targets without a script connect
/// instantly and answer every walk with zero rows.
#[derive(Default)]
pub(crate) struct MockConnector {
    targets: HashMap<String, MockTarget>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, name: &str, target: MockTarget) -> Self {
        self.targets.insert(name.to_string(), target);
        self
    }
}

#[async_trait]
impl SnmpConnector for MockConnector {
    async fn connect(
        &self,
        target: &str,
        _port: u16,
        _community: &str,
        _timeout: Duration,
    ) -> Result<Box<dyn SnmpSession>, SnmpError> {
        let script = self.targets.get(target).cloned().unwrap_or_default();

        if script.connect_delay > Duration::ZERO {
            tokio::time::sleep(script.connect_delay).await;
        }

        if script.refuse_connect {
            return Err(SnmpError::Timeout);
        }

        Ok(Box::new(MockSession {
            walks: script.walks,
        }))
    }
}

struct MockSession {
    walks: HashMap<&'static str, WalkScript>,
}

#[async_trait]
impl SnmpSession for MockSession {
    async fn walk(&mut self, root_oid: &str) -> Result<Vec<(String, SnmpValue)>, SnmpError> {
        match self.walks.get(root_oid) {
            Some(WalkScript::Rows(rows)) => Ok(rows.clone()),
            Some(WalkScript::Fail) => Err(SnmpError::Request("scripted walk failure".to_string())),
            None => Ok(Vec::new()),
        }
    }
}

/// Builds a (row OID, value) pair under `root_oid` for interface `index`.
pub(crate) fn row(root_oid: &str, index: u32, value: SnmpValue) -> (String, SnmpValue) {
    (format!("{}.{}", root_oid, index), value)
}
